//! Invoices paired with the line sequences reports bill them for
//!
//! A loader may produce line sequences with holes (a line whose item could
//! not be resolved). The book keeps those holes; grand figures skip them.

use std::collections::HashMap;

use core_kernel::{InvoiceId, Money};
use crate::error::BillingError;
use crate::invoice::Invoice;
use crate::items::LineItem;

/// Maps each invoice to the lines billed on it
#[derive(Debug, Clone, Default)]
pub struct InvoiceBook {
    entries: HashMap<Invoice, Vec<Option<LineItem>>>,
}

impl InvoiceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from invoices, using each invoice's own lines
    pub fn from_invoices(invoices: impl IntoIterator<Item = Invoice>) -> Self {
        let mut book = Self::new();
        for invoice in invoices {
            let lines = invoice.lines().iter().cloned().map(Some).collect();
            book.record(invoice, lines);
        }
        book
    }

    /// Records the lines of an invoice, returning any lines previously recorded for it
    pub fn record(&mut self, invoice: Invoice, lines: Vec<Option<LineItem>>) -> Option<Vec<Option<LineItem>>> {
        // `insert` keeps the old key; replace it so the latest invoice value wins.
        let previous = self.entries.remove(&invoice.id);
        self.entries.insert(invoice, lines);
        previous
    }

    /// Looks up an invoice by id
    pub fn invoice(&self, id: &InvoiceId) -> Option<&Invoice> {
        self.entries.get_key_value(id).map(|(invoice, _)| invoice)
    }

    /// Recorded invoices in no particular order
    pub fn invoices(&self) -> impl Iterator<Item = &Invoice> {
        self.entries.keys()
    }

    /// Invoices with their recorded lines
    pub fn iter(&self) -> impl Iterator<Item = (&Invoice, &[Option<LineItem>])> {
        self.entries.iter().map(|(invoice, lines)| (invoice, lines.as_slice()))
    }

    /// The recorded lines of an invoice, absent entries included
    pub fn lines(&self, id: &InvoiceId) -> Result<&[Option<LineItem>], BillingError> {
        self.entries
            .get(id)
            .map(Vec::as_slice)
            .ok_or(BillingError::InvoiceNotFound(*id))
    }

    /// Number of present lines on an invoice
    pub fn line_count(&self, id: &InvoiceId) -> Result<usize, BillingError> {
        Ok(self.lines(id)?.iter().flatten().count())
    }

    pub fn grand_subtotal(&self, id: &InvoiceId) -> Result<Money, BillingError> {
        Ok(Invoice::grand_subtotal(self.lines(id)?))
    }

    pub fn grand_tax(&self, id: &InvoiceId) -> Result<Money, BillingError> {
        Ok(Invoice::grand_tax(self.lines(id)?))
    }

    pub fn grand_total(&self, id: &InvoiceId) -> Result<Money, BillingError> {
        Ok(Invoice::grand_total(self.lines(id)?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Invoice, Vec<Option<LineItem>>)> for InvoiceBook {
    fn from_iter<I: IntoIterator<Item = (Invoice, Vec<Option<LineItem>>)>>(iter: I) -> Self {
        let mut book = Self::new();
        for (invoice, lines) in iter {
            book.record(invoice, lines);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Material;
    use chrono::NaiveDate;
    use core_kernel::{CompanyId, ItemId, PersonId};
    use domain_party::{Address, Company, Person};
    use rust_decimal_macros::dec;

    fn invoice(id: InvoiceId) -> Invoice {
        let customer = Company::new(
            CompanyId::new(),
            "ABC Corporation",
            Person::new(PersonId::new(), "Jane", "Smith", "555-5678"),
            Address::new("123 Business St", "Metropolis", "NY", "10001"),
        );
        Invoice::new(id, customer, None, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn gravel(quantity: i64) -> LineItem {
        LineItem::Material(
            Material::new(ItemId::new(), "Gravel", "ton", Money::new(dec!(50.00)))
                .with_quantity(quantity.into()),
        )
    }

    #[test]
    fn test_book_totals_skip_holes() {
        let id = InvoiceId::new();
        let mut book = InvoiceBook::new();
        book.record(invoice(id), vec![Some(gravel(10)), None, Some(gravel(10))]);

        assert_eq!(book.line_count(&id).unwrap(), 2);
        assert_eq!(book.lines(&id).unwrap().len(), 3);
        assert_eq!(book.grand_subtotal(&id).unwrap(), Money::new(dec!(1000.00)));
        assert_eq!(book.grand_tax(&id).unwrap(), Money::new(dec!(71.50)));
        assert_eq!(book.grand_total(&id).unwrap(), Money::new(dec!(1071.50)));
    }

    #[test]
    fn test_unknown_invoice() {
        let book = InvoiceBook::new();
        let id = InvoiceId::new();
        assert!(matches!(book.grand_total(&id), Err(BillingError::InvoiceNotFound(missing)) if missing == id));
        assert!(book.invoice(&id).is_none());
    }

    #[test]
    fn test_from_invoices_uses_own_lines() {
        let id = InvoiceId::new();
        let book = InvoiceBook::from_invoices([invoice(id).with_lines([gravel(1), gravel(2)])]);

        assert_eq!(book.len(), 1);
        assert_eq!(book.line_count(&id).unwrap(), 2);
        assert_eq!(book.grand_subtotal(&id).unwrap(), Money::new(dec!(150.00)));
    }

    #[test]
    fn test_record_replaces_previous_lines() {
        let id = InvoiceId::new();
        let mut book = InvoiceBook::new();
        assert!(book.record(invoice(id), vec![Some(gravel(1))]).is_none());

        let previous = book.record(invoice(id), vec![]).unwrap();
        assert_eq!(previous.len(), 1);
        assert_eq!(book.len(), 1);
        assert_eq!(book.grand_total(&id).unwrap(), Money::ZERO);
    }
}
