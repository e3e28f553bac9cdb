//! Per-company and per-invoice figures for the reports
//!
//! [`CompanyTotals`] sums invoice grand totals per customer and counts their
//! invoices. [`InvoiceSummary`] turns invoices into report rows with a
//! footer of column totals, and [`InvoiceDetail`] breaks one invoice down
//! line by line.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use core_kernel::{CompanyId, InvoiceId, ItemId, Money};
use domain_billing::{Chargeable, Invoice, InvoiceBook, LineItem, LineKind};
use domain_party::Company;

use crate::error::ReportError;

/// Invoiced totals and invoice counts per company
#[derive(Debug, Clone, Default)]
pub struct CompanyTotals {
    totals: HashMap<Company, Money>,
    counts: HashMap<CompanyId, usize>,
}

impl CompanyTotals {
    /// Aggregates the book over the company registry
    ///
    /// Invoices whose customer is not in `companies` are left out with a
    /// warning. With `include_idle`, registered companies without invoices
    /// are listed at 0.00.
    pub fn compute(companies: &[Company], book: &InvoiceBook, include_idle: bool) -> Self {
        let registry: HashMap<CompanyId, &Company> = companies.iter().map(|c| (c.id, c)).collect();
        let mut aggregate = Self::default();

        if include_idle {
            for company in companies {
                aggregate.totals.entry(company.clone()).or_insert(Money::ZERO);
            }
        }

        for (invoice, lines) in book.iter() {
            let Some(company) = registry.get(&invoice.customer.id) else {
                warn!(
                    invoice_id = %invoice.id,
                    company_id = %invoice.customer.id,
                    "Invoice references unknown company"
                );
                continue;
            };
            let total = Invoice::grand_total(lines);
            let entry = aggregate.totals.entry((*company).clone()).or_insert(Money::ZERO);
            *entry = *entry + total;
            *aggregate.counts.entry(company.id).or_insert(0) += 1;
        }

        aggregate
    }

    /// Invoiced total of a company, 0.00 when it has none
    pub fn total_of(&self, id: &CompanyId) -> Money {
        self.totals.get(id).copied().unwrap_or(Money::ZERO)
    }

    /// Number of invoices billed to a company
    pub fn invoice_count(&self, id: &CompanyId) -> usize {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Companies listed in the aggregate
    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.totals.keys()
    }

    /// Company to total mapping, as consumed by the company ordering
    pub fn totals(&self) -> &HashMap<Company, Money> {
        &self.totals
    }

    /// Sum over all listed companies
    pub fn grand_total(&self) -> Money {
        self.totals.values().sum()
    }

    /// Report rows for `companies`, in the order given
    pub fn rows<'a>(&self, companies: impl IntoIterator<Item = &'a Company>) -> Vec<CompanySummaryRow> {
        companies
            .into_iter()
            .map(|company| CompanySummaryRow {
                company_id: company.id,
                name: company.name.clone(),
                invoice_count: self.invoice_count(&company.id),
                total: self.total_of(&company.id),
            })
            .collect()
    }

    /// Company report for `companies`, in the order given, with its footer
    ///
    /// The footer counts every aggregated invoice and sums every listed total.
    pub fn summary<'a>(&self, companies: impl IntoIterator<Item = &'a Company>) -> CompanySummary {
        CompanySummary {
            rows: self.rows(companies),
            footer: CompanyFooter {
                invoice_count: self.counts.values().sum(),
                total: self.grand_total(),
            },
        }
    }
}

/// One line of the company report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySummaryRow {
    pub company_id: CompanyId,
    pub name: String,
    pub invoice_count: usize,
    pub total: Money,
}

/// Totals line of the company report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyFooter {
    pub invoice_count: usize,
    pub total: Money,
}

/// Company report rows and their footer
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompanySummary {
    pub rows: Vec<CompanySummaryRow>,
    pub footer: CompanyFooter,
}

/// One line of an invoice report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummaryRow {
    pub invoice_id: InvoiceId,
    pub customer_name: String,
    /// Salesperson as "Last, First"
    pub salesperson: Option<String>,
    pub line_count: usize,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Column totals of an invoice report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryFooter {
    pub line_count: usize,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

/// Invoice report rows and their footer
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceSummary {
    pub rows: Vec<InvoiceSummaryRow>,
    pub footer: SummaryFooter,
}

impl InvoiceSummary {
    /// Summarizes `invoices`, in the order given, from the lines in `book`
    ///
    /// # Errors
    ///
    /// Returns a billing error if an invoice has no lines recorded in the book.
    pub fn build<'a>(
        invoices: impl IntoIterator<Item = &'a Invoice>,
        book: &InvoiceBook,
    ) -> Result<Self, ReportError> {
        let mut summary = Self::default();

        for invoice in invoices {
            let lines = book.lines(&invoice.id)?;
            let row = InvoiceSummaryRow {
                invoice_id: invoice.id,
                customer_name: invoice.customer.name.clone(),
                salesperson: invoice.salesperson.as_ref().map(|p| p.sort_name()),
                line_count: lines.iter().flatten().count(),
                subtotal: Invoice::grand_subtotal(lines),
                tax: Invoice::grand_tax(lines),
                total: Invoice::grand_total(lines),
            };

            let footer = &mut summary.footer;
            footer.line_count += row.line_count;
            footer.subtotal = footer.subtotal + row.subtotal;
            footer.tax = footer.tax + row.tax;
            footer.total = footer.total + row.total;
            summary.rows.push(row);
        }

        Ok(summary)
    }
}

/// One line of an invoice detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummaryRow {
    pub item_id: ItemId,
    pub name: String,
    pub kind: LineKind,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl From<&LineItem> for LineSummaryRow {
    fn from(line: &LineItem) -> Self {
        Self {
            item_id: line.item_id(),
            name: line.name().to_string(),
            kind: line.kind(),
            subtotal: line.subtotal(),
            tax: line.taxes(),
            total: line.total(),
        }
    }
}

/// Line-by-line breakdown of one invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDetail {
    pub invoice_id: InvoiceId,
    pub invoice_date: NaiveDate,
    pub customer_name: String,
    /// Customer contact as "Last, First"
    pub contact: String,
    /// Salesperson as "Last, First"
    pub salesperson: Option<String>,
    pub lines: Vec<LineSummaryRow>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl InvoiceDetail {
    /// Details `invoice` from its lines in `book`, skipping absent entries
    ///
    /// # Errors
    ///
    /// Returns a billing error if the invoice has no lines recorded in the book.
    pub fn build(invoice: &Invoice, book: &InvoiceBook) -> Result<Self, ReportError> {
        let lines = book.lines(&invoice.id)?;

        Ok(Self {
            invoice_id: invoice.id,
            invoice_date: invoice.invoice_date,
            customer_name: invoice.customer.name.clone(),
            contact: invoice.customer.contact.sort_name(),
            salesperson: invoice.salesperson.as_ref().map(|p| p.sort_name()),
            lines: lines.iter().flatten().map(LineSummaryRow::from).collect(),
            subtotal: Invoice::grand_subtotal(lines),
            tax: Invoice::grand_tax(lines),
            total: Invoice::grand_total(lines),
        })
    }
}
