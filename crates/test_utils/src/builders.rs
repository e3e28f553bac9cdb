//! Test Data Builders
//!
//! Provides builder patterns for constructing invoices with sensible
//! defaults. Tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::{InvoiceId, Money};
use domain_billing::{CatalogItem, Invoice, LineItem, LineTerms};
use domain_party::{Company, Person};
use rust_decimal::Decimal;

use crate::fixtures::{CatalogFixtures, PartyFixtures, TemporalFixtures};

/// Builder for constructing test invoices
pub struct InvoiceBuilder {
    id: InvoiceId,
    customer: Company,
    salesperson: Option<Person>,
    invoice_date: NaiveDate,
    lines: Vec<LineItem>,
}

impl Default for InvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceBuilder {
    /// Creates a new builder with default values and no lines
    pub fn new() -> Self {
        Self {
            id: InvoiceId::new(),
            customer: PartyFixtures::company("ABC Corporation"),
            salesperson: Some(PartyFixtures::salesperson()),
            invoice_date: TemporalFixtures::invoice_date(),
            lines: Vec::new(),
        }
    }

    /// Sets the invoice ID
    pub fn with_id(mut self, id: InvoiceId) -> Self {
        self.id = id;
        self
    }

    /// Sets the customer
    pub fn with_customer(mut self, customer: Company) -> Self {
        self.customer = customer;
        self
    }

    /// Removes the salesperson
    pub fn without_salesperson(mut self) -> Self {
        self.salesperson = None;
        self
    }

    /// Binds `item` to `terms` and appends the line
    ///
    /// # Panics
    ///
    /// Panics if the terms do not fit the item.
    pub fn with_bound(mut self, item: &CatalogItem, terms: LineTerms) -> Self {
        match item.bind(terms) {
            Ok(line) => self.lines.push(line),
            Err(err) => panic!("fixture terms rejected: {err}"),
        }
        self
    }

    /// Appends a purchase of the backhoe fixture
    pub fn with_purchase(self) -> Self {
        self.with_bound(&CatalogFixtures::backhoe(), LineTerms::Purchase)
    }

    /// Appends `tons` of the gravel fixture
    pub fn with_gravel(self, tons: impl Into<Decimal>) -> Self {
        self.with_bound(&CatalogFixtures::gravel(), LineTerms::Material { quantity: tons.into() })
    }

    /// Appends a contract for the current customer at `price`
    pub fn with_contract(self, price: Money) -> Self {
        let contract = CatalogFixtures::grading_contract(self.customer.id);
        self.with_bound(&contract, LineTerms::Contract { price })
    }

    /// Builds the invoice
    pub fn build(self) -> Invoice {
        Invoice::new(self.id, self.customer, self.salesperson, self.invoice_date).with_lines(self.lines)
    }
}
