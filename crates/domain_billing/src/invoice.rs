//! The invoice aggregate
//!
//! An invoice records one sale to a customer company: who sold it, when,
//! and the ordered lines billed. Lines keep their insertion order.
//!
//! Invoices compare and hash by id alone. Two `Invoice` values with the same
//! id are the same invoice whatever lines they carry, so invoices can key
//! maps (see [`InvoiceBook`](crate::book::InvoiceBook)) while reports still
//! order them by computed figures.
//!
//! Grand figures are sums over a line sequence. The associated functions
//! [`Invoice::grand_subtotal`], [`Invoice::grand_tax`] and
//! [`Invoice::grand_total`] accept any sequence, including one with absent
//! entries, which are skipped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use tracing::trace;

use core_kernel::{InvoiceId, Money};
use domain_party::{Company, Person};
use crate::charge::Chargeable;
use crate::items::LineItem;

/// An invoice for one customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Customer being billed
    pub customer: Company,
    /// Salesperson credited with the sale, if any
    pub salesperson: Option<Person>,
    /// Invoice date
    pub invoice_date: NaiveDate,
    /// Billed lines in insertion order
    lines: Vec<LineItem>,
}

impl Invoice {
    /// Creates an invoice with no lines
    pub fn new(
        id: InvoiceId,
        customer: Company,
        salesperson: Option<Person>,
        invoice_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            customer,
            salesperson,
            invoice_date,
            lines: Vec::new(),
        }
    }

    /// Replaces the lines of the invoice
    pub fn with_lines(mut self, lines: impl IntoIterator<Item = LineItem>) -> Self {
        self.lines = lines.into_iter().collect();
        self
    }

    /// Appends a line
    pub fn add_line(&mut self, line: LineItem) {
        self.lines.push(line);
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Sum of the line subtotals of `lines`, skipping absent entries
    pub fn grand_subtotal<'a, I, L>(lines: I) -> Money
    where
        I: IntoIterator<Item = L>,
        L: Into<Option<&'a LineItem>>,
    {
        sum_present(lines, LineItem::subtotal)
    }

    /// Sum of the line taxes of `lines`, skipping absent entries
    pub fn grand_tax<'a, I, L>(lines: I) -> Money
    where
        I: IntoIterator<Item = L>,
        L: Into<Option<&'a LineItem>>,
    {
        sum_present(lines, LineItem::taxes)
    }

    /// Sum of the line totals of `lines`, skipping absent entries
    pub fn grand_total<'a, I, L>(lines: I) -> Money
    where
        I: IntoIterator<Item = L>,
        L: Into<Option<&'a LineItem>>,
    {
        sum_present(lines, LineItem::total)
    }
}

fn sum_present<'a, I, L>(lines: I, figure: fn(&LineItem) -> Money) -> Money
where
    I: IntoIterator<Item = L>,
    L: Into<Option<&'a LineItem>>,
{
    let mut sum = Money::ZERO;
    for (position, line) in lines.into_iter().enumerate() {
        let line: Option<&LineItem> = line.into();
        match line {
            Some(line) => sum = sum + figure(line),
            None => trace!(position, "Skipping absent invoice line"),
        }
    }
    sum
}

impl Chargeable for Invoice {
    fn subtotal(&self) -> Money {
        Self::grand_subtotal(&self.lines)
    }

    fn taxes(&self) -> Money {
        Self::grand_tax(&self.lines)
    }

    fn total(&self) -> Money {
        Self::grand_total(&self.lines)
    }
}

impl PartialEq for Invoice {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Invoice {}

impl Hash for Invoice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Borrow<InvoiceId> for Invoice {
    fn borrow(&self) -> &InvoiceId {
        &self.id
    }
}
