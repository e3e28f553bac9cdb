//! Report orderings
//!
//! Each policy is a strict weak ordering: irreflexive, transitive, and
//! consistent between calls. Every policy ends with an id tie-break, so two
//! distinct entities never compare equal and a sorted walk is deterministic.
//! Ids order by their UUID bytes, which matches ordering their lowercase
//! hyphenated text.
//!
//! ```rust,ignore
//! let policy = InvoiceByTotal::new(&book);
//! let mut view = SortedList::new(comparator(policy));
//! view.add_all(book.invoices());
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use core_kernel::{InvoiceId, Money};
use domain_party::Company;
use crate::book::InvoiceBook;
use crate::charge::Chargeable;
use crate::invoice::Invoice;

/// A total order over `T`
pub trait OrderingPolicy<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Adapts a policy into a comparator over borrowed entities
pub fn comparator<T, P>(policy: P) -> impl Fn(&&T, &&T) -> Ordering
where
    P: OrderingPolicy<T>,
{
    move |a: &&T, b: &&T| policy.compare(a, b)
}

/// Invoices by grand total, largest first, then by ascending id
///
/// Totals are computed once from the book's line sequences. An invoice the
/// book does not know is ranked by its own lines.
#[derive(Debug, Clone)]
pub struct InvoiceByTotal {
    totals: HashMap<InvoiceId, Money>,
}

impl InvoiceByTotal {
    pub fn new(book: &InvoiceBook) -> Self {
        let totals = book
            .iter()
            .map(|(invoice, lines)| (invoice.id, Invoice::grand_total(lines)))
            .collect();
        Self { totals }
    }

    /// Grand total used to rank `invoice`
    pub fn total_of(&self, invoice: &Invoice) -> Money {
        self.totals
            .get(&invoice.id)
            .copied()
            .unwrap_or_else(|| invoice.total())
    }
}

impl OrderingPolicy<Invoice> for InvoiceByTotal {
    fn compare(&self, a: &Invoice, b: &Invoice) -> Ordering {
        self.total_of(b)
            .cmp(&self.total_of(a))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Invoices by customer name, then by ascending id
///
/// Names compare by UTF-8 byte order, which is `str` ordering. It is
/// case-sensitive and does not collate accented letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceByCustomerName;

impl OrderingPolicy<Invoice> for InvoiceByCustomerName {
    fn compare(&self, a: &Invoice, b: &Invoice) -> Ordering {
        a.customer
            .name
            .cmp(&b.customer.name)
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Companies by invoiced total, smallest first, then by ascending id
///
/// Companies missing from the totals map rank as 0.00.
#[derive(Debug, Clone, Copy)]
pub struct CompanyByTotal<'a> {
    totals: &'a HashMap<Company, Money>,
}

impl<'a> CompanyByTotal<'a> {
    pub fn new(totals: &'a HashMap<Company, Money>) -> Self {
        Self { totals }
    }

    pub fn total_of(&self, company: &Company) -> Money {
        self.totals.get(company).copied().unwrap_or(Money::ZERO)
    }
}

impl OrderingPolicy<Company> for CompanyByTotal<'_> {
    fn compare(&self, a: &Company, b: &Company) -> Ordering {
        self.total_of(a)
            .cmp(&self.total_of(b))
            .then_with(|| a.id.cmp(&b.id))
    }
}
