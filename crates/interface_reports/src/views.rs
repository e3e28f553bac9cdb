//! Sorted report views
//!
//! Each view is a [`SortedList`] of borrowed entities built fresh for one
//! report pass. Views never own the invoices or companies they order.

use std::cmp::Ordering;
use tracing::instrument;

use core_kernel::SortedList;
use domain_billing::{comparator, CompanyByTotal, Invoice, InvoiceBook, InvoiceByCustomerName, InvoiceByTotal};
use domain_party::Company;

use crate::aggregation::CompanyTotals;

/// Invoices by grand total, largest first
#[instrument(skip_all, fields(invoices = book.len()))]
pub fn invoices_by_total(
    book: &InvoiceBook,
) -> SortedList<&Invoice, impl Fn(&&Invoice, &&Invoice) -> Ordering> {
    let mut view = SortedList::new(comparator::<Invoice, _>(InvoiceByTotal::new(book)));
    view.add_all(book.invoices());
    view
}

/// Invoices by customer name
#[instrument(skip_all, fields(invoices = book.len()))]
pub fn invoices_by_customer(
    book: &InvoiceBook,
) -> SortedList<&Invoice, impl Fn(&&Invoice, &&Invoice) -> Ordering> {
    let mut view = SortedList::new(comparator::<Invoice, _>(InvoiceByCustomerName));
    view.add_all(book.invoices());
    view
}

/// Companies by invoiced total, smallest first
#[instrument(skip_all, fields(companies = totals.totals().len()))]
pub fn companies_by_total(
    totals: &CompanyTotals,
) -> SortedList<&Company, impl Fn(&&Company, &&Company) -> Ordering + '_> {
    let mut view = SortedList::new(comparator::<Company, _>(CompanyByTotal::new(totals.totals())));
    view.add_all(totals.companies());
    view
}
