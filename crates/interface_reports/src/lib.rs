//! Report Generation Layer
//!
//! This crate turns an invoice book and a company registry into the billing
//! reports: invoices by total, invoices by customer, companies by invoiced
//! total, and a line-by-line detail of every invoice.
//!
//! # Architecture
//!
//! - **Aggregation**: Per-company totals and invoice counts, invoice summary and detail rows
//! - **Views**: Sorted report orderings over borrowed entities
//! - **Configuration**: Environment-driven settings
//! - **Telemetry**: Tracing subscriber setup
//!
//! Text layout is left to the caller; every row type is serializable.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_reports::{generate, telemetry, ReportConfig};
//!
//! let config = ReportConfig::from_env()?;
//! telemetry::init_tracing(&config);
//! let report = generate(&config, &companies, &book)?;
//! ```

pub mod config;
pub mod error;
pub mod telemetry;
pub mod aggregation;
pub mod views;

use serde::Serialize;
use tracing::info;

use domain_billing::InvoiceBook;
use domain_party::Company;

pub use aggregation::{
    CompanyFooter, CompanySummary, CompanySummaryRow, CompanyTotals, InvoiceDetail, InvoiceSummary,
    InvoiceSummaryRow, LineSummaryRow, SummaryFooter,
};
pub use crate::config::ReportConfig;
pub use error::ReportError;

/// The reports of one generation pass
#[derive(Debug, Clone, Serialize)]
pub struct BillingReport {
    /// Invoices by grand total, largest first
    pub by_total: InvoiceSummary,
    /// Invoices by customer name
    pub by_customer: InvoiceSummary,
    /// Companies by invoiced total, smallest first
    pub companies: CompanySummary,
    /// Every invoice line by line, in by-total order
    pub details: Vec<InvoiceDetail>,
}

/// Builds every report for the invoices in `book`
///
/// # Errors
///
/// Returns an error if a report row cannot be computed.
pub fn generate(
    config: &ReportConfig,
    companies: &[Company],
    book: &InvoiceBook,
) -> Result<BillingReport, ReportError> {
    info!(
        invoices = book.len(),
        companies = companies.len(),
        "Generating billing reports"
    );

    let ranked = views::invoices_by_total(book);
    let by_total = InvoiceSummary::build(ranked.iter().copied(), book)?;
    let by_customer = InvoiceSummary::build(views::invoices_by_customer(book).iter().copied(), book)?;
    let details = ranked
        .iter()
        .map(|invoice| InvoiceDetail::build(invoice, book))
        .collect::<Result<Vec<_>, _>>()?;

    let totals = CompanyTotals::compute(companies, book, config.include_idle_companies);
    let company_summary = totals.summary(views::companies_by_total(&totals).iter().copied());

    Ok(BillingReport {
        by_total,
        by_customer,
        companies: company_summary,
        details,
    })
}
