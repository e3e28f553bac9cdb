//! Billing Domain - Line-Item Charges, Invoices, and Report Orderings
//!
//! This crate computes what a customer owes. Catalog items (equipment,
//! materials, contracts) are bound to transaction terms to form invoice
//! lines; every line reports a subtotal, taxes, and a total in whole cents.
//!
//! # Line kinds
//!
//! | Line      | Subtotal                                   | Taxes                        |
//! |-----------|--------------------------------------------|------------------------------|
//! | Purchase  | price                                      | 5.25% of price               |
//! | Lease     | days / 365 / 5 × price × 1.5               | 1500.00 above 12500.00       |
//! | Rental    | hours × price × 0.001                      | 4.38% of subtotal            |
//! | Material  | unit price × quantity                      | 7.15% of subtotal            |
//! | Contract  | negotiated price                           | none                         |
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{ItemId, Money};
//! use domain_billing::{CatalogItem, Chargeable, Equipment, LineTerms};
//! use rust_decimal_macros::dec;
//!
//! let backhoe: CatalogItem =
//!     Equipment::new(ItemId::new(), "Backhoe 3000", "BH30X2", Money::new(dec!(95125.00))).into();
//!
//! let line = backhoe.bind(LineTerms::Purchase)?;
//! assert_eq!(line.taxes(), Money::new(dec!(4994.06)));
//! assert_eq!(line.total(), Money::new(dec!(100119.06)));
//! # Ok::<(), domain_billing::BillingError>(())
//! ```

pub mod charge;
pub mod items;
pub mod invoice;
pub mod book;
pub mod ordering;
pub mod error;

pub use charge::Chargeable;
pub use items::{
    CatalogItem, CatalogKind, Contract, Equipment, Lease, LineItem, LineKind, LineTerms, Material,
    Rental,
};
pub use invoice::Invoice;
pub use book::InvoiceBook;
pub use ordering::{comparator, CompanyByTotal, InvoiceByCustomerName, InvoiceByTotal, OrderingPolicy};
pub use error::BillingError;
