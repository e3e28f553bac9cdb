//! Billing domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{InvoiceId, ItemId, TemporalError};

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// A type code that names no known item or line kind
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    /// Transaction terms that cannot be bound to the catalog item
    #[error("Cannot bind {terms} terms to {kind} item {item}")]
    InvalidTerms {
        item: ItemId,
        kind: &'static str,
        terms: &'static str,
    },

    /// Lease dates missing or inverted
    #[error("Invalid lease period for item {item}: {source}")]
    InvalidLeasePeriod {
        item: ItemId,
        #[source]
        source: TemporalError,
    },

    /// A quantity or hour count below zero
    #[error("Negative {field} for item {item}: {value}")]
    NegativeQuantity {
        item: ItemId,
        field: &'static str,
        value: Decimal,
    },

    /// Invoice not found
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),
}

impl BillingError {
    pub fn unknown_item_type(code: impl Into<String>) -> Self {
        BillingError::UnknownItemType(code.into())
    }
}
