//! Core error types used across the system

use thiserror::Error;
use crate::money::MoneyError;
use crate::sorted::SortedListError;
use crate::temporal::TemporalError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Collection error: {0}")]
    Collection(#[from] SortedListError),
}
