//! Core Kernel - Foundational types and utilities for the billing system
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Money with decimal arithmetic and round-half-up cent rounding
//! - Inclusive calendar periods
//! - Strongly-typed identifiers
//! - A comparator-ordered collection for report orderings

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod sorted;
pub mod error;

pub use money::{round_to_cent, Money, MoneyError, Rate};
pub use temporal::{DatePeriod, TemporalError};
pub use identifiers::{CompanyId, InvoiceId, ItemId, PersonId};
pub use sorted::{SortedList, SortedListError};
pub use error::CoreError;
