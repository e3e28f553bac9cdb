//! Equipment leased over a period of days
//!
//! The lease charge amortizes the equipment price over five years and adds
//! a 50% markup:
//!
//! ```text
//! subtotal = round((days / 365 / 5) * price * 1.5)
//! taxes    = 1500.00 if subtotal > 12500.00, otherwise 0
//! ```
//!
//! The flat tax is compared against the rounded subtotal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{round_to_cent, DatePeriod, Money};
use crate::charge::Chargeable;
use crate::items::equipment::Equipment;

/// Flat tax charged on large leases
pub const LEASE_FLAT_TAX: Money = Money::new(dec!(1500.00));

/// Subtotal above which the flat tax applies
pub const LEASE_TAX_THRESHOLD: Money = Money::new(dec!(12500.00));

const DAYS_PER_YEAR: Decimal = dec!(365);
const AMORTIZATION_YEARS: Decimal = dec!(5);
const LEASE_MARKUP: Decimal = dec!(1.5);

/// A lease of one piece of equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    pub equipment: Equipment,
    pub period: DatePeriod,
}

impl Lease {
    /// Creates a lease over an already validated period
    pub fn new(equipment: Equipment, period: DatePeriod) -> Self {
        Self { equipment, period }
    }

    /// Number of days billed, counting both the first and the last day
    pub fn days(&self) -> i64 {
        self.period.days()
    }
}

impl Chargeable for Lease {
    fn subtotal(&self) -> Money {
        let years = Decimal::from(self.days()) / DAYS_PER_YEAR;
        let amortized = years / AMORTIZATION_YEARS * self.equipment.price.amount() * LEASE_MARKUP;
        Money::new(round_to_cent(amortized))
    }

    fn taxes(&self) -> Money {
        if self.subtotal() > LEASE_TAX_THRESHOLD {
            LEASE_FLAT_TAX
        } else {
            Money::ZERO
        }
    }
}
