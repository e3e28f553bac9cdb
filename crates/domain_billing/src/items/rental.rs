//! Equipment rented by the hour

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};
use crate::charge::Chargeable;
use crate::error::BillingError;
use crate::items::equipment::Equipment;
use crate::items::non_negative;

/// Tax on rental charges
pub const RENTAL_TAX_RATE: Rate = Rate::new(dec!(0.0438));

/// Fraction of the purchase price charged per hour
const HOURLY_FACTOR: Decimal = dec!(0.001);

/// An hourly rental of one piece of equipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RentalFields")]
pub struct Rental {
    pub equipment: Equipment,
    pub hours: Decimal,
}

#[derive(Deserialize)]
struct RentalFields {
    equipment: Equipment,
    hours: Decimal,
}

impl TryFrom<RentalFields> for Rental {
    type Error = BillingError;

    fn try_from(fields: RentalFields) -> Result<Self, Self::Error> {
        non_negative(fields.equipment.id, "hours", fields.hours)?;
        Ok(Self::new(fields.equipment, fields.hours))
    }
}

impl Rental {
    pub fn new(equipment: Equipment, hours: Decimal) -> Self {
        Self { equipment, hours }
    }

    /// Unrounded charge per hour
    pub fn hourly_rate(&self) -> Money {
        self.equipment.price * HOURLY_FACTOR
    }
}

impl Chargeable for Rental {
    fn subtotal(&self) -> Money {
        (self.hourly_rate() * self.hours).round_to_cent()
    }

    // Tax is taken from the rounded subtotal.
    fn taxes(&self) -> Money {
        RENTAL_TAX_RATE.apply_rounded(&self.subtotal())
    }
}
