//! Consumable materials billed by quantity

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{ItemId, Money, Rate};
use crate::charge::Chargeable;
use crate::error::BillingError;
use crate::items::non_negative;

/// Sales tax on materials
pub const MATERIAL_TAX_RATE: Rate = Rate::new(dec!(0.0715));

/// A material, either as a catalog entry (zero quantity) or bound to an invoice line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MaterialFields")]
pub struct Material {
    pub id: ItemId,
    pub name: String,
    /// Unit label such as "bag" or "ton"
    pub unit: String,
    pub unit_price: Money,
    pub quantity: Decimal,
}

#[derive(Deserialize)]
struct MaterialFields {
    id: ItemId,
    name: String,
    unit: String,
    unit_price: Money,
    quantity: Decimal,
}

impl TryFrom<MaterialFields> for Material {
    type Error = BillingError;

    fn try_from(fields: MaterialFields) -> Result<Self, Self::Error> {
        non_negative(fields.id, "quantity", fields.quantity)?;
        Ok(Self {
            id: fields.id,
            name: fields.name,
            unit: fields.unit,
            unit_price: fields.unit_price,
            quantity: fields.quantity,
        })
    }
}

impl Material {
    /// Creates a catalog material with no quantity bound yet
    pub fn new(id: ItemId, name: impl Into<String>, unit: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            unit: unit.into(),
            unit_price,
            quantity: Decimal::ZERO,
        }
    }

    /// Returns a copy of this material carrying `quantity`; `self` is left untouched
    pub fn with_quantity(&self, quantity: Decimal) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl Chargeable for Material {
    fn subtotal(&self) -> Money {
        (self.unit_price * self.quantity).round_to_cent()
    }

    fn taxes(&self) -> Money {
        MATERIAL_TAX_RATE.apply_rounded(&self.subtotal())
    }
}
