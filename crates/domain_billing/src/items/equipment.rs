//! Equipment sold outright

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{ItemId, Money, Rate};
use crate::charge::Chargeable;

/// Sales tax on an equipment purchase
pub const PURCHASE_TAX_RATE: Rate = Rate::new(dec!(0.0525));

/// A piece of equipment from the catalog
///
/// Also the descriptor that leases and rentals are written against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: ItemId,
    pub name: String,
    pub model: String,
    /// Catalog purchase price
    pub price: Money,
}

impl Equipment {
    /// Creates a new equipment item
    pub fn new(id: ItemId, name: impl Into<String>, model: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            model: model.into(),
            price,
        }
    }
}

impl Chargeable for Equipment {
    fn subtotal(&self) -> Money {
        self.price.round_to_cent()
    }

    fn taxes(&self) -> Money {
        PURCHASE_TAX_RATE.apply_rounded(&self.price)
    }
}
