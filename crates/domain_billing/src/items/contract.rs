//! Service contracts billed at a negotiated price

use serde::{Deserialize, Serialize};

use core_kernel::{CompanyId, ItemId, Money};
use crate::charge::Chargeable;

/// A service contract for one customer
///
/// Contracts are untaxed. The catalog entry carries a placeholder price that
/// is replaced by the negotiated one when the contract is invoiced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ItemId,
    pub name: String,
    pub customer: CompanyId,
    pub price: Money,
}

impl Contract {
    pub fn new(id: ItemId, name: impl Into<String>, customer: CompanyId, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            customer,
            price,
        }
    }

    /// Returns a copy carrying the negotiated price
    pub fn with_price(&self, price: Money) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }
}

impl Chargeable for Contract {
    fn subtotal(&self) -> Money {
        self.price.round_to_cent()
    }

    fn taxes(&self) -> Money {
        Money::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_contract_is_untaxed() {
        let catalog = Contract::new(ItemId::new(), "Site grading", CompanyId::new(), Money::ZERO);
        let bound = catalog.with_price(Money::new(dec!(12000.00)));

        assert_eq!(bound.subtotal(), Money::new(dec!(12000.00)));
        assert_eq!(bound.taxes(), Money::ZERO);
        assert_eq!(bound.total(), bound.subtotal());
        assert_eq!(catalog.price, Money::ZERO);
        assert_eq!(bound.customer, catalog.customer);
    }
}
