//! Catalog items and the invoice lines bound from them
//!
//! The catalog holds three kinds of item: equipment, materials, and
//! contracts. Placing an item on an invoice binds it to transaction terms and
//! yields one of five [`LineItem`] kinds:
//!
//! | Catalog   | Terms                    | Line       |
//! |-----------|--------------------------|------------|
//! | Equipment | `Purchase`               | `Purchase` |
//! | Equipment | `Lease { start, end }`   | `Lease`    |
//! | Equipment | `Rental { hours }`       | `Rental`   |
//! | Material  | `Material { quantity }`  | `Material` |
//! | Contract  | `Contract { price }`     | `Contract` |
//!
//! Binding never modifies the catalog item.

pub mod equipment;
pub mod material;
pub mod contract;
pub mod lease;
pub mod rental;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use core_kernel::{DatePeriod, ItemId, Money};
use crate::charge::Chargeable;
use crate::error::BillingError;

pub use contract::Contract;
pub use equipment::Equipment;
pub use lease::Lease;
pub use material::Material;
pub use rental::Rental;

/// Kind of a catalog item, stored as a one-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    Equipment,
    Material,
    Contract,
}

impl CatalogKind {
    pub fn code(&self) -> char {
        match self {
            CatalogKind::Equipment => 'E',
            CatalogKind::Material => 'M',
            CatalogKind::Contract => 'C',
        }
    }

    pub fn from_code(code: &str) -> Result<Self, BillingError> {
        match code.trim() {
            "E" => Ok(CatalogKind::Equipment),
            "M" => Ok(CatalogKind::Material),
            "C" => Ok(CatalogKind::Contract),
            other => Err(BillingError::unknown_item_type(other)),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CatalogKind::Equipment => "equipment",
            CatalogKind::Material => "material",
            CatalogKind::Contract => "contract",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CatalogKind {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Kind of an invoice line, stored as a one-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Purchase,
    Lease,
    Rental,
    Material,
    Contract,
}

impl LineKind {
    pub fn code(&self) -> char {
        match self {
            LineKind::Purchase => 'P',
            LineKind::Lease => 'L',
            LineKind::Rental => 'R',
            LineKind::Material => 'M',
            LineKind::Contract => 'C',
        }
    }

    pub fn from_code(code: &str) -> Result<Self, BillingError> {
        match code.trim() {
            "P" => Ok(LineKind::Purchase),
            "L" => Ok(LineKind::Lease),
            "R" => Ok(LineKind::Rental),
            "M" => Ok(LineKind::Material),
            "C" => Ok(LineKind::Contract),
            other => Err(BillingError::unknown_item_type(other)),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LineKind::Purchase => "purchase",
            LineKind::Lease => "lease",
            LineKind::Rental => "rental",
            LineKind::Material => "material",
            LineKind::Contract => "contract",
        }
    }

    /// The catalog kind a line of this kind is bound from
    pub fn catalog_kind(&self) -> CatalogKind {
        match self {
            LineKind::Purchase | LineKind::Lease | LineKind::Rental => CatalogKind::Equipment,
            LineKind::Material => CatalogKind::Material,
            LineKind::Contract => CatalogKind::Contract,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LineKind {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Transaction-specific terms supplied when an item is invoiced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineTerms {
    Purchase,
    /// Lease boundaries as loaded; both are required
    Lease {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    Rental { hours: Decimal },
    Material { quantity: Decimal },
    Contract { price: Money },
}

impl LineTerms {
    /// The line kind these terms produce
    pub fn line_kind(&self) -> LineKind {
        match self {
            LineTerms::Purchase => LineKind::Purchase,
            LineTerms::Lease { .. } => LineKind::Lease,
            LineTerms::Rental { .. } => LineKind::Rental,
            LineTerms::Material { .. } => LineKind::Material,
            LineTerms::Contract { .. } => LineKind::Contract,
        }
    }
}

/// An entry of the item catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogItem {
    Equipment(Equipment),
    Material(Material),
    Contract(Contract),
}

impl CatalogItem {
    pub fn id(&self) -> ItemId {
        match self {
            CatalogItem::Equipment(e) => e.id,
            CatalogItem::Material(m) => m.id,
            CatalogItem::Contract(c) => c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Equipment(e) => &e.name,
            CatalogItem::Material(m) => &m.name,
            CatalogItem::Contract(c) => &c.name,
        }
    }

    pub fn kind(&self) -> CatalogKind {
        match self {
            CatalogItem::Equipment(_) => CatalogKind::Equipment,
            CatalogItem::Material(_) => CatalogKind::Material,
            CatalogItem::Contract(_) => CatalogKind::Contract,
        }
    }

    /// Binds this catalog item to transaction terms, producing an invoice line
    ///
    /// # Errors
    ///
    /// - [`BillingError::InvalidTerms`] if the terms do not fit the item kind
    /// - [`BillingError::InvalidLeasePeriod`] if a lease boundary is missing or
    ///   the end precedes the start
    /// - [`BillingError::NegativeQuantity`] for negative hours or quantities
    pub fn bind(&self, terms: LineTerms) -> Result<LineItem, BillingError> {
        let id = self.id();
        let line = match (self, terms) {
            (CatalogItem::Equipment(e), LineTerms::Purchase) => LineItem::Purchase(e.clone()),
            (CatalogItem::Equipment(e), LineTerms::Lease { start, end }) => {
                let period = DatePeriod::from_options(start, end)
                    .map_err(|source| BillingError::InvalidLeasePeriod { item: id, source })?;
                LineItem::Lease(Lease::new(e.clone(), period))
            }
            (CatalogItem::Equipment(e), LineTerms::Rental { hours }) => {
                non_negative(id, "hours", hours)?;
                LineItem::Rental(Rental::new(e.clone(), hours))
            }
            (CatalogItem::Material(m), LineTerms::Material { quantity }) => {
                non_negative(id, "quantity", quantity)?;
                LineItem::Material(m.with_quantity(quantity))
            }
            (CatalogItem::Contract(c), LineTerms::Contract { price }) => {
                LineItem::Contract(c.with_price(price))
            }
            (item, terms) => {
                return Err(BillingError::InvalidTerms {
                    item: id,
                    kind: item.kind().label(),
                    terms: terms.line_kind().label(),
                });
            }
        };

        debug!(item_id = %id, kind = %line.kind(), "Bound catalog item to invoice line");
        Ok(line)
    }
}

pub(crate) fn non_negative(item: ItemId, field: &'static str, value: Decimal) -> Result<(), BillingError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(BillingError::NegativeQuantity { item, field, value });
    }
    Ok(())
}

impl From<Equipment> for CatalogItem {
    fn from(item: Equipment) -> Self {
        CatalogItem::Equipment(item)
    }
}

impl From<Material> for CatalogItem {
    fn from(item: Material) -> Self {
        CatalogItem::Material(item)
    }
}

impl From<Contract> for CatalogItem {
    fn from(item: Contract) -> Self {
        CatalogItem::Contract(item)
    }
}

/// One billable line of an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineItem {
    Purchase(Equipment),
    Lease(Lease),
    Rental(Rental),
    Material(Material),
    Contract(Contract),
}

impl LineItem {
    pub fn kind(&self) -> LineKind {
        match self {
            LineItem::Purchase(_) => LineKind::Purchase,
            LineItem::Lease(_) => LineKind::Lease,
            LineItem::Rental(_) => LineKind::Rental,
            LineItem::Material(_) => LineKind::Material,
            LineItem::Contract(_) => LineKind::Contract,
        }
    }

    /// Id of the catalog item the line was bound from
    pub fn item_id(&self) -> ItemId {
        match self {
            LineItem::Purchase(e) => e.id,
            LineItem::Lease(l) => l.equipment.id,
            LineItem::Rental(r) => r.equipment.id,
            LineItem::Material(m) => m.id,
            LineItem::Contract(c) => c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LineItem::Purchase(e) => &e.name,
            LineItem::Lease(l) => &l.equipment.name,
            LineItem::Rental(r) => &r.equipment.name,
            LineItem::Material(m) => &m.name,
            LineItem::Contract(c) => &c.name,
        }
    }
}

impl Chargeable for LineItem {
    fn subtotal(&self) -> Money {
        match self {
            LineItem::Purchase(e) => e.subtotal(),
            LineItem::Lease(l) => l.subtotal(),
            LineItem::Rental(r) => r.subtotal(),
            LineItem::Material(m) => m.subtotal(),
            LineItem::Contract(c) => c.subtotal(),
        }
    }

    fn taxes(&self) -> Money {
        match self {
            LineItem::Purchase(e) => e.taxes(),
            LineItem::Lease(l) => l.taxes(),
            LineItem::Rental(r) => r.taxes(),
            LineItem::Material(m) => m.taxes(),
            LineItem::Contract(c) => c.taxes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CompanyId, TemporalError};
    use rust_decimal_macros::dec;

    fn backhoe() -> CatalogItem {
        Equipment::new(ItemId::new(), "Backhoe 3000", "BH30X2", Money::new(dec!(95125.00))).into()
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_codes_round_trip() {
        for kind in [CatalogKind::Equipment, CatalogKind::Material, CatalogKind::Contract] {
            assert_eq!(CatalogKind::from_code(&kind.code().to_string()).unwrap(), kind);
        }
        for kind in [LineKind::Purchase, LineKind::Lease, LineKind::Rental, LineKind::Material, LineKind::Contract] {
            assert_eq!(kind.code().to_string().parse::<LineKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(matches!(CatalogKind::from_code("X"), Err(BillingError::UnknownItemType(code)) if code == "X"));
        assert!(matches!(LineKind::from_code("E"), Err(BillingError::UnknownItemType(_))));
    }

    #[test]
    fn test_bind_equipment_three_ways() {
        let item = backhoe();

        let purchase = item.bind(LineTerms::Purchase).unwrap();
        let lease = item
            .bind(LineTerms::Lease { start: date(2024, 1, 1), end: date(2026, 6, 1) })
            .unwrap();
        let rental = item.bind(LineTerms::Rental { hours: dec!(25) }).unwrap();

        assert_eq!(purchase.kind(), LineKind::Purchase);
        assert_eq!(purchase.total(), Money::new(dec!(100119.06)));
        assert_eq!(lease.kind(), LineKind::Lease);
        assert_eq!(lease.total(), Money::new(dec!(70537.29)));
        assert_eq!(rental.kind(), LineKind::Rental);
        assert_eq!(rental.item_id(), item.id());
        assert_eq!(rental.name(), "Backhoe 3000");
    }

    #[test]
    fn test_bind_does_not_touch_catalog() {
        let catalog: CatalogItem =
            Material::new(ItemId::new(), "Gravel", "ton", Money::new(dec!(50.00))).into();
        let before = catalog.clone();

        let line = catalog.bind(LineTerms::Material { quantity: dec!(10) }).unwrap();

        assert_eq!(catalog, before);
        assert_eq!(line.total(), Money::new(dec!(535.75)));
    }

    #[test]
    fn test_bind_contract_price() {
        let catalog: CatalogItem =
            Contract::new(ItemId::new(), "Site grading", CompanyId::new(), Money::ZERO).into();
        let line = catalog
            .bind(LineTerms::Contract { price: Money::new(dec!(8500.00)) })
            .unwrap();

        assert_eq!(line.subtotal(), Money::new(dec!(8500.00)));
        assert_eq!(line.taxes(), Money::ZERO);
    }

    #[test]
    fn test_mismatched_terms_rejected() {
        let err = backhoe().bind(LineTerms::Material { quantity: dec!(1) }).unwrap_err();
        assert!(matches!(
            err,
            BillingError::InvalidTerms { kind: "equipment", terms: "material", .. }
        ));
    }

    #[test]
    fn test_lease_period_validated() {
        let missing = backhoe().bind(LineTerms::Lease { start: date(2024, 1, 1), end: None });
        assert!(matches!(
            missing,
            Err(BillingError::InvalidLeasePeriod { source: TemporalError::MissingBoundary("end"), .. })
        ));

        let inverted = backhoe().bind(LineTerms::Lease { start: date(2024, 2, 1), end: date(2024, 1, 1) });
        assert!(matches!(inverted, Err(BillingError::InvalidLeasePeriod { .. })));
    }

    #[test]
    fn test_negative_hours_rejected() {
        let err = backhoe().bind(LineTerms::Rental { hours: dec!(-1) }).unwrap_err();
        assert!(matches!(err, BillingError::NegativeQuantity { field: "hours", .. }));
    }

    #[test]
    fn test_zero_hour_rental_binds() {
        let line = backhoe().bind(LineTerms::Rental { hours: Decimal::ZERO }).unwrap();
        assert!(line.total().is_zero());
    }
}
