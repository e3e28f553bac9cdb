//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating catalog items, terms, and
//! invoices that respect the billing invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::{CompanyId, InvoiceId, ItemId, Money};
use domain_billing::{CatalogItem, Contract, Equipment, Invoice, LineItem, LineTerms, Material};
use domain_party::Company;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::fixtures::{PartyFixtures, TemporalFixtures};

/// Strategy for prices between 0.01 and 250000.00
pub fn price_strategy() -> impl Strategy<Value = Money> + Clone {
    (1i64..25_000_000i64).prop_map(Money::from_cents)
}

/// Strategy for non-negative quantities with up to two decimal places
pub fn quantity_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for lease boundaries, end never before start
pub fn lease_terms_strategy() -> impl Strategy<Value = LineTerms> {
    (0i64..2_000i64, 0i64..2_000i64).prop_map(|(offset, length)| {
        let start = TemporalFixtures::lease_start() + Duration::days(offset);
        let end: NaiveDate = start + Duration::days(length);
        LineTerms::Lease {
            start: Some(start),
            end: Some(end),
        }
    })
}

/// Strategy for a bound invoice line of any kind
pub fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    let equipment = price_strategy()
        .prop_map(|price| CatalogItem::from(Equipment::new(ItemId::new(), "Equipment", "EQ-1", price)));

    prop_oneof![
        equipment.clone().prop_map(|item| bind(&item, LineTerms::Purchase)),
        (equipment.clone(), lease_terms_strategy()).prop_map(|(item, terms)| bind(&item, terms)),
        (equipment, quantity_strategy())
            .prop_map(|(item, hours)| bind(&item, LineTerms::Rental { hours })),
        (price_strategy(), quantity_strategy()).prop_map(|(price, quantity)| {
            let item = CatalogItem::from(Material::new(ItemId::new(), "Material", "unit", price));
            bind(&item, LineTerms::Material { quantity })
        }),
        price_strategy().prop_map(|price| {
            let item = CatalogItem::from(Contract::new(ItemId::new(), "Contract", CompanyId::new(), Money::ZERO));
            bind(&item, LineTerms::Contract { price })
        }),
    ]
}

/// Strategy for a company with a random id
pub fn company_strategy() -> impl Strategy<Value = Company> {
    ("[A-Z][a-z]{2,10}", any::<u128>()).prop_map(|(name, id)| {
        let mut company = PartyFixtures::company(&name);
        company.id = CompanyId::from_uuid(Uuid::from_u128(id));
        company
    })
}

/// Strategy for an invoice with up to `max_lines` lines for one of `customers`
pub fn invoice_strategy(customers: Vec<Company>, max_lines: usize) -> impl Strategy<Value = Invoice> {
    (
        prop::sample::select(customers),
        any::<u128>(),
        prop::collection::vec(line_item_strategy(), 0..=max_lines),
    )
        .prop_map(|(customer, id, lines)| {
            Invoice::new(
                InvoiceId::from_uuid(Uuid::from_u128(id)),
                customer,
                None,
                TemporalFixtures::invoice_date(),
            )
            .with_lines(lines)
        })
}

// Generated terms always fit the generated item.
fn bind(item: &CatalogItem, terms: LineTerms) -> LineItem {
    match item.bind(terms) {
        Ok(line) => line,
        Err(err) => panic!("generated terms rejected: {err}"),
    }
}
