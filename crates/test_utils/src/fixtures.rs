//! Pre-built Test Fixtures
//!
//! Provides ready-to-use parties and catalog items. Amounts match the worked
//! examples used throughout the billing tests.

use chrono::NaiveDate;
use core_kernel::{CompanyId, InvoiceId, ItemId, Money, PersonId};
use domain_billing::{CatalogItem, Contract, Equipment, Material};
use domain_party::{Address, Company, Person};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for people and companies
pub struct PartyFixtures;

impl PartyFixtures {
    /// A company contact with a well-formed e-mail address
    pub fn contact() -> Person {
        Person::new(PersonId::new(), "Jane", "Smith", "555-5678").with_email("contact@abccorp.com")
    }

    /// A salesperson
    pub fn salesperson() -> Person {
        Person::new(PersonId::new(), "John", "Doe", "555-1234").with_email("john.doe@example.com")
    }

    /// A business address
    pub fn address() -> Address {
        Address::new("123 Business St", "Metropolis", "NY", "10001")
    }

    /// A company with the given name and a fresh id
    pub fn company(name: &str) -> Company {
        Company::new(CompanyId::new(), name, Self::contact(), Self::address())
    }

    /// A company whose id sorts by `rank` (smaller ranks sort first)
    pub fn company_ranked(name: &str, rank: u8) -> Company {
        Company::new(IdFixtures::company_id(rank), name, Self::contact(), Self::address())
    }
}

/// Fixture for catalog items
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Equipment priced at 95125.00
    pub fn backhoe() -> CatalogItem {
        Equipment::new(ItemId::new(), "Backhoe 3000", "BH30X2", Money::new(dec!(95125.00))).into()
    }

    /// Equipment priced at 12000.00
    pub fn skid_loader() -> CatalogItem {
        Equipment::new(ItemId::new(), "Skid Loader", "SL-200", Money::new(dec!(12000.00))).into()
    }

    /// Material priced at 50.00 per ton
    pub fn gravel() -> CatalogItem {
        Material::new(ItemId::new(), "Gravel", "ton", Money::new(dec!(50.00))).into()
    }

    /// Catalog contract for `customer` awaiting a negotiated price
    pub fn grading_contract(customer: CompanyId) -> CatalogItem {
        Contract::new(ItemId::new(), "Site grading", customer, Money::ZERO).into()
    }
}

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn invoice_date() -> NaiveDate {
        Self::date(2024, 3, 15)
    }

    pub fn lease_start() -> NaiveDate {
        Self::date(2024, 1, 1)
    }

    /// 883 days after [`lease_start`](Self::lease_start), counting both ends
    pub fn lease_end() -> NaiveDate {
        Self::date(2026, 6, 1)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
    }
}

/// Fixture for identifiers with a known order
pub struct IdFixtures;

impl IdFixtures {
    /// An invoice id whose order among ranked ids follows `rank`
    pub fn invoice_id(rank: u8) -> InvoiceId {
        InvoiceId::from_uuid(Self::ranked_uuid(rank))
    }

    /// A company id whose order among ranked ids follows `rank`
    pub fn company_id(rank: u8) -> CompanyId {
        CompanyId::from_uuid(Self::ranked_uuid(rank))
    }

    fn ranked_uuid(rank: u8) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[0] = rank;
        Uuid::from_bytes(bytes)
    }
}
