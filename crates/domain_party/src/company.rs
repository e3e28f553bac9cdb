//! Customer companies
//!
//! A company is identified by its id alone. Two `Company` values with the
//! same id are the same company even if their other fields differ, which
//! makes companies usable as keys of per-company aggregation maps.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use core_kernel::CompanyId;
use crate::address::Address;
use crate::person::Person;

/// A customer company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub contact: Person,
    pub address: Address,
}

impl Company {
    /// Creates a new company
    pub fn new(id: CompanyId, name: impl Into<String>, contact: Person, address: Address) -> Self {
        Self {
            id,
            name: name.into(),
            contact,
            address,
        }
    }
}

impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Company {}

impl Hash for Company {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// Hashes exactly like the id, so maps keyed by company can be queried by id.
impl Borrow<CompanyId> for Company {
    fn borrow(&self) -> &CompanyId {
        &self.id
    }
}
