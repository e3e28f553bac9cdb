//! Party Domain
//!
//! People, postal addresses, and customer companies referenced by invoices.
//! These are value objects assembled by the loading layer; the billing core
//! only reads them.
//!
//! Companies compare and hash by id alone, so they can key per-company
//! aggregation maps:
//!
//! ```rust
//! use core_kernel::{CompanyId, PersonId};
//! use domain_party::{Address, Company, Person};
//!
//! let contact = Person::new(PersonId::new(), "Jane", "Smith", "555-5678");
//! let address = Address::new("123 Business St", "Metropolis", "NY", "10001");
//! let company = Company::new(CompanyId::new(), "ABC Corporation", contact, address);
//!
//! let renamed = Company { name: "ABC Corp".into(), ..company.clone() };
//! assert_eq!(company, renamed);
//! ```

pub mod address;
pub mod person;
pub mod company;
pub mod validation;
pub mod error;

pub use address::Address;
pub use person::Person;
pub use company::Company;
pub use validation::{PartyValidator, ValidationResult};
pub use error::PartyError;
