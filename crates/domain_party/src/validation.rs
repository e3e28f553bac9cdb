//! Party validation rules
//!
//! Loaders run these checks while assembling people and companies, before
//! the entities reach the billing core.
//!
//! # Validation Rules
//!
//! ## Persons
//! - Must have first name and last name
//! - Every e-mail address must be well formed
//! - A missing phone number is a warning only
//!
//! ## Companies
//! - Must have a name
//! - The contact person must be valid
//! - The address must have street, city, and zip

use validator::ValidateEmail;

use crate::address::Address;
use crate::company::Company;
use crate::error::PartyError;
use crate::person::Person;

/// Result of party validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the entity is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Converts into a `Result`, joining all errors
    pub fn into_result(self) -> Result<(), PartyError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(PartyError::validation_failed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for people, addresses, and companies
pub struct PartyValidator;

impl PartyValidator {
    /// Validates a person
    pub fn validate_person(person: &Person) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if person.first_name.trim().is_empty() {
            result.add_error(format!("Person {} first name is required", person.id));
        }
        if person.last_name.trim().is_empty() {
            result.add_error(format!("Person {} last name is required", person.id));
        }
        for email in &person.emails {
            if !email.validate_email() {
                result.add_error(format!("Invalid email format: {}", email));
            }
        }
        if person.phone.trim().is_empty() {
            result.add_warning(format!("Person {} has no phone number", person.id));
        }

        result
    }

    /// Validates an address
    pub fn validate_address(address: &Address) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if address.street.trim().is_empty() {
            result.add_error("Address street is required");
        }
        if address.city.trim().is_empty() {
            result.add_error("Address city is required");
        }
        if address.zip.trim().is_empty() {
            result.add_error("Address zip is required");
        }

        result
    }

    /// Validates a company together with its contact and address
    pub fn validate_company(company: &Company) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if company.name.trim().is_empty() {
            result.add_error(format!("Company {} name is required", company.id));
        }
        result.merge(Self::validate_person(&company.contact));
        result.merge(Self::validate_address(&company.address));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CompanyId, PersonId};

    fn valid_person() -> Person {
        Person::new(PersonId::new(), "Jane", "Smith", "555-5678").with_email("contact@abccorp.com")
    }

    #[test]
    fn test_valid_person() {
        let result = PartyValidator::validate_person(&valid_person());
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_bad_email_rejected() {
        let person = valid_person().with_email("not-an-email");
        let result = PartyValidator::validate_person(&person);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("not-an-email"));
    }

    #[test]
    fn test_missing_phone_is_warning() {
        let person = Person::new(PersonId::new(), "Jane", "Smith", "");
        let result = PartyValidator::validate_person(&person);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_company_merges_nested_errors() {
        let company = Company::new(
            CompanyId::new(),
            " ",
            Person::new(PersonId::new(), "", "Smith", "555-0000"),
            Address::new("", "Lincoln", "NE", "68508"),
        );
        let result = PartyValidator::validate_company(&company);
        assert_eq!(result.errors.len(), 3);
        assert!(matches!(result.into_result(), Err(PartyError::ValidationFailed(_))));
    }
}
