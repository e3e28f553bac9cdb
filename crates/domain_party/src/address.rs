//! Postal addresses

use serde::{Deserialize, Serialize};

/// A postal address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    /// Creates a new address
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }

    /// Formats the address for display on two lines
    pub fn format(&self) -> String {
        format!("{}\n{}, {} {}", self.street, self.city, self.state, self.zip)
    }
}
