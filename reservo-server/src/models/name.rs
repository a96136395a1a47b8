//! Customer and restaurant names
//!
//! Both tables store names as `VARCHAR(55) NOT NULL UNIQUE`, so the same
//! rules apply to either: trimmed, non-empty, at most 55 characters.

use super::ValidationError;

/// Matches the `VARCHAR(55)` column width.
pub const MAX_NAME_LEN: usize = 55;

fn validate(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }

    if trimmed.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must not contain control characters".to_owned(),
        });
    }

    Ok(trimmed.to_owned())
}

/// Validated customer name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerName(String);

impl CustomerName {
    /// Create a customer name, trimming surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use reservo_server::models::CustomerName;
    ///
    /// assert_eq!(CustomerName::new("  Sally ").unwrap().as_str(), "Sally");
    /// assert!(CustomerName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validate("customer name", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated restaurant name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestaurantName(String);

impl RestaurantName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validate("restaurant name", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RestaurantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
