//! Product entity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::requirement::ProductRequirement;

/// A product with its usage limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    /// Product name, also the lookup key (case-insensitive)
    pub name: String,

    /// Free-form grouping label (e.g. "Car Seat")
    pub category: String,

    /// Allowed ranges
    #[serde(default)]
    pub requirements: ProductRequirement,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        requirements: ProductRequirement,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            requirements,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Case-insensitive match on the whole name
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} | Requirements: {}",
            self.name, self.category, self.description, self.requirements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_is_case_insensitive_and_exact() {
        let product = Product::new("High Chair", "High Chair", ProductRequirement::default());
        assert!(product.matches_name("high chair"));
        assert!(product.matches_name("HIGH CHAIR"));
        assert!(!product.matches_name("high"));
        assert!(!product.matches_name("high chair "));
    }

    #[test]
    fn test_display() {
        let product = Product::new(
            "Bouncer",
            "Seat",
            ProductRequirement::default().with_weight(None, Some(9.0)),
        )
        .with_description("Rocks gently.");
        assert_eq!(
            product.to_string(),
            "Bouncer (Seat): Rocks gently. | Requirements: Max Weight: 9 kg"
        );
    }
}
