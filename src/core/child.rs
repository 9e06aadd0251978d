//! Child measurements

use serde::Serialize;
use std::fmt;

/// Name used when none (or only whitespace) is given
pub const DEFAULT_CHILD_NAME: &str = "Child";

/// A child's measurements for a single compatibility check
///
/// No validation happens here: zero or negative values are accepted and
/// passed straight to the evaluator. Positivity is enforced by the
/// interactive shell before a `Child` is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Child {
    /// Display name
    pub name: String,

    /// Age in whole months
    pub age_months: u32,

    /// Weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters
    pub height_cm: f64,
}

impl Child {
    /// Create a child, substituting [`DEFAULT_CHILD_NAME`] for a blank name
    pub fn new(name: impl Into<String>, age_months: u32, weight_kg: f64, height_cm: f64) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            DEFAULT_CHILD_NAME.to_string()
        } else {
            name.trim().to_string()
        };

        Self {
            name,
            age_months,
            weight_kg,
            height_cm,
        }
    }

    /// Age in years, rounded to 2 decimals (half away from zero)
    pub fn age_years(&self) -> f64 {
        (f64::from(self.age_months) / 12.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Age: {} months / {} years, Weight: {} kg, Height: {} cm)",
            self.name,
            self.age_months,
            self.age_years(),
            self.weight_kg,
            self.height_cm
        )
    }
}
