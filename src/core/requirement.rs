//! Product usage limits

use serde::{Deserialize, Serialize};
use std::fmt;

/// One measurement dimension of a child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Age,
    Weight,
    Height,
}

impl Dimension {
    /// All dimensions in evaluation order
    pub const ALL: [Dimension; 3] = [Dimension::Age, Dimension::Weight, Dimension::Height];

    /// Unit suffix used in messages
    pub fn unit(&self) -> &'static str {
        match self {
            Dimension::Age => "mo",
            Dimension::Weight => "kg",
            Dimension::Height => "cm",
        }
    }

    /// Capitalized label
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Age => "Age",
            Dimension::Weight => "Weight",
            Dimension::Height => "Height",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Age => write!(f, "age"),
            Dimension::Weight => write!(f, "weight"),
            Dimension::Height => write!(f, "height"),
        }
    }
}

/// A dimension whose minimum is greater than its maximum
#[derive(Debug, Clone, PartialEq)]
pub struct InvertedBound {
    pub dimension: Dimension,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for InvertedBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.dimension.unit();
        write!(
            f,
            "{} minimum {} {} is greater than maximum {} {}",
            self.dimension, self.min, unit, self.max, unit
        )
    }
}

/// Allowed ranges for a product
///
/// Every bound is optional. `None` means "no constraint on this side",
/// which is not the same as a bound of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductRequirement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age_months: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_months: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_weight_kg: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight_kg: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height_cm: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height_cm: Option<f64>,
}

impl ProductRequirement {
    /// A requirement with no bounds at all
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn with_age(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_age_months = min;
        self.max_age_months = max;
        self
    }

    pub fn with_weight(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_weight_kg = min;
        self.max_weight_kg = max;
        self
    }

    pub fn with_height(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_height_cm = min;
        self.max_height_cm = max;
        self
    }

    /// Bounds for a dimension as `(min, max)`
    pub fn bounds(&self, dimension: Dimension) -> (Option<f64>, Option<f64>) {
        match dimension {
            Dimension::Age => (
                self.min_age_months.map(f64::from),
                self.max_age_months.map(f64::from),
            ),
            Dimension::Weight => (self.min_weight_kg, self.max_weight_kg),
            Dimension::Height => (self.min_height_cm, self.max_height_cm),
        }
    }

    /// Whether no bound is set in any dimension
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|d| self.bounds(*d) == (None, None))
    }

    /// Range for one dimension as `"min - max"`, with `-` for an absent side
    pub fn range_label(&self, dimension: Dimension) -> String {
        let (min, max) = self.bounds(dimension);
        format!("{} - {}", format_bound(min), format_bound(max))
    }

    /// Human-readable list of the bounds that are present
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        for dimension in Dimension::ALL {
            let (min, max) = self.bounds(dimension);
            if let Some(min) = min {
                parts.push(format!("Min {}: {} {}", dimension.label(), min, dimension.unit()));
            }
            if let Some(max) = max {
                parts.push(format!("Max {}: {} {}", dimension.label(), max, dimension.unit()));
            }
        }

        if parts.is_empty() {
            "No requirements".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Dimensions where both bounds are set and min > max
    ///
    /// The evaluator never calls this; an inverted range simply makes
    /// every value fail that dimension.
    pub fn validate(&self) -> Vec<InvertedBound> {
        Dimension::ALL
            .iter()
            .filter_map(|&dimension| match self.bounds(dimension) {
                (Some(min), Some(max)) if min > max => Some(InvertedBound { dimension, min, max }),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for ProductRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

fn format_bound(bound: Option<f64>) -> String {
    bound.map_or_else(|| "-".to_string(), |v| v.to_string())
}
