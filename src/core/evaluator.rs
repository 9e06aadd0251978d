//! Compatibility evaluation
//!
//! Checks a [`Child`] against a [`Product`]'s requirements. Each of the six
//! bounds is checked independently, in a fixed order: age, weight, height,
//! and within each dimension the minimum before the maximum. A child is
//! compatible iff no bound is violated.
//!
//! The evaluator is total: any numeric input, including zero, negative or
//! NaN values and inverted ranges, yields a verdict rather than an error.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::child::Child;
use crate::core::product::Product;
use crate::core::requirement::Dimension;

/// A single violated bound
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    TooYoung { min: u32 },
    TooOld { max: u32 },
    TooLight { min: f64 },
    TooHeavy { max: f64 },
    TooShort { min: f64 },
    TooTall { max: f64 },
}

impl Issue {
    /// The dimension this issue belongs to
    pub fn dimension(&self) -> Dimension {
        match self {
            Issue::TooYoung { .. } | Issue::TooOld { .. } => Dimension::Age,
            Issue::TooLight { .. } | Issue::TooHeavy { .. } => Dimension::Weight,
            Issue::TooShort { .. } | Issue::TooTall { .. } => Dimension::Height,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::TooYoung { min } => write!(f, "Child is too young (min {} mo)", min),
            Issue::TooOld { max } => write!(f, "Child is too old (max {} mo)", max),
            Issue::TooLight { min } => write!(f, "Child is too light (min {} kg)", min),
            Issue::TooHeavy { max } => write!(f, "Child is too heavy (max {} kg)", max),
            Issue::TooShort { min } => write!(f, "Child is too short (min {} cm)", min),
            Issue::TooTall { max } => write!(f, "Child is too tall (max {} cm)", max),
        }
    }
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of a compatibility check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    compatible: bool,
    issues: Vec<Issue>,
}

impl Verdict {
    fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            compatible: issues.is_empty(),
            issues,
        }
    }

    /// True iff there are no issues
    pub fn is_compatible(&self) -> bool {
        self.compatible
    }

    /// Violated bounds in evaluation order
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Issue messages as plain strings
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Check a child against a product's requirements
pub fn check_compatibility(child: &Child, product: &Product) -> Verdict {
    let req = &product.requirements;
    let mut issues = Vec::new();

    if let Some(min) = req.min_age_months {
        if child.age_months < min {
            issues.push(Issue::TooYoung { min });
        }
    }
    if let Some(max) = req.max_age_months {
        if child.age_months > max {
            issues.push(Issue::TooOld { max });
        }
    }
    if let Some(min) = req.min_weight_kg {
        if child.weight_kg < min {
            issues.push(Issue::TooLight { min });
        }
    }
    if let Some(max) = req.max_weight_kg {
        if child.weight_kg > max {
            issues.push(Issue::TooHeavy { max });
        }
    }
    if let Some(min) = req.min_height_cm {
        if child.height_cm < min {
            issues.push(Issue::TooShort { min });
        }
    }
    if let Some(max) = req.max_height_cm {
        if child.height_cm > max {
            issues.push(Issue::TooTall { max });
        }
    }

    let verdict = Verdict::from_issues(issues);
    tracing::debug!(
        child = %child.name,
        product = %product.name,
        compatible = verdict.is_compatible(),
        issues = verdict.issues().len(),
        "evaluated compatibility"
    );
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::requirement::ProductRequirement;

    fn product(name: &str) -> Product {
        Catalog::sample().find(name).cloned().unwrap()
    }

    #[test]
    fn test_infant_within_limits() {
        let verdict = check_compatibility(&Child::new("a", 6, 7.0, 70.0), &product("Infant Car Seat"));
        assert!(verdict.is_compatible());
        assert!(verdict.issues().is_empty());
    }

    #[test]
    fn test_toddler_outgrew_infant_seat() {
        let verdict = check_compatibility(&Child::new("a", 24, 10.0, 90.0), &product("Infant Car Seat"));
        assert!(!verdict.is_compatible());
        assert_eq!(
            verdict.messages(),
            vec!["Child is too old (max 12 mo)", "Child is too tall (max 76 cm)"]
        );
    }

    #[test]
    fn test_baby_too_small_for_high_chair() {
        let verdict = check_compatibility(&Child::new("a", 3, 5.0, 50.0), &product("High Chair"));
        assert!(!verdict.is_compatible());
        assert_eq!(
            verdict.issues(),
            &[
                Issue::TooYoung { min: 6 },
                Issue::TooLight { min: 7.0 },
                Issue::TooShort { min: 65.0 },
            ]
        );
        assert_eq!(verdict.messages()[1], "Child is too light (min 7 kg)");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let p = product("Infant Car Seat");
        let at_max = Child::new("a", 12, 13.6, 76.0);
        assert!(check_compatibility(&at_max, &p).is_compatible());
        let at_min = Child::new("a", 0, 2.3, 1.0);
        assert!(check_compatibility(&at_min, &p).is_compatible());
    }

    #[test]
    fn test_unconstrained_product_accepts_anything() {
        let p = Product::new("Blanket", "Bedding", ProductRequirement::unconstrained());
        for child in [
            Child::new("a", 0, 0.0, 0.0),
            Child::new("a", u32::MAX, f64::MAX, -5.0),
            Child::new("a", 7, f64::NAN, f64::INFINITY),
        ] {
            let verdict = check_compatibility(&child, &p);
            assert!(verdict.is_compatible());
        }
    }

    #[test]
    fn test_unbounded_dimension_never_reports() {
        let p = Product::new(
            "Bouncer",
            "Seat",
            ProductRequirement::unconstrained().with_weight(Some(3.0), Some(9.0)),
        );
        let verdict = check_compatibility(&Child::new("a", 500, 20.0, 999.0), &p);
        assert_eq!(verdict.issues(), &[Issue::TooHeavy { max: 9.0 }]);
        assert!(verdict.issues().iter().all(|i| i.dimension() == Dimension::Weight));
    }

    #[test]
    fn test_issues_follow_dimension_order() {
        let p = Product::new(
            "Picky",
            "Test",
            ProductRequirement::unconstrained()
                .with_age(None, Some(1))
                .with_weight(Some(50.0), None)
                .with_height(None, Some(10.0)),
        );
        let verdict = check_compatibility(&Child::new("a", 2, 1.0, 20.0), &p);
        let dims: Vec<Dimension> = verdict.issues().iter().map(Issue::dimension).collect();
        assert_eq!(dims, Dimension::ALL.to_vec());
    }

    #[test]
    fn test_inverted_range_reports_both_sides() {
        let p = Product::new(
            "Broken",
            "Test",
            ProductRequirement::unconstrained().with_height(Some(100.0), Some(50.0)),
        );
        let verdict = check_compatibility(&Child::new("a", 1, 1.0, 75.0), &p);
        assert_eq!(
            verdict.issues(),
            &[Issue::TooShort { min: 100.0 }, Issue::TooTall { max: 50.0 }]
        );
    }

    #[test]
    fn test_verdict_agrees_with_issue_list() {
        let catalog = Catalog::sample();
        for age in [0, 3, 6, 12, 24, 48, 60] {
            for weight in [1.0, 5.0, 10.0, 20.0, 30.0] {
                for height in [40.0, 65.0, 80.0, 110.0] {
                    let child = Child::new("a", age, weight, height);
                    for p in catalog.list() {
                        let verdict = check_compatibility(&child, p);
                        assert_eq!(verdict.is_compatible(), verdict.issues().is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_verdict_serializes_messages() {
        let verdict = check_compatibility(&Child::new("a", 24, 10.0, 70.0), &product("Infant Car Seat"));
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["compatible"], false);
        assert_eq!(json["issues"][0], "Child is too old (max 12 mo)");
    }
}
