//! childfit: Child Fit Checker
//!
//! Checks whether a child's age, weight and height fall within the usage
//! limits of a product such as a car seat, high chair or stroller. This is
//! an advisory tool, not a certified safety authority.
//!
//! ```
//! use childfit::core::{check_compatibility, Catalog, Child};
//!
//! let catalog = Catalog::sample();
//! let seat = catalog.find("infant car seat").unwrap();
//! let verdict = check_compatibility(&Child::new("Ava", 6, 7.0, 70.0), seat);
//! assert!(verdict.is_compatible());
//! ```

pub mod cli;
pub mod core;
pub mod yaml;
