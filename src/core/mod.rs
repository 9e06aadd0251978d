//! Core module - data model, catalog and compatibility evaluation

pub mod catalog;
pub mod child;
pub mod config;
pub mod evaluator;
pub mod logging;
pub mod product;
pub mod requirement;

pub use catalog::{Catalog, CatalogError};
pub use child::Child;
pub use config::Config;
pub use evaluator::{check_compatibility, Issue, Verdict};
pub use product::Product;
pub use requirement::{Dimension, InvertedBound, ProductRequirement};
