//! Product catalog
//!
//! An ordered, read-only list of products. The built-in sample catalog
//! carries the four reference products; a catalog can also be read from a
//! YAML file of the form:
//!
//! ```yaml
//! products:
//!   - name: Booster Seat
//!     category: Car Seat
//!     description: High-back booster.
//!     requirements:
//!       min_age_months: 48
//!       min_weight_kg: 18
//!       max_weight_kg: 36
//! ```

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::product::Product;
use crate::core::requirement::ProductRequirement;
use crate::yaml::YamlSyntaxError;

/// Errors from loading a catalog file
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    #[diagnostic(code(childfit::catalog::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("{reason} (product #{index} {name:?} in {file})")]
    #[diagnostic(
        code(childfit::catalog::invalid_product),
        help("Each product needs a non-empty name, and each minimum must not exceed its maximum.")
    )]
    InvalidProduct {
        file: String,
        index: usize,
        name: String,
        reason: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Fixed, ordered collection of products
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, keeping their order
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in reference catalog
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new(
                "Infant Car Seat",
                "Car Seat",
                ProductRequirement::unconstrained()
                    .with_age(Some(0), Some(12))
                    .with_weight(Some(2.3), Some(13.6))
                    .with_height(None, Some(76.0)),
            )
            .with_description("Rear-facing seat for infants."),
            Product::new(
                "Convertible Car Seat",
                "Car Seat",
                ProductRequirement::unconstrained()
                    .with_age(Some(0), Some(48))
                    .with_weight(Some(2.3), Some(18.1))
                    .with_height(None, Some(102.0)),
            )
            .with_description("Can be used rear- or forward-facing."),
            Product::new(
                "High Chair",
                "High Chair",
                ProductRequirement::unconstrained()
                    .with_age(Some(6), Some(36))
                    .with_weight(Some(7.0), Some(15.0))
                    .with_height(Some(65.0), None),
            )
            .with_description("For feeding infants and toddlers."),
            Product::new(
                "Umbrella Stroller",
                "Stroller",
                ProductRequirement::unconstrained()
                    .with_age(Some(6), Some(48))
                    .with_weight(Some(7.0), Some(22.7))
                    .with_height(Some(65.0), None),
            )
            .with_description("Lightweight stroller for travel."),
        ])
    }

    /// Load a catalog from a YAML file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source, &path.display().to_string())
    }

    /// Parse and validate a YAML catalog
    ///
    /// `filename` is only used in diagnostics.
    pub fn from_yaml_str(source: &str, filename: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yml::from_str(source)
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, filename))?;

        for (i, product) in file.products.iter().enumerate() {
            let invalid = |reason: String| CatalogError::InvalidProduct {
                file: filename.to_string(),
                index: i + 1,
                name: product.name.clone(),
                reason,
            };

            if product.name.trim().is_empty() {
                return Err(invalid("name is empty".to_string()));
            }
            if let Some(inverted) = product.requirements.validate().first() {
                return Err(invalid(inverted.to_string()));
            }
        }

        tracing::debug!(file = filename, products = file.products.len(), "loaded catalog");
        Ok(Self::new(file.products))
    }

    /// Serialize to the YAML catalog format
    pub fn to_yaml(&self) -> Result<String, serde_yml::Error> {
        serde_yml::to_string(&CatalogFile {
            products: self.products.clone(),
        })
    }

    /// All products in insertion order
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// First product whose name equals `name`, ignoring case
    pub fn find(&self, name: &str) -> Option<&Product> {
        let found = self.products.iter().find(|p| p.matches_name(name));
        tracing::debug!(name, found = found.is_some(), "catalog lookup");
        found
    }

    /// Product at a 1-based position
    pub fn get(&self, number: usize) -> Option<&Product> {
        number.checked_sub(1).and_then(|i| self.products.get(i))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product names in order, for "did you mean" style help
    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }
}
