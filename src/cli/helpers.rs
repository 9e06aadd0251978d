//! Shared helper functions for CLI commands
//!
//! Resolves the layered configuration against the global flags and turns
//! catalog lookups into user-facing diagnostics.

use clap::ValueEnum;
use miette::Result;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Config, Product};

/// Config from file and environment, overridden by command-line flags
pub fn resolve_config(global: &GlobalOpts) -> Config {
    let mut config = Config::load();
    if let Some(ref path) = global.catalog {
        config.catalog = Some(path.clone());
    }
    config
}

/// Output format: flag, then configured default, then auto
pub fn resolve_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    if let Some(format) = global.format {
        return format;
    }

    match config.default_format.as_deref() {
        Some(name) => OutputFormat::from_str(name, true).unwrap_or_else(|_| {
            tracing::warn!(format = name, "unknown default_format in config, using auto");
            OutputFormat::Auto
        }),
        None => OutputFormat::Auto,
    }
}

/// Load the configured catalog
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    Ok(config.catalog()?)
}

/// Look up a product, or fail with the list of known names
pub fn find_product<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Product> {
    catalog.find(name).ok_or_else(|| {
        miette::miette!(
            code = "childfit::product::not_found",
            help = format!("Available products: {}", catalog.names().join(", ")),
            "Product not found: {}",
            name
        )
    })
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
