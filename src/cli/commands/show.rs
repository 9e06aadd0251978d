//! `childfit show` command - product details

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{find_product, load_catalog, resolve_config, resolve_format};
use crate::cli::table::TextTable;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Dimension, Product};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Product name (case-insensitive)
    pub name: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let format = resolve_format(global, &config);
    let catalog = load_catalog(&config)?;

    let product = find_product(&catalog, &args.name)?;
    print!("{}", render(product, format)?);
    Ok(())
}

pub fn render(product: &Product, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(product).into_diagnostic()?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => serde_yml::to_string(product).into_diagnostic(),
        OutputFormat::Auto => Ok(render_details(product)),
        OutputFormat::Table | OutputFormat::Tsv | OutputFormat::Csv | OutputFormat::Md => {
            let mut table = TextTable::new(["Dimension", "Min", "Max", "Unit"]);
            for dimension in Dimension::ALL {
                let (min, max) = product.requirements.bounds(dimension);
                table.push_row([
                    dimension.to_string(),
                    min.map_or_else(|| "-".to_string(), |v| v.to_string()),
                    max.map_or_else(|| "-".to_string(), |v| v.to_string()),
                    dimension.unit().to_string(),
                ]);
            }
            let mut out = table.render(format)?;
            if !out.ends_with('\n') {
                out.push('\n');
            }
            Ok(out)
        }
    }
}

fn render_details(product: &Product) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", style(&product.name).bold()));
    out.push_str(&format!("{}\n", "=".repeat(product.name.chars().count())));
    out.push_str(&format!("{:<14}{}\n", "Category:", product.category));
    if !product.description.is_empty() {
        out.push_str(&format!("{:<14}{}\n", "Description:", product.description));
    }
    out.push_str(&format!("{:<14}{}\n", "Requirements:", product.requirements));
    out.push('\n');
    for dimension in Dimension::ALL {
        out.push_str(&format!(
            "  {:<8}{} ({})\n",
            format!("{}:", dimension.label()),
            product.requirements.range_label(dimension),
            dimension.unit()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;

    fn high_chair() -> Product {
        Catalog::sample().find("high chair").cloned().unwrap()
    }

    #[test]
    fn test_details() {
        let out = render(&high_chair(), OutputFormat::Auto).unwrap();
        assert!(out.contains("Category:     High Chair"));
        assert!(out.contains("Description:  For feeding infants and toddlers."));
        assert!(out.contains("Age:    6 - 36 (mo)"));
        assert!(out.contains("Height: 65 - - (cm)"));
    }

    #[test]
    fn test_bounds_table_tsv() {
        let out = render(&high_chair(), OutputFormat::Tsv).unwrap();
        assert_eq!(
            out,
            "Dimension\tMin\tMax\tUnit\nage\t6\t36\tmo\nweight\t7\t15\tkg\nheight\t65\t-\tcm\n"
        );
    }

    #[test]
    fn test_yaml_matches_catalog_format() {
        let out = render(&high_chair(), OutputFormat::Yaml).unwrap();
        assert!(out.contains("name: High Chair"));
        assert!(out.contains("min_height_cm: 65"));
        assert!(!out.contains("max_height_cm"));
    }
}
