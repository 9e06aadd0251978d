//! `childfit list` command - catalog listing

use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{load_catalog, resolve_config, resolve_format, truncate_str};
use crate::cli::table::TextTable;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Product};

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Only products in this category (case-insensitive)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Include the description column
    #[arg(long, short = 'l')]
    pub long: bool,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let format = resolve_format(global, &config);
    let catalog = load_catalog(&config)?;

    print!("{}", render(&args, &catalog, format, global.quiet)?);
    Ok(())
}

/// Products to list, paired with their 1-based catalog number
fn select<'a>(args: &ListArgs, catalog: &'a Catalog) -> Vec<(usize, &'a Product)> {
    let category = args.category.as_deref().map(str::to_lowercase);
    catalog
        .list()
        .iter()
        .enumerate()
        .map(|(i, p)| (i + 1, p))
        .filter(|(_, p)| {
            category
                .as_deref()
                .map_or(true, |c| p.category.to_lowercase() == c)
        })
        .collect()
}

pub fn render(
    args: &ListArgs,
    catalog: &Catalog,
    format: OutputFormat,
    quiet: bool,
) -> Result<String> {
    let selected = select(args, catalog);

    if args.count {
        return Ok(format!("{}\n", selected.len()));
    }

    if format.is_structured() {
        let products: Vec<&Product> = selected.iter().map(|(_, p)| *p).collect();
        return match format {
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(&products).into_diagnostic()?;
                out.push('\n');
                Ok(out)
            }
            _ => serde_yml::to_string(&products).into_diagnostic(),
        };
    }

    let mut headers = vec!["#", "Product", "Category", "Requirements"];
    if args.long {
        headers.push("Description");
    }
    let mut table = TextTable::new(headers);
    for (number, product) in &selected {
        let mut row = vec![
            number.to_string(),
            product.name.clone(),
            product.category.clone(),
            product.requirements.summary(),
        ];
        if args.long {
            row.push(truncate_str(&product.description, 40));
        }
        table.push_row(row);
    }

    let mut out = table.render(format)?;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    if format == OutputFormat::Auto && !quiet {
        out.push_str(&format!("\n{} product(s) found\n", table.len()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tsv_in_catalog_order() {
        let out = render(&ListArgs::default(), &Catalog::sample(), OutputFormat::Tsv, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "#\tProduct\tCategory\tRequirements");
        assert!(lines[1].starts_with("1\tInfant Car Seat\tCar Seat\tMin Age: 0 mo"));
        assert!(lines[4].starts_with("4\tUmbrella Stroller\tStroller\t"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_category_filter_keeps_numbers() {
        let args = ListArgs {
            category: Some("stroller".to_string()),
            ..Default::default()
        };
        let out = render(&args, &Catalog::sample(), OutputFormat::Tsv, false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("4\tUmbrella Stroller"));
    }

    #[test]
    fn test_count() {
        let args = ListArgs {
            category: Some("Car Seat".to_string()),
            count: true,
            ..Default::default()
        };
        assert_eq!(render(&args, &Catalog::sample(), OutputFormat::Auto, false).unwrap(), "2\n");
    }

    #[test]
    fn test_json_output() {
        let out = render(&ListArgs::default(), &Catalog::sample(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
        assert_eq!(value[2]["name"], "High Chair");
        assert_eq!(value[2]["requirements"]["min_height_cm"], 65.0);
        assert!(value[2]["requirements"].get("max_height_cm").is_none());
    }

    #[test]
    fn test_auto_has_summary_unless_quiet() {
        let catalog = Catalog::sample();
        let out = render(&ListArgs::default(), &catalog, OutputFormat::Auto, false).unwrap();
        assert!(out.contains("4 product(s) found"));
        let quiet = render(&ListArgs::default(), &catalog, OutputFormat::Auto, true).unwrap();
        assert!(!quiet.contains("found"));
    }
}
