//! `childfit check` command - one child against one product
//!
//! Mirrors a web form submission: numeric fields that are not given
//! default to 0 and the name defaults to "Child". The product must exist;
//! an unknown name is reported without running the check.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{find_product, load_catalog, resolve_config, resolve_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{check_compatibility, Child, Dimension, Product, Verdict};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Product name (case-insensitive)
    #[arg(long, short = 'p')]
    pub product: String,

    /// Child's name
    #[arg(long, short = 'n', default_value = "Child")]
    pub name: String,

    /// Age in months
    #[arg(long, short = 'a', default_value_t = 0)]
    pub age: u32,

    /// Weight in kg
    #[arg(long, short = 'w', default_value_t = 0.0, allow_negative_numbers = true)]
    pub weight: f64,

    /// Height in cm
    #[arg(long = "height", short = 'H', default_value_t = 0.0, allow_negative_numbers = true)]
    pub height: f64,

    /// Exit with status 1 when the product is not suitable
    #[arg(long)]
    pub strict: bool,
}

/// Serialized form of a check
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub child: &'a Child,
    pub product: &'a Product,
    #[serde(flatten)]
    pub verdict: &'a Verdict,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let format = resolve_format(global, &config);
    let catalog = load_catalog(&config)?;

    let product = find_product(&catalog, &args.product)?;
    let child = Child::new(args.name, args.age, args.weight, args.height);
    let verdict = check_compatibility(&child, product);

    let report = CheckReport {
        child: &child,
        product,
        verdict: &verdict,
    };
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&report).into_diagnostic()?);
        }
        // Tabular formats have nothing to tabulate here
        _ => print!("{}", render_verdict(&child, product, &verdict, global.quiet)),
    }

    if args.strict && !verdict.is_compatible() {
        std::io::Write::flush(&mut std::io::stdout()).into_diagnostic()?;
        std::process::exit(1);
    }
    Ok(())
}

/// Human-readable verdict with reasons and the per-dimension comparison
pub fn render_verdict(child: &Child, product: &Product, verdict: &Verdict, quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        out.push_str(&format!(
            "\nChecking {} for {}...\n",
            style(&child.name).bold(),
            style(&product.name).bold()
        ));
    }

    if verdict.is_compatible() {
        out.push_str(&format!(
            "{}\n",
            style("SAFE: This product is suitable for the child!").green().bold()
        ));
    } else {
        out.push_str(&format!(
            "{}\n",
            style("UNSAFE: This product is NOT suitable for the child.").red().bold()
        ));
        out.push_str(&format!("{}\n", style("Reasons:").red()));
        for issue in verdict.issues() {
            out.push_str(&format!("{}\n", style(format!("- {}", issue)).red()));
        }
    }

    if quiet {
        return out;
    }

    out.push_str("\nRequirement Comparison:\n");
    let req = &product.requirements;
    let flagged = |d: Dimension| verdict.issues().iter().any(|i| i.dimension() == d);
    for (dimension, value) in [
        (Dimension::Age, child.age_months.to_string()),
        (Dimension::Weight, child.weight_kg.to_string()),
        (Dimension::Height, child.height_cm.to_string()),
    ] {
        let line = format!(
            "  {}: {} {} (Required: {})",
            dimension.label(),
            value,
            dimension.unit(),
            req.range_label(dimension)
        );
        if flagged(dimension) {
            out.push_str(&format!("{}\n", style(line).red()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Catalog;

    fn check(name: &str, child: Child) -> (Product, Child, Verdict) {
        let product = Catalog::sample().find(name).cloned().unwrap();
        let verdict = check_compatibility(&child, &product);
        (product, child, verdict)
    }

    #[test]
    fn test_render_safe() {
        let (product, child, verdict) = check("Infant Car Seat", Child::new("Ava", 6, 7.0, 70.0));
        let out = render_verdict(&child, &product, &verdict, false);
        assert!(out.contains("SAFE: This product is suitable for the child!"));
        assert!(!out.contains("Reasons:"));
        assert!(out.contains("Age: 6 mo (Required: 0 - 12)"));
        assert!(out.contains("Weight: 7 kg (Required: 2.3 - 13.6)"));
        assert!(out.contains("Height: 70 cm (Required: - - 76)"));
    }

    #[test]
    fn test_render_unsafe_lists_reasons() {
        let (product, child, verdict) = check("High Chair", Child::new("Ben", 3, 5.0, 50.0));
        let out = render_verdict(&child, &product, &verdict, false);
        assert!(out.contains("UNSAFE: This product is NOT suitable for the child."));
        assert!(out.contains("- Child is too young (min 6 mo)"));
        assert!(out.contains("- Child is too short (min 65 cm)"));
        assert!(out.contains("Height: 50 cm (Required: 65 - -)"));
    }

    #[test]
    fn test_render_quiet_skips_comparison() {
        let (product, child, verdict) = check("High Chair", Child::new("Ben", 3, 5.0, 50.0));
        let out = render_verdict(&child, &product, &verdict, true);
        assert!(out.contains("UNSAFE"));
        assert!(!out.contains("Requirement Comparison"));
        assert!(!out.contains("Checking"));
    }

    #[test]
    fn test_report_json_shape() {
        let (product, child, verdict) = check("Infant Car Seat", Child::new("", 24, 10.0, 90.0));
        let report = CheckReport {
            child: &child,
            product: &product,
            verdict: &verdict,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["child"]["name"], "Child");
        assert_eq!(value["product"]["name"], "Infant Car Seat");
        assert_eq!(value["compatible"], false);
        assert_eq!(
            value["issues"],
            serde_json::json!(["Child is too old (max 12 mo)", "Child is too tall (max 76 cm)"])
        );
    }
}
