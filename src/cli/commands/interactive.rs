//! `childfit interactive` command - prompt-driven checking
//!
//! Asks for the child's details once, then lets the operator check as
//! many products as they like by number.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::check::render_verdict;
use crate::cli::commands::list::{self, ListArgs};
use crate::cli::helpers::{load_catalog, resolve_config};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{check_compatibility, Catalog, Child, Product};

#[derive(clap::Args, Debug)]
pub struct InteractiveArgs {
    /// Check a single product and exit instead of offering another
    #[arg(long)]
    pub once: bool,
}

pub fn run(args: InteractiveArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let catalog = load_catalog(&config)?;
    if catalog.is_empty() {
        return Err(miette::miette!("The catalog has no products to check"));
    }

    let theme = ColorfulTheme::default();

    println!();
    println!("{}", style("Welcome to the Child Fit Checker!").cyan().bold());

    let child = prompt_child(&theme)?;

    loop {
        println!();
        println!("Available Products:");
        print!(
            "{}",
            list::render(&ListArgs::default(), &catalog, OutputFormat::Table, true)?
        );

        let product = select_product(&theme, &catalog)?;
        let verdict = check_compatibility(&child, product);
        print!("{}", render_verdict(&child, product, &verdict, false));

        if args.once {
            break;
        }

        println!();
        let again = Confirm::with_theme(&theme)
            .with_prompt("Check another product for the same child?")
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !again {
            break;
        }
    }

    println!();
    println!(
        "{}",
        style("Thank you for using the Child Fit Checker! Stay safe!").cyan()
    );
    Ok(())
}

fn prompt_child(theme: &ColorfulTheme) -> Result<Child> {
    println!();
    println!("{}", style("Enter child information:").bold());

    let name: String = Input::with_theme(theme)
        .with_prompt("Child's name")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    let age = prompt_validated(theme, "Age (in months)", parse_age)?;
    let weight = prompt_validated(theme, "Weight (in kg)", parse_positive)?;
    let height = prompt_validated(theme, "Height (in cm)", parse_positive)?;

    Ok(Child::new(name, age, weight, height))
}

fn select_product<'a>(theme: &ColorfulTheme, catalog: &'a Catalog) -> Result<&'a Product> {
    let count = catalog.len();
    let number = prompt_validated(theme, "Select a product by number", |input| {
        parse_choice(input, count)
    })?;
    catalog
        .get(number)
        .ok_or_else(|| miette::miette!("No product with number {}", number))
}

/// Prompt until `parse` accepts the input, showing its error each time
fn prompt_validated<T>(
    theme: &ColorfulTheme,
    prompt: &str,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<T> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| parse(input).map(|_| ()))
        .interact_text()
        .into_diagnostic()?;
    parse(&raw).map_err(|e| miette::miette!("{}", e))
}

/// Whole months, zero allowed
pub fn parse_age(input: &str) -> std::result::Result<u32, String> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter a valid integer.".to_string())?;
    if value < 0 {
        return Err("Please enter a non-negative integer.".to_string());
    }
    u32::try_from(value).map_err(|_| "That age is too large.".to_string())
}

/// A finite number greater than zero
pub fn parse_positive(input: &str) -> std::result::Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter a valid number.".to_string())?;
    if !value.is_finite() {
        return Err("Invalid input. Please enter a valid number.".to_string());
    }
    if value <= 0.0 {
        return Err("Please enter a positive number.".to_string());
    }
    Ok(value)
}

/// A 1-based product number within the catalog
pub fn parse_choice(input: &str, count: usize) -> std::result::Result<usize, String> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter a valid number.".to_string())?;
    if (1..=count).contains(&choice) {
        Ok(choice)
    } else {
        Err(format!("Please enter a number between 1 and {}.", count))
    }
}
