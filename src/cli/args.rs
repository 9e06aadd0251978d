//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    check::CheckArgs, completions::CompletionsArgs, interactive::InteractiveArgs, list::ListArgs,
    show::ShowArgs,
};

#[derive(Parser)]
#[command(name = "childfit")]
#[command(author, version, about = "Child Fit Checker")]
#[command(
    long_about = "Check whether a child's age, weight and height fit the usage limits of a product \
                  (car seat, high chair, stroller, ...). Advisory only: always follow the \
                  manufacturer's instructions."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Output format (default: config `default_format`, then auto).
    /// `check` prints the verdict text for table, tsv, csv and md.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Catalog YAML file (default: built-in sample catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the products in the catalog
    List(ListArgs),

    /// Show one product's details and limits
    Show(ShowArgs),

    /// Check a child against a product
    Check(CheckArgs),

    /// Prompt for a child and check products one at a time
    #[command(alias = "i")]
    Interactive(InteractiveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (tables and colored verdicts)
    #[default]
    Auto,
    /// Boxed table
    Table,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// YAML format (same shape as catalog files)
    Yaml,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}

impl OutputFormat {
    /// Whether this format is a structured serialization
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Yaml)
    }
}
