//! Table formatting for CLI list output
//!
//! Builds rows once and renders them in whichever text format was asked
//! for. Structured formats (JSON/YAML) are serialized by the commands
//! themselves.

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::OutputFormat;

/// Plain rows with a header, ready to render
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render for a text format; structured formats fall back to a boxed table
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Tsv => Ok(self.to_tsv()),
            OutputFormat::Csv => self.to_csv(),
            OutputFormat::Md => Ok(self.build().with(Style::markdown()).to_string()),
            OutputFormat::Auto
            | OutputFormat::Table
            | OutputFormat::Json
            | OutputFormat::Yaml => Ok(self.build().with(Style::modern()).to_string()),
        }
    }

    fn build(&self) -> tabled::Table {
        let mut builder = Builder::default();
        builder.push_record(self.headers.clone());
        for row in &self.rows {
            builder.push_record(row.clone());
        }
        builder.build()
    }

    fn to_tsv(&self) -> String {
        let mut out = String::new();
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            let cells: Vec<String> = row
                .iter()
                .map(|c| c.replace(['\t', '\n'], " "))
                .collect();
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
        out
    }

    fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers).into_diagnostic()?;
        for row in &self.rows {
            writer.write_record(row).into_diagnostic()?;
        }
        let bytes = writer.into_inner().into_diagnostic()?;
        String::from_utf8(bytes).into_diagnostic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TextTable {
        let mut table = TextTable::new(["#", "Product"]);
        table.push_row(["1", "High Chair"]);
        table.push_row(["2", "Seat, deluxe"]);
        table
    }

    #[test]
    fn test_tsv() {
        assert_eq!(
            sample().render(OutputFormat::Tsv).unwrap(),
            "#\tProduct\n1\tHigh Chair\n2\tSeat, deluxe\n"
        );
    }

    #[test]
    fn test_csv_quotes_commas() {
        let csv = sample().render(OutputFormat::Csv).unwrap();
        assert_eq!(csv, "#,Product\n1,High Chair\n2,\"Seat, deluxe\"\n");
    }

    #[test]
    fn test_markdown_and_boxed() {
        let md = sample().render(OutputFormat::Md).unwrap();
        assert!(md.contains("| High Chair"));
        assert!(md.lines().nth(1).unwrap().contains("---"));

        let boxed = sample().render(OutputFormat::Auto).unwrap();
        assert!(boxed.contains("High Chair"));
        assert!(boxed.starts_with('┌'));
    }

    #[test]
    fn test_len() {
        assert_eq!(sample().len(), 2);
        assert!(TextTable::new(["a"]).is_empty());
    }
}
