//! Catalog file diagnostics with source spans

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// YAML syntax or shape error in a catalog file
#[derive(Debug, Error, Diagnostic)]
#[error("invalid catalog file: {message}")]
#[diagnostic(code(childfit::catalog::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: Option<SourceSpan>,

    #[help]
    help: Option<String>,

    message: String,
}

impl YamlSyntaxError {
    /// Build from a serde_yml error, labelling the reported location if any
    ///
    /// Type and shape errors often carry no location; those get no label.
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let span = err.location().map(|loc| {
            let offset = line_col_to_offset(source, loc.line(), loc.column());
            SourceSpan::from(offset..offset.saturating_add(1))
        });
        let message = err.to_string();
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span,
            help,
            message,
        }
    }
}

/// Convert a 1-based line/column to a byte offset, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();

    if line_start >= source.len() {
        return source.len().saturating_sub(1);
    }

    let rest = &source[line_start..];
    let line_len = rest.find('\n').unwrap_or(rest.len());
    rest.char_indices()
        .nth(column.saturating_sub(1))
        .map(|(i, _)| line_start + i.min(line_len))
        .unwrap_or(line_start + line_len)
}

fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("missing field `products`") {
        return Some("A catalog file needs a top-level `products:` list.".to_string());
    }

    if msg_lower.contains("missing field `name`") || msg_lower.contains("missing field `category`") {
        return Some("Every product needs a `name` and a `category`.".to_string());
    }

    if msg_lower.contains("invalid type") || msg_lower.contains("invalid value") {
        return Some(
            "Bounds must be plain numbers: whole months for age, kg for weight, cm for height."
                .to_string(),
        );
    }

    if msg_lower.contains("unknown field") {
        return Some(
            "Allowed bounds are min/max_age_months, min/max_weight_kg and min/max_height_cm."
                .to_string(),
        );
    }

    if msg_lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg_lower.contains("mapping values are not allowed") {
        return Some("You may be missing a space after ':' or have incorrect indentation.".to_string());
    }

    None
}
