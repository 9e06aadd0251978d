//! YAML handling for catalog files

pub mod diagnostics;

pub use diagnostics::YamlSyntaxError;
