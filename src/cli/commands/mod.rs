//! CLI command implementations

pub mod check;
pub mod completions;
pub mod interactive;
pub mod list;
pub mod show;
