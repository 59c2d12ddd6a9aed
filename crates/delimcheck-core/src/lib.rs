//! Delimiter balance checking library.
//!
//! This library scans source text for unbalanced braces, parentheses, and
//! square brackets, skipping delimiters that appear inside string literals
//! or line comments.

mod config;
mod scan;

pub use config::{Config, ConfigError};
pub use scan::{ScanResult, SourceLocation, scan_lines, scan_source};
