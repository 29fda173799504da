//! Output formatters for strut check results.
//!
//! Two output modes:
//! - **Human** (default): rustc-style diagnostics for terminal users
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub mod json;

use strut_checks::result::CheckRunResult;

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckRunResult) -> String;
}
