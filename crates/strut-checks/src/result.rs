//! The serializable outcome of one engine run.

use serde::{Deserialize, Serialize};
use strut_core::diagnostics::Diagnostic;

/// Result of checking one program snapshot. Diagnostics appear in unit
/// order, and within a unit in check execution order, so two runs over the
/// same snapshot serialize identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRunResult {
    pub version: String,
    /// `"ok"` when no diagnostics were produced, `"error"` otherwise.
    pub status: String,
    /// Files of the units examined, in snapshot order.
    pub units_analyzed: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckRunResult {
    pub fn new(units_analyzed: Vec<String>, diagnostics: Vec<Diagnostic>) -> Self {
        let status = if diagnostics.is_empty() { "ok" } else { "error" };
        Self {
            version: "0.1.0".to_string(),
            status: status.to_string(),
            units_analyzed,
            diagnostics,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
