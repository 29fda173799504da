//! Program snapshot: the complete input of one engine run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ast::CompilationUnit;
use crate::types::TypeTable;

/// Everything the front-end hands the engine for one run: the compilation
/// units plus the type facts their expressions reference. A run is a pure
/// function of (snapshot, configuration).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramSnapshot {
    #[serde(default)]
    pub units: Vec<CompilationUnit>,
    #[serde(default)]
    pub types: TypeTable,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("cannot read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ProgramSnapshot {
    pub fn from_json(content: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
