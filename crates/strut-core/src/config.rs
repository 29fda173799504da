//! Configuration file loading for strut.
//!
//! Reads `.strut/strut.json` and provides typed access to all settings.
//! Falls back to the built-in defaults when the config file is missing or
//! incomplete; a malformed file is reported as a warning and never aborts the
//! run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level strut configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrutConfig {
    pub version: String,
    /// Architectural groups: group name to the ordered list of group names it
    /// may depend on. Held in a `BTreeMap` so classification tie-breaks are
    /// deterministic (lexicographic by group name).
    #[serde(default = "default_groups")]
    pub groups: BTreeMap<String, Vec<String>>,
    /// Substring filters restricting which module paths participate in layer
    /// checking. Empty means all paths are eligible.
    #[serde(default)]
    pub entry_paths: Vec<String>,
    #[serde(default)]
    pub checks: ChecksConfig,
    #[serde(default)]
    pub framework: FrameworkConfig,
}

/// Per-check enable toggles. All checks run by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksConfig {
    #[serde(default = "default_true")]
    pub dependency_conventions: bool,
    #[serde(default = "default_true")]
    pub binding_conformance: bool,
    #[serde(default = "default_true")]
    pub strict_tags: bool,
    #[serde(default = "default_true")]
    pub inject_receiver: bool,
    #[serde(default = "default_true")]
    pub configure_receiver: bool,
}

/// Identification of the injection framework whose declarations the checks
/// recognize. Bind/target verbs and the injector capability parameter must
/// resolve into this package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfig {
    #[serde(default = "default_framework_package")]
    pub package: String,
    #[serde(default = "default_injector_type")]
    pub injector_type: String,
}

fn default_true() -> bool {
    true
}

fn default_framework_package() -> String {
    "flamingo.me/dingo".to_string()
}

fn default_injector_type() -> String {
    "Injector".to_string()
}

/// The classic four-layer table used when no groups are configured.
fn default_groups() -> BTreeMap<String, Vec<String>> {
    let mut groups = BTreeMap::new();
    groups.insert(
        "infrastructure".to_string(),
        vec![
            "infrastructure".to_string(),
            "interfaces".to_string(),
            "application".to_string(),
            "domain".to_string(),
        ],
    );
    groups.insert(
        "interfaces".to_string(),
        vec![
            "interfaces".to_string(),
            "application".to_string(),
            "domain".to_string(),
        ],
    );
    groups.insert(
        "application".to_string(),
        vec!["application".to_string(), "domain".to_string()],
    );
    groups.insert("domain".to_string(), vec!["domain".to_string()]);
    groups
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            dependency_conventions: true,
            binding_conformance: true,
            strict_tags: true,
            inject_receiver: true,
            configure_receiver: true,
        }
    }
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            package: default_framework_package(),
            injector_type: default_injector_type(),
        }
    }
}

impl Default for StrutConfig {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            groups: default_groups(),
            entry_paths: vec![],
            checks: ChecksConfig::default(),
            framework: FrameworkConfig::default(),
        }
    }
}

impl StrutConfig {
    /// Load configuration from `strut.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(strut_dir: &Path) -> Self {
        let config_path = strut_dir.join("strut.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "strut: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
