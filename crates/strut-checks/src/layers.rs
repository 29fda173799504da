//! Layer dependency check: every import of a grouped unit must point at a
//! group the owning group is allowed to depend on.

use std::collections::BTreeMap;

use strut_core::diagnostics::{CheckId, Diagnostic};
use strut_front::ast::CompilationUnit;

use crate::paths::PathClassifier;

/// Check one unit's imports against the group table. One diagnostic per
/// disallowed edge, in import declaration order.
pub fn check_dependencies(
    unit: &CompilationUnit,
    classifier: &PathClassifier,
    groups: &BTreeMap<String, Vec<String>>,
) -> Vec<Diagnostic> {
    // No imports, nothing to check.
    if unit.imports.is_empty() {
        return vec![];
    }
    if !classifier.allowed_entry_path(&unit.module_path) {
        return vec![];
    }
    let Some(own_group) = classifier.classify(&unit.module_path) else {
        return vec![];
    };
    let allowed = groups.get(own_group).map(Vec::as_slice).unwrap_or(&[]);

    let mut diagnostics = Vec::new();
    for import in &unit.imports {
        if !classifier.allowed_entry_path(&import.path) {
            continue;
        }
        let Some(import_group) = classifier.classify(&import.path) else {
            continue;
        };
        if allowed.iter().any(|g| g == import_group) {
            continue;
        }
        diagnostics.push(
            Diagnostic::error(
                CheckId::LayerDependency,
                format!(
                    "Import dependency violation: the `{}` group is not allowed to depend on `{}`",
                    own_group, import_group
                ),
                &unit.file,
                import.span.clone(),
            )
            .with_source_text(Some(format!("import \"{}\"", import.path))),
        );
    }
    diagnostics
}
