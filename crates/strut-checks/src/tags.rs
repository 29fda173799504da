//! Injectable-field tag conformance.
//!
//! Field tags request configuration injection. Two rules apply: the tag
//! payload must not be empty, and the tagged struct must actually be consumed
//! somewhere in the same unit — as a parameter of a valid inject routine or
//! of a provider function used in a binding. The tag literal is parsed with a
//! small grammar for the conventional `key:"value"` list rather than by text
//! probing.

use strut_core::diagnostics::{CheckId, Diagnostic};
use strut_front::ast::{CompilationUnit, RoutineDecl, StructDecl};
use strut_front::types::{TypeId, TypeOracle};

use crate::extract::{BindingDecl, BindingTarget};

/// The tag key that marks a field as an injection request.
pub const INJECT_TAG_KEY: &str = "inject";

/// One parsed `key:"value"` pair from a struct tag literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub key: String,
    pub value: String,
}

/// Parse a struct tag literal (quotes already stripped) into its key/value
/// pairs. Returns `None` for text that doesn't follow the conventional
/// grammar; such tags carry no recognized requests and are skipped.
pub fn parse_struct_tag(raw: &str) -> Option<Vec<TagEntry>> {
    let mut entries = Vec::new();
    let mut rest = raw.trim_start();
    while !rest.is_empty() {
        let colon = rest.find(':')?;
        let key = &rest[..colon];
        if key.is_empty() || key.contains(|c: char| c.is_whitespace() || c == '"') {
            return None;
        }
        rest = rest[colon + 1..].strip_prefix('"')?;
        let mut value = String::new();
        let mut chars = rest.char_indices();
        let mut end = None;
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    let (_, escaped) = chars.next()?;
                    value.push(escaped);
                }
                '"' => {
                    end = Some(i);
                    break;
                }
                _ => value.push(c),
            }
        }
        rest = &rest[end? + 1..];
        entries.push(TagEntry {
            key: key.to_string(),
            value,
        });
        rest = rest.trim_start();
    }
    Some(entries)
}

/// Check every tagged struct field of the unit. `inject_routines` must
/// already be filtered to the valid (reference-receiver) ones; `bindings`
/// are the unit's extracted binding declarations.
pub fn check_tags(
    unit: &CompilationUnit,
    oracle: &dyn TypeOracle,
    inject_routines: &[&RoutineDecl],
    bindings: &[BindingDecl],
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for decl in &unit.structs {
        for field in &decl.fields {
            let Some(tag) = &field.tag else { continue };
            let Some(entries) = parse_struct_tag(&tag.raw) else {
                continue;
            };
            let Some(inject) = entries.iter().find(|e| e.key == INJECT_TAG_KEY) else {
                continue;
            };
            if inject.value.is_empty() {
                diagnostics.push(
                    Diagnostic::error(
                        CheckId::InjectTags,
                        "Empty tags are not allowed; add more specific naming or use the \
                         constructor-injection routine instead",
                        &unit.file,
                        tag.span.clone(),
                    )
                    .with_source_text(Some(tag.raw.clone())),
                );
                continue;
            }
            let consumed = consumed_by_inject_routine(decl, oracle, inject_routines)
                || consumed_by_provider(decl, oracle, bindings);
            if !consumed {
                diagnostics.push(
                    Diagnostic::error(
                        CheckId::InjectTags,
                        "References must be consumed by a constructor-injection routine or a \
                         provider function declared in the same package",
                        &unit.file,
                        tag.span.clone(),
                    )
                    .with_source_text(Some(tag.raw.clone())),
                );
            }
        }
    }
    diagnostics
}

/// Is the struct a (by-reference) parameter of some inject routine?
fn consumed_by_inject_routine(
    decl: &StructDecl,
    oracle: &dyn TypeOracle,
    inject_routines: &[&RoutineDecl],
) -> bool {
    inject_routines.iter().any(|routine| {
        routine
            .params
            .iter()
            .filter_map(|p| p.ty)
            .any(|ty| param_matches(ty, decl.ty, oracle))
    })
}

/// Is the struct a (by-reference) parameter of a provider function bound via
/// `ToProvider`?
fn consumed_by_provider(
    decl: &StructDecl,
    oracle: &dyn TypeOracle,
    bindings: &[BindingDecl],
) -> bool {
    bindings.iter().any(|binding| {
        let BindingTarget::Provider { func } = &binding.target else {
            return false;
        };
        let Some(sig_ty) = func.sig else { return false };
        let Some(sig) = oracle.signature(sig_ty) else {
            return false;
        };
        sig.params
            .iter()
            // Only reference parameters count, matching the injection
            // framework's provider calling convention.
            .filter_map(|p| oracle.deref(*p))
            .any(|elem| elem == decl.ty)
    })
}

fn param_matches(param: TypeId, struct_ty: TypeId, oracle: &dyn TypeOracle) -> bool {
    match oracle.deref(param) {
        Some(elem) => elem == struct_ty,
        None => false,
    }
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
