//! Receiver shape check: configure and inject routines must be methods, and
//! injection methods must use a reference receiver.
//!
//! The value-receiver case carries the engine's only suggested fix: a
//! structured edit rewriting the receiver clause to its reference form.

use strut_core::diagnostics::{CheckId, Diagnostic, SuggestedFix, TextEdit};
use strut_front::ast::RoutineDecl;

/// Check one qualifying routine. Returns at most one diagnostic; the fix is
/// attached only for the value-receiver case, where the rewrite is
/// mechanical.
pub fn check_receiver(file: &str, routine: &RoutineDecl, check: CheckId) -> Option<Diagnostic> {
    match &routine.receiver {
        None => Some(
            Diagnostic::error(
                check,
                "Function has no receiver; a type must implement the module capability",
                file,
                routine.span.clone(),
            )
            .with_source_text(Some(format!("func {}(...)", routine.name))),
        ),
        Some(recv) if !recv.by_ref => {
            let fix = SuggestedFix {
                message: "Add missing reference".to_string(),
                edits: vec![TextEdit {
                    file: file.to_string(),
                    span: recv.span.clone(),
                    new_text: format!("{} *{}", recv.name, recv.type_name),
                }],
            };
            Some(
                Diagnostic::error(
                    check,
                    "Missing reference in function receiver; injection methods must use a reference receiver",
                    file,
                    recv.span.clone(),
                )
                .with_source_text(Some(format!("{} {}", recv.name, recv.type_name)))
                .with_fix(fix),
            )
        }
        Some(_) => None,
    }
}

/// Whether a routine has the shape required of a valid inject routine.
pub fn has_reference_receiver(routine: &RoutineDecl) -> bool {
    routine.receiver.as_ref().is_some_and(|r| r.by_ref)
}
