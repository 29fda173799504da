//! Binding conformance: the target of a `To`/`ToInstance` binding must be
//! compatible with the declared contract type.
//!
//! Provider bindings are exempt here; providers are checked for usage by the
//! tag check, not for type shape. Either side failing to resolve to a type
//! means "cannot determine" and produces no diagnostic.

use strut_core::diagnostics::{CheckId, Diagnostic};
use strut_front::types::{TypeId, TypeOracle, TypeShape};

use crate::extract::{BindingDecl, BindingTarget};

/// Check one binding. At most one diagnostic, positioned at the target
/// argument.
pub fn check_binding(
    binding: &BindingDecl,
    oracle: &dyn TypeOracle,
    file: &str,
) -> Option<Diagnostic> {
    let target_ty = match &binding.target {
        BindingTarget::Implementation { ty } | BindingTarget::Instance { ty } => (*ty)?,
        BindingTarget::Provider { .. } => return None,
    };
    let contract = binding.contract?;
    // The contract argument is always a reference to the contract type
    // (`new(I)` yields `*I`); strip that level to reach the declared shape.
    let contract_elem = oracle.deref(contract)?;
    let shape = oracle.shape_of(contract_elem)?;

    // Normalize the target to one level of indirection: a bare value type
    // (struct literal idiom) compares as a reference to itself.
    let target = normalize_target(target_ty, oracle);

    let failure = match shape {
        TypeShape::Interface => {
            // Two attempts: a reference-shaped implementer and a value-shaped
            // implementer both satisfy the contract.
            let value = oracle.deref(target);
            let ok = oracle.implements(target, contract_elem)
                || value.is_some_and(|v| oracle.implements(v, contract_elem));
            (!ok).then(|| {
                format!(
                    "Incorrect Binding! \"{}\" must implement Interface \"{}\"",
                    oracle.display(target),
                    oracle.display(contract_elem),
                )
            })
        }
        TypeShape::Callable => (!oracle.assignable(target, contract_elem)).then(|| {
            format!(
                "Incorrect Binding! \"{}\" must have Signature of \"{}\"",
                oracle.display(target),
                oracle.display(contract_elem),
            )
        }),
        TypeShape::Concrete => (!oracle.assignable(target, contract)).then(|| {
            format!(
                "Incorrect Binding! \"{}\" must be assignable to \"{}\"",
                oracle.display(target),
                oracle.display(contract),
            )
        }),
    };

    failure.map(|message| {
        Diagnostic::error(CheckId::BindingConformance, message, file, binding.span.clone())
            .with_source_text(Some(binding.source_text.clone()))
    })
}

fn normalize_target(target: TypeId, oracle: &dyn TypeOracle) -> TypeId {
    if oracle.deref(target).is_some() {
        return target; // already a reference
    }
    // Wrap one level when the program mentions the reference type; otherwise
    // compare the value type directly.
    oracle.ref_of(target).unwrap_or(target)
}
