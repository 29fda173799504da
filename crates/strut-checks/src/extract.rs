//! Binding extraction: reconstructs canonical binding declarations from
//! configure routine bodies.
//!
//! Two source shapes are recognized. The chained form is a single expression
//! statement, `injector.Bind(contract).To(target)`. In the split form the
//! bind call's result is assigned to a local and possibly re-aliased through
//! further locals before the target call is invoked on the final alias; the
//! extractor walks the alias chain back to the bind call through an explicit
//! local-definition table, bounded in depth so a malformed or cyclic chain
//! abandons only that one candidate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strut_core::config::FrameworkConfig;
use strut_core::diagnostics::Span;
use strut_front::ast::{Expr, FuncRef, RoutineDecl, Stmt};
use strut_front::types::TypeId;

/// Bind-verbs of the injection framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindVerb {
    Bind,
    BindMulti,
    BindMap,
}

impl BindVerb {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Bind" => Some(BindVerb::Bind),
            "BindMulti" => Some(BindVerb::BindMulti),
            "BindMap" => Some(BindVerb::BindMap),
            _ => None,
        }
    }
}

/// Target-verbs of the injection framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetVerb {
    To,
    ToInstance,
    ToProvider,
}

impl TargetVerb {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "To" => Some(TargetVerb::To),
            "ToInstance" => Some(TargetVerb::ToInstance),
            "ToProvider" => Some(TargetVerb::ToProvider),
            _ => None,
        }
    }
}

/// One reconstructed binding declaration. Produced here, consumed read-only
/// by the conformance and tag checks.
#[derive(Debug, Clone)]
pub struct BindingDecl {
    pub verb: BindVerb,
    /// Resolved type of the contract argument (`*I` for `Bind(new(I))`).
    pub contract: Option<TypeId>,
    pub target: BindingTarget,
    /// Position of the target argument expression.
    pub span: Span,
    /// Pretty form of the target argument, for diagnostics.
    pub source_text: String,
}

/// What the binding resolves the contract to.
#[derive(Debug, Clone)]
pub enum BindingTarget {
    /// `To(impl)` — an implementation type.
    Implementation { ty: Option<TypeId> },
    /// `ToInstance(value)` — a ready instance.
    Instance { ty: Option<TypeId> },
    /// `ToProvider(fn)` — a function producing the value on demand.
    Provider { func: FuncRef },
}

/// Alias chains longer than this abandon the candidate.
const MAX_ALIAS_DEPTH: usize = 16;

/// Extract all binding declarations from one routine body. Candidates whose
/// bind- or target-verb does not resolve into the framework package are
/// discarded silently; they are ordinary method calls, not bindings.
pub fn extract(routine: &RoutineDecl, framework: &FrameworkConfig) -> Vec<BindingDecl> {
    let locals = local_definitions(routine);
    let mut bindings = Vec::new();
    for stmt in &routine.body {
        let Stmt::Expr { expr } = stmt else { continue };
        if let Some(binding) = extract_candidate(expr, &locals, framework) {
            bindings.push(binding);
        }
    }
    bindings
}

/// Local identifier to its defining expression, scoped to one routine.
fn local_definitions(routine: &RoutineDecl) -> BTreeMap<&str, &Expr> {
    let mut defs = BTreeMap::new();
    for stmt in &routine.body {
        if let Stmt::Assign { target, value, .. } = stmt {
            defs.insert(target.as_str(), value);
        }
    }
    defs
}

fn extract_candidate<'a>(
    expr: &'a Expr,
    locals: &BTreeMap<&str, &'a Expr>,
    framework: &FrameworkConfig,
) -> Option<BindingDecl> {
    let Expr::Call { fun, args, .. } = expr else {
        return None;
    };
    let Expr::Selector {
        base,
        target: to_target,
        ..
    } = &**fun
    else {
        return None;
    };
    let to_fn = to_target.as_ref()?;
    let target_verb = TargetVerb::from_name(&to_fn.name)?;

    // Locate the bind call: directly chained, or through local aliases.
    let bind_call = match &**base {
        Expr::Call { .. } => &**base,
        Expr::Ident { name, .. } => resolve_alias(name, locals)?,
        _ => return None,
    };
    let Expr::Call {
        fun: bind_fun,
        args: bind_args,
        ..
    } = bind_call
    else {
        return None;
    };
    let bind_fn = bind_fun.func_target()?;
    let verb = BindVerb::from_name(&bind_fn.name)?;

    // Both verbs must be declared by the framework package.
    if bind_fn.package != framework.package || to_fn.package != framework.package {
        return None;
    }

    let contract = bind_args.first().and_then(Expr::ty);
    let target_arg = args.first()?;
    let target = match target_verb {
        TargetVerb::To => BindingTarget::Implementation {
            ty: target_arg.ty(),
        },
        TargetVerb::ToInstance => BindingTarget::Instance {
            ty: target_arg.ty(),
        },
        // The provider target is the callee itself, not a type.
        TargetVerb::ToProvider => BindingTarget::Provider {
            func: target_arg.func_target()?.clone(),
        },
    };

    Some(BindingDecl {
        verb,
        contract,
        target,
        span: target_arg.span().clone(),
        source_text: target_arg.pretty(),
    })
}

/// Walk a chain of local aliases back to a call expression. Bounded: a chain
/// deeper than [`MAX_ALIAS_DEPTH`] (including cycles) yields `None`, which
/// abandons the single candidate without affecting the rest of the pass.
fn resolve_alias<'a>(start: &str, locals: &BTreeMap<&str, &'a Expr>) -> Option<&'a Expr> {
    let mut name = start;
    for _ in 0..MAX_ALIAS_DEPTH {
        match locals.get(name)? {
            call @ Expr::Call { .. } => return Some(call),
            Expr::Ident { name: next, .. } => name = next,
            _ => return None,
        }
    }
    None
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
