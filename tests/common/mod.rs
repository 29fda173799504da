//! Shared helpers for the strut integration tests.
//!
//! Snapshots are assembled as JSON and decoded through the real wire format,
//! so these tests exercise the snapshot contract along with the checks.
//!
//! Import from any integration test file with:
//!   `#[path = "common/mod.rs"] mod common;`

use serde_json::{json, Value};
use strut_checks::engine::ConventionEngine;
use strut_checks::result::CheckRunResult;
use strut_core::config::StrutConfig;
use strut_front::snapshot::ProgramSnapshot;

pub const DINGO: &str = "flamingo.me/dingo";

pub fn span(line: u64, col: u64) -> Value {
    json!({ "line": line, "col": col, "end_line": line, "end_col": col })
}

/// Type table shared by the binding and tag fixtures:
///   0 Injector, 1 *Injector, 2 interface I, 3 *I, 4 struct Impl, 5 *Impl,
///   6 func(*Impl) I
///
/// With `satisfied`, `*Impl` implements `I`.
pub fn fixture_types(satisfied: bool) -> Value {
    json!([
        { "display": "Injector", "package": DINGO, "name": "Injector" },
        { "display": "*Injector", "points_to": 0 },
        { "display": "I", "shape": "interface" },
        { "display": "*I", "points_to": 2 },
        { "display": "Impl" },
        { "display": "*Impl", "points_to": 4, "implements": if satisfied { json!([2]) } else { json!([]) } },
        { "display": "func(*Impl) I", "shape": "callable", "signature": { "params": [5], "results": [2] } }
    ])
}

pub fn snapshot(units: Value, types: Value) -> ProgramSnapshot {
    let raw = json!({ "units": units, "types": types });
    ProgramSnapshot::from_json(&raw.to_string()).expect("fixture snapshot must decode")
}

pub fn check(snap: &ProgramSnapshot) -> CheckRunResult {
    check_with(StrutConfig::default(), snap)
}

pub fn check_with(config: StrutConfig, snap: &ProgramSnapshot) -> CheckRunResult {
    ConventionEngine::new(config).check_program(snap)
}

pub fn config_from(value: Value) -> StrutConfig {
    serde_json::from_value(value).expect("fixture config must decode")
}

pub fn unit(module_path: &str, file: &str) -> Value {
    json!({ "module_path": module_path, "file": file })
}

pub fn import(path: &str, line: u64) -> Value {
    json!({ "path": path, "span": span(line, 2) })
}

pub fn ref_receiver() -> Value {
    json!({ "name": "m", "type_name": "Module", "by_ref": true, "span": span(8, 6) })
}

pub fn value_receiver() -> Value {
    json!({ "name": "m", "type_name": "Module", "by_ref": false, "span": span(8, 6) })
}

/// A routine taking `injector *dingo.Injector` (type ids per
/// [`fixture_types`]), with the given receiver (`null` for none).
pub fn configure_routine(receiver: Value, body: Value) -> Value {
    json!({
        "name": "Configure",
        "receiver": receiver,
        "params": [{ "name": "injector", "ty": 1, "span": span(8, 20) }],
        "body": body,
        "span": span(8, 1)
    })
}

pub fn inject_routine(receiver: Value, param_ty: u64) -> Value {
    json!({
        "name": "Inject",
        "receiver": receiver,
        "params": [{ "name": "dep", "ty": param_ty, "span": span(12, 16) }],
        "body": [],
        "span": span(12, 1)
    })
}

pub fn tagged_struct(ty: u64, raw_tag: &str) -> Value {
    json!({
        "name": "Impl",
        "ty": ty,
        "fields": [{
            "name": "cfg",
            "tag": { "raw": raw_tag, "span": span(4, 10) },
            "span": span(4, 2)
        }],
        "span": span(3, 1)
    })
}

/// `injector.Bind(<contract>).<to_verb>(<target>)` as a statement.
pub fn chained_binding(to_verb: &str, contract_ty: u64, target: Value) -> Value {
    json!({
        "kind": "expr",
        "expr": {
            "kind": "call",
            "fun": {
                "kind": "selector",
                "base": bind_call(contract_ty),
                "name": to_verb,
                "target": { "package": DINGO, "name": to_verb },
                "span": span(9, 25)
            },
            "args": [target],
            "span": span(9, 2)
        }
    })
}

/// The bind half of a split binding, `<local> := injector.Bind(<contract>)`.
pub fn split_bind(local: &str, contract_ty: u64) -> Value {
    json!({
        "kind": "assign",
        "target": local,
        "value": bind_call(contract_ty),
        "span": span(9, 2)
    })
}

/// The target half of a split binding, `<local>.<to_verb>(<target>)`.
pub fn split_target(local: &str, to_verb: &str, target: Value) -> Value {
    json!({
        "kind": "expr",
        "expr": {
            "kind": "call",
            "fun": {
                "kind": "selector",
                "base": { "kind": "ident", "name": local, "span": span(10, 2) },
                "name": to_verb,
                "target": { "package": DINGO, "name": to_verb },
                "span": span(10, 4)
            },
            "args": [target],
            "span": span(10, 2)
        }
    })
}

fn bind_call(contract_ty: u64) -> Value {
    json!({
        "kind": "call",
        "fun": {
            "kind": "selector",
            "base": { "kind": "ident", "name": "injector", "span": span(9, 2) },
            "name": "Bind",
            "target": { "package": DINGO, "name": "Bind" },
            "span": span(9, 11)
        },
        "args": [{ "kind": "other", "ty": contract_ty, "span": span(9, 16) }],
        "span": span(9, 2)
    })
}

pub fn typed_target(ty: u64) -> Value {
    json!({ "kind": "other", "ty": ty, "span": span(9, 30) })
}

/// A resolved function reference expression, for `ToProvider` targets.
pub fn provider_target(name: &str, sig_ty: u64) -> Value {
    json!({
        "kind": "ident",
        "name": name,
        "target": { "package": "shop/app", "name": name, "sig": sig_ty },
        "span": span(9, 30)
    })
}
