// Behavioral tests for receiver shape enforcement and run stability.

use serde_json::json;
use strut_core::diagnostics::CheckId;

use crate::common;

#[test]
fn test_configure_without_receiver_is_reported() {
    let mut u = common::unit("shop/app", "module.go");
    u["routines"] = json!([common::configure_routine(json!(null), json!([]))]);
    let snap = common::snapshot(json!([u]), common::fixture_types(true));

    let result = common::check(&snap);
    assert_eq!(result.diagnostics.len(), 1);
    let d = &result.diagnostics[0];
    assert_eq!(d.check, CheckId::ConfigureReceiver);
    assert!(d.message.contains("no receiver"));
    assert!(d.fix.is_none());
}

#[test]
fn test_value_receiver_inject_gets_a_fix() {
    let mut u = common::unit("shop/app", "impl.go");
    u["routines"] = json!([common::inject_routine(common::value_receiver(), 5)]);
    let snap = common::snapshot(json!([u]), common::fixture_types(true));

    let result = common::check(&snap);
    assert_eq!(result.diagnostics.len(), 1);
    let d = &result.diagnostics[0];
    assert_eq!(d.check, CheckId::InjectReceiver);
    let fix = d.fix.as_ref().expect("suggested fix");
    assert_eq!(fix.message, "Add missing reference");
    assert_eq!(fix.edits.len(), 1);
    assert_eq!(fix.edits[0].new_text, "m *Module");
    assert_eq!(fix.edits[0].file, "impl.go");
}

#[test]
fn test_reference_receivers_are_clean() {
    let mut u = common::unit("shop/app", "module.go");
    u["routines"] = json!([
        common::configure_routine(common::ref_receiver(), json!([])),
        common::inject_routine(common::ref_receiver(), 5),
    ]);
    let snap = common::snapshot(json!([u]), common::fixture_types(true));

    assert!(common::check(&snap).is_clean());
}

#[test]
fn test_repeated_runs_are_identical() {
    // A snapshot exercising every check at once.
    let mut u = common::unit("shop/domain/cart", "cart.go");
    u["imports"] = json!([common::import("shop/application/checkout", 3)]);
    u["structs"] = json!([common::tagged_struct(4, "inject:\"\"")]);
    u["routines"] = json!([
        common::configure_routine(
            json!(null),
            json!([common::chained_binding("To", 3, common::typed_target(5))])
        ),
        common::inject_routine(common::value_receiver(), 5),
    ]);
    let snap = common::snapshot(json!([u]), common::fixture_types(false));

    let first = common::check(&snap);
    assert_eq!(first.diagnostics.len(), 5);
    for _ in 0..3 {
        let again = common::check(&snap);
        assert_eq!(
            serde_json::to_value(&again).unwrap(),
            serde_json::to_value(&first).unwrap()
        );
    }
}
