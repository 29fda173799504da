// Behavioral tests for the output formatters over real check results.

use serde_json::json;
use strut_checks::result::CheckRunResult;
use strut_output::human::HumanFormatter;
use strut_output::json::JsonFormatter;
use strut_output::OutputFormatter;

use crate::common;

fn violating_result() -> CheckRunResult {
    let mut u = common::unit("shop/domain/cart", "cart.go");
    u["imports"] = json!([common::import("shop/application/checkout", 3)]);
    let snap = common::snapshot(json!([u]), json!([]));
    common::check(&snap)
}

#[test]
fn test_human_clean_run_is_empty() {
    let snap = common::snapshot(json!([common::unit("shop/domain", "d.go")]), json!([]));
    let result = common::check(&snap);
    assert!(HumanFormatter.format_check(&result).is_empty());
}

#[test]
fn test_human_output_end_to_end() {
    let out = HumanFormatter.format_check(&violating_result());
    assert!(out.contains("error[layer-dependency]: Import dependency violation"));
    assert!(out.contains("--> cart.go:3:2"));
    assert!(out.contains("= source: import \"shop/application/checkout\""));
    assert!(out.contains("1 error(s) in 1 unit(s)"));
}

#[test]
fn test_json_output_round_trips() {
    let result = violating_result();
    let out = JsonFormatter.format_check(&result);

    let back: CheckRunResult = serde_json::from_str(&out).unwrap();
    assert_eq!(back.status, "error");
    assert_eq!(back.units_analyzed, vec!["cart.go"]);
    assert_eq!(back.diagnostics.len(), 1);
    assert_eq!(back.diagnostics[0], result.diagnostics[0]);

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["diagnostics"][0]["check"], "layer-dependency");
    assert_eq!(value["diagnostics"][0]["severity"], "ERROR");
}

#[test]
fn test_fix_survives_the_json_surface() {
    let mut u = common::unit("shop/app", "impl.go");
    u["routines"] = json!([common::inject_routine(common::value_receiver(), 5)]);
    let snap = common::snapshot(json!([u]), common::fixture_types(true));
    let result = common::check(&snap);

    let value: serde_json::Value =
        serde_json::from_str(&JsonFormatter.format_check(&result)).unwrap();
    assert_eq!(value["diagnostics"][0]["fix"]["message"], "Add missing reference");
    assert_eq!(
        value["diagnostics"][0]["fix"]["edits"][0]["new_text"],
        "m *Module"
    );
}
