// Behavioral tests for layer dependency enforcement.

use serde_json::json;
use strut_core::diagnostics::CheckId;

use crate::common;

#[test]
fn test_domain_cannot_import_application() {
    let mut u = common::unit("shop/domain/cart", "cart.go");
    u["imports"] = json!([common::import("shop/application/checkout", 3)]);
    let snap = common::snapshot(json!([u]), json!([]));

    let result = common::check(&snap);
    assert_eq!(result.status, "error");
    assert_eq!(result.diagnostics.len(), 1);
    let d = &result.diagnostics[0];
    assert_eq!(d.check, CheckId::LayerDependency);
    assert_eq!(
        d.message,
        "Import dependency violation: the `domain` group is not allowed to depend on `application`"
    );
    assert_eq!(d.file, "cart.go");
    assert_eq!(d.span.line, 3);
    assert_eq!(
        d.source_text.as_deref(),
        Some("import \"shop/application/checkout\"")
    );
}

#[test]
fn test_default_table_allows_downward_edges() {
    let mut app = common::unit("shop/application/checkout", "checkout.go");
    app["imports"] = json!([common::import("shop/domain/cart", 3)]);
    let mut infra = common::unit("shop/infrastructure/db", "db.go");
    infra["imports"] = json!([
        common::import("shop/interfaces/web", 3),
        common::import("shop/application/checkout", 4),
        common::import("shop/domain/cart", 5),
    ]);
    let snap = common::snapshot(json!([app, infra]), json!([]));

    assert!(common::check(&snap).is_clean());
}

#[test]
fn test_foreign_imports_are_ignored() {
    let mut u = common::unit("shop/domain/cart", "cart.go");
    u["imports"] = json!([
        common::import("fmt", 3),
        common::import("net/http", 4),
        common::import("github.com/pkg/errors", 5),
    ]);
    let snap = common::snapshot(json!([u]), json!([]));

    assert!(common::check(&snap).is_clean());
}

#[test]
fn test_custom_group_table() {
    let config = common::config_from(json!({
        "version": "0.1.0",
        "groups": {
            "core": ["core"],
            "web": ["web", "core"]
        }
    }));

    let mut core = common::unit("svc/core/orders", "orders.go");
    core["imports"] = json!([common::import("svc/web/router", 3)]);
    let mut web = common::unit("svc/web/router", "router.go");
    web["imports"] = json!([common::import("svc/core/orders", 3)]);
    let snap = common::snapshot(json!([core, web]), json!([]));

    let result = common::check_with(config, &snap);
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.diagnostics[0]
        .message
        .contains("the `core` group is not allowed to depend on `web`"));
}

#[test]
fn test_entry_paths_scope_the_check() {
    let config = common::config_from(json!({
        "version": "0.1.0",
        "entry_paths": ["shop/"]
    }));

    // Outside the entry paths: exempt even though the edge is disallowed.
    let mut vendored = common::unit("vendor/lib/domain", "lib.go");
    vendored["imports"] = json!([common::import("vendor/lib/application", 3)]);
    // Inside: checked as usual.
    let mut own = common::unit("shop/domain/cart", "cart.go");
    own["imports"] = json!([common::import("shop/application/checkout", 3)]);
    let snap = common::snapshot(json!([vendored, own]), json!([]));

    let result = common::check_with(config, &snap);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].file, "cart.go");
}

#[test]
fn test_disabling_the_check_silences_it() {
    let config = common::config_from(json!({
        "version": "0.1.0",
        "checks": { "dependency_conventions": false }
    }));

    let mut u = common::unit("shop/domain/cart", "cart.go");
    u["imports"] = json!([common::import("shop/application/checkout", 3)]);
    let snap = common::snapshot(json!([u]), json!([]));

    assert!(common::check_with(config, &snap).is_clean());
}
