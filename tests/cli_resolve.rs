mod common;

use common::TestEnv;

#[test]
fn resolve_default_needs_no_adjustment() {
    let env = TestEnv::new();

    let result = env.run(&["resolve"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_output_contains!(result, "Resolved configuration:");
    assert_output_contains!(result, "No adjustments needed.");
    assert!(std::fs::read_dir(env.root()).unwrap().next().is_none());
}

#[test]
fn resolve_convex_clears_server_side_fields() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "resolve", "--backend", "convex"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let config = &result.json()["config"];
    assert_eq!(config["runtime"], "none");
    assert_eq!(config["database"], "none");
    assert_eq!(config["orm"], "none");
    assert_eq!(config["api"], "none");
}

#[test]
fn resolve_d1_cascades_through_the_stack() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "resolve", "--db-setup", "d1", "--backend", "express"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let json = result.json();
    assert_eq!(json["config"]["database"], "sqlite");
    assert_eq!(json["config"]["runtime"], "workers");
    assert_eq!(json["config"]["orm"], "drizzle");
    assert_eq!(json["config"]["backend"], "hono");
}

#[test]
fn resolve_empty_set_flag_clears_addons() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "resolve", "--addons"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.json()["config"]["addons"], serde_json::json!([]));
}

#[test]
fn resolve_unknown_value_is_a_usage_error() {
    let env = TestEnv::new();

    let result = env.run(&["resolve", "--orm", "sequelize"]);

    assert_eq!(result.exit_code, 2);
    assert_output_contains!(result, "sequelize");
}
