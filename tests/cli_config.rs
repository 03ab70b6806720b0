mod common;

use common::TestEnv;

#[test]
fn project_config_sets_defaults() {
    let env = TestEnv::new();
    env.write_file(
        ".stackwright.toml",
        "[defaults]\nbackend = \"fastify\"\nruntime = \"node\"\n",
    );

    let result = env.run(&["--json", "resolve"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.json()["config"]["backend"], "fastify");
    assert_eq!(result.json()["config"]["runtime"], "node");
}

#[test]
fn project_config_beats_user_config_and_flags_beat_both() {
    let env = TestEnv::new();
    env.write_user_config("[defaults]\npackage_manager = \"npm\"\nbackend = \"express\"\n");
    env.write_file(".stackwright.toml", "[defaults]\npackage_manager = \"pnpm\"\n");

    let result = env.run(&["--json", "resolve", "--backend", "elysia"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let config = &result.json()["config"];
    assert_eq!(config["packageManager"], "pnpm");
    assert_eq!(config["backend"], "elysia");
}

#[test]
fn environment_overrides_config_files() {
    let env = TestEnv::new();
    env.write_file(".stackwright.toml", "[defaults]\npackage_manager = \"pnpm\"\n");

    let result = env.run_with_env(
        &["--json", "resolve"],
        &[("STACKWRIGHT_PACKAGE_MANAGER", "npm")],
    );

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.json()["config"]["packageManager"], "npm");
}

#[test]
fn configured_auto_fix_off_rejects_conflicts() {
    let env = TestEnv::new();
    env.write_file(".stackwright.toml", "[resolver]\nauto_fix = false\n");

    let result = env.run(&["resolve", "--backend", "express", "--runtime", "workers"]);

    assert_eq!(result.exit_code, 2);
    assert_output_contains!(result, "incompatible options");
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_file(".stackwright.toml", "[defaults]\nbakend = \"hono\"\n");

    let result = env.run(&["resolve"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        result.stderr.contains("bakend") && result.stderr.contains("backend"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn malformed_config_is_a_usage_error() {
    let env = TestEnv::new();
    env.write_file(".stackwright.toml", "[defaults\n");

    let result = env.run(&["resolve"]);

    assert_eq!(result.exit_code, 2);
    assert_output_contains!(result, ".stackwright.toml");
}

#[test]
fn json_errors_are_reported_on_stdout() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "resolve", "--backend", "express", "--runtime", "workers", "--no-auto-fix"]);

    assert_eq!(result.exit_code, 2);
    let json = result.json();
    assert_eq!(json["event"], "error");
    assert_eq!(json["exitCode"], 2);
}
