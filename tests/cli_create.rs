mod common;

use common::TestEnv;

#[test]
fn create_default_stack_writes_project() {
    let env = TestEnv::new();

    let result = env.run(&["create", "my-app"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_generated!(env, "my-app/package.json");
    assert_generated!(env, "my-app/stackwright.jsonc");
    assert_generated!(env, "my-app/apps/web/package.json");
    assert_generated!(env, "my-app/apps/server/src/index.ts");
    assert_eq!(env.read_json("my-app/package.json")["name"], "my-app");
    assert_eq!(
        env.read_json("my-app/apps/server/package.json")["dependencies"]["hono"],
        "^4.7.10"
    );
}

#[test]
fn create_prints_next_steps() {
    let env = TestEnv::new();

    let result = env.run(&["create", "my-app"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_output_contains!(result, "Next steps:");
    assert_output_contains!(result, "  git init\n");
    assert_output_contains!(result, "  bun install\n");
    assert_output_contains!(result, "  bun run dev\n");
}

#[test]
fn create_without_git_or_install_omits_those_steps() {
    let env = TestEnv::new();

    let result = env.run(&[
        "create",
        "my-app",
        "--no-git",
        "--no-install",
        "--package-manager",
        "pnpm",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(!result.stdout.contains("git init"));
    assert!(!result.stdout.contains("pnpm install"));
    assert_output_contains!(result, "  pnpm run dev\n");
    assert_generated!(env, "my-app/pnpm-workspace.yaml");
}

#[test]
fn create_auto_fixes_conflicting_flags() {
    let env = TestEnv::new();

    let result = env.run(&["create", "edge", "--backend", "express", "--runtime", "workers"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_output_contains!(result, "[workers-requires-hono]");
    let server = env.read_json("edge/apps/server/package.json");
    assert_eq!(server["dependencies"]["hono"], "^4.7.10");
    assert!(server["dependencies"].get("express").is_none());
}

#[test]
fn create_no_auto_fix_rejects_before_writing() {
    let env = TestEnv::new();

    let result = env.run(&[
        "create",
        "edge",
        "--backend",
        "express",
        "--runtime",
        "workers",
        "--no-auto-fix",
    ]);

    assert_eq!(result.exit_code, 2);
    assert_output_contains!(result, "incompatible options");
    assert_output_contains!(result, "[workers-requires-hono]");
    assert_not_generated!(env, "edge");
}

#[test]
fn create_into_non_empty_directory_needs_yes() {
    let env = TestEnv::new();
    env.write_file("existing/notes.txt", "keep me\n");

    let refused = env.run(&["create", "existing"]);
    assert_eq!(refused.exit_code, 2);
    assert_output_contains!(refused, "is not empty; pass --yes");
    assert_not_generated!(env, "existing/package.json");

    let accepted = env.run(&["create", "existing", "--yes"]);
    assert!(accepted.success, "stderr:\n{}", accepted.stderr);
    assert_generated!(env, "existing/package.json");
    assert_eq!(env.read("existing/notes.txt"), "keep me\n");
}

#[test]
fn create_into_a_file_is_rejected() {
    let env = TestEnv::new();
    env.write_file("taken", "");

    let result = env.run(&["create", "taken", "--yes"]);

    assert_eq!(result.exit_code, 2);
    assert_output_contains!(result, "is not a directory");
}

#[test]
fn create_dry_run_touches_nothing() {
    let env = TestEnv::new();

    let result = env.run(&["create", "my-app", "--dry-run"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_output_contains!(result, "Would write");
    assert_output_contains!(result, "stackwright.jsonc");
    assert!(!result.stdout.contains("Next steps:"));
    assert_not_generated!(env, "my-app");
}

#[test]
fn create_json_reports_config_and_files() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "create", "my-app", "--database", "mongodb", "--orm", "drizzle"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let json = result.json();
    assert_eq!(json["config"]["orm"], "prisma");
    assert_eq!(json["changed"], serde_json::json!(["orm"]));
    assert_eq!(json["dryRun"], false);
    assert!(json["project"]["modulesRun"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("orm-prisma")));
}
