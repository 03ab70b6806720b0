//! Scenario: create a project, then add a PWA and a web deployment later.

use std::path::Path;

use chrono::{TimeZone, Utc};

use stackwright::application::AddRequest;
use stackwright::domain::value_objects::{Addon, WebDeploy};
use stackwright::infrastructure::fs::LocalFs;
use stackwright::infrastructure::repositories::parse_state;
use stackwright::modules::VersionRegistry;
use stackwright::{
    AddUseCase, GenerateOptions, GenerateUseCase, ModuleRegistry, Resolver, StackConfig,
};

fn read(dir: &Path, relative: &str) -> String {
    std::fs::read_to_string(dir.join(relative))
        .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
}

#[test]
fn addons_added_later_patch_the_existing_project() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("shop");
    let fs = LocalFs::new();
    let registry = ModuleRegistry::builtin().unwrap();
    let resolver = Resolver::default();
    let created_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

    GenerateUseCase::new(&fs, &registry, VersionRegistry::builtin())
        .execute(
            &StackConfig::default(),
            &GenerateOptions::new(&dir)
                .with_tool_version("0.3.0")
                .with_created_at(created_at),
        )
        .unwrap();
    std::fs::write(dir.join("apps/web/src/custom.ts"), "export const mine = 1;\n").unwrap();

    let request = AddRequest {
        addons: vec![Addon::Pwa],
        web_deploy: Some(WebDeploy::Workers),
        server_deploy: None,
    };
    let result = AddUseCase::new(&fs, &registry, VersionRegistry::builtin(), &resolver)
        .execute(&dir, &request, "0.4.0")
        .unwrap();

    assert_eq!(result.project.modules_run, vec!["addon-pwa", "deploy-web-workers"]);
    assert!(result.dropped.is_empty());

    let vite = read(&dir, "apps/web/vite.config.ts");
    assert!(vite.contains("VitePWA("));
    assert!(vite.contains("tanstackRouter("));
    assert!(dir.join("apps/web/wrangler.jsonc").exists());
    assert_eq!(read(&dir, "apps/web/src/custom.ts"), "export const mine = 1;\n");

    let web: serde_json::Value = serde_json::from_str(&read(&dir, "apps/web/package.json")).unwrap();
    assert!(web["devDependencies"].get("vite-plugin-pwa").is_some());
    assert!(web["devDependencies"].get("wrangler").is_some());

    let state = parse_state(&read(&dir, "stackwright.jsonc")).unwrap();
    assert_eq!(state.version, "0.4.0");
    assert_eq!(state.created_at, created_at);
    assert!(state.config.addons.contains(&Addon::Pwa));
    assert_eq!(state.config.web_deploy, WebDeploy::Workers);
}

#[test]
fn adding_the_same_addon_twice_changes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("app");
    let fs = LocalFs::new();
    let registry = ModuleRegistry::builtin().unwrap();
    let resolver = Resolver::default();
    GenerateUseCase::new(&fs, &registry, VersionRegistry::builtin())
        .execute(&StackConfig::default(), &GenerateOptions::new(&dir))
        .unwrap();

    let request = AddRequest {
        addons: vec![Addon::Biome],
        web_deploy: None,
        server_deploy: None,
    };
    let add = AddUseCase::new(&fs, &registry, VersionRegistry::builtin(), &resolver);
    add.execute(&dir, &request, "0.4.0").unwrap();
    let package_json = read(&dir, "package.json");

    let again = add.execute(&dir, &request, "0.4.0").unwrap();

    assert!(again.project.modules_run.is_empty());
    assert_eq!(read(&dir, "package.json"), package_json);
}
