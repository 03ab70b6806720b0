//! Scenario: a developer asks for Cloudflare D1 and gets a full edge stack.

use std::path::Path;

use stackwright::domain::value_objects::{
    Addon, Backend, Database, DbSetup, Field, Frontend, Orm, Runtime,
};
use stackwright::infrastructure::fs::LocalFs;
use stackwright::modules::VersionRegistry;
use stackwright::{GenerateOptions, GenerateUseCase, ModuleRegistry, Resolver, StackConfig};

fn read_json(dir: &Path, relative: &str) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(dir.join(relative)).unwrap()).unwrap()
}

#[test]
fn d1_request_cascades_and_generates_a_workers_server() {
    let dir = tempfile::tempdir().unwrap();
    let requested = StackConfig {
        backend: Backend::Express,
        runtime: Runtime::Node,
        database: Database::Postgres,
        orm: Orm::Prisma,
        db_setup: DbSetup::D1,
        ..StackConfig::default()
    };

    let resolution = Resolver::default().resolve(&requested).unwrap();
    let config = &resolution.final_config;
    assert_eq!(config.database, Database::Sqlite);
    assert_eq!(config.runtime, Runtime::Workers);
    assert_eq!(config.orm, Orm::Drizzle);
    assert_eq!(config.backend, Backend::Hono);
    assert_eq!(
        resolution.changed_fields(&requested),
        vec![Field::Backend, Field::Runtime, Field::Database, Field::Orm]
    );

    let registry = ModuleRegistry::builtin().unwrap();
    let fs = LocalFs::new();
    let project = GenerateUseCase::new(&fs, &registry, VersionRegistry::builtin())
        .execute(config, &GenerateOptions::new(dir.path().join("edge")))
        .unwrap();

    assert!(project.modules_run.contains(&"db-setup-d1"));
    let root = dir.path().join("edge");
    assert!(root.join("apps/server/wrangler.jsonc").exists());
    let server = read_json(&root, "apps/server/package.json");
    assert!(server["dependencies"].get("drizzle-orm").is_some());
    assert!(server["dependencies"].get("@prisma/client").is_none());
}

#[test]
fn mismatched_orm_is_corrected_once() {
    let requested = StackConfig {
        database: Database::Mongodb,
        orm: Orm::Drizzle,
        ..StackConfig::default()
    };

    let resolution = Resolver::default().resolve(&requested).unwrap();

    assert_eq!(resolution.fired.len(), 1);
    assert_eq!(resolution.fired[0].rule_id, "orm-matches-database");
    assert_ne!(resolution.final_config.orm, Orm::Drizzle);
}

#[test]
fn incompatible_addon_is_pruned_with_notes_on_both_fields() {
    let requested = StackConfig {
        frontend: [Frontend::Svelte].into(),
        addons: [Addon::Pwa, Addon::Turborepo].into(),
        ..StackConfig::default()
    };

    let resolution = Resolver::default().resolve(&requested).unwrap();

    assert!(!resolution.final_config.addons.contains(&Addon::Pwa));
    assert!(resolution.final_config.addons.contains(&Addon::Turborepo));
    assert!(!resolution.notes(Field::Addons).is_empty());
    assert!(!resolution.notes(Field::Frontend).is_empty());
}
