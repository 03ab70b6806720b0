use super::*;
use crate::domain::value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Frontend, Orm, Runtime,
};

fn resolve(config: &StackConfig) -> ResolutionResult {
    Resolver::default().resolve(config).unwrap()
}

fn fired_ids(result: &ResolutionResult) -> Vec<&'static str> {
    result.fired.iter().map(|f| f.rule_id).collect()
}

#[test]
fn default_config_is_a_fixed_point() {
    let result = resolve(&StackConfig::default());

    assert!(result.is_unchanged());
    assert_eq!(result.passes, 1);
    assert_eq!(result.final_config, StackConfig::default());
    assert!(result.notes_by_field.values().all(|n| !n.has_issue));
}

#[test]
fn notes_cover_every_field() {
    let result = resolve(&StackConfig::default());
    assert_eq!(result.notes_by_field.len(), Field::ALL.len());
}

#[test]
fn mongodb_with_drizzle_switches_orm() {
    let config = StackConfig {
        database: Database::Mongodb,
        ..StackConfig::default()
    };

    let result = resolve(&config);

    assert_eq!(fired_ids(&result), vec!["orm-matches-database"]);
    assert_eq!(result.fired[0].assignments, vec![FieldValue::Orm(Orm::Prisma)]);
    assert_eq!(result.final_config.orm, Orm::Prisma);
    assert_eq!(result.changed_fields(&config), vec![Field::Orm]);

    let orm_notes = &result.notes_by_field[&Field::Orm];
    assert!(orm_notes.has_issue);
    assert!(orm_notes.notes[0].contains("drizzle does not support mongodb"));
    assert!(result.notes_by_field[&Field::Database].has_issue);
    assert!(!result.notes_by_field[&Field::Backend].has_issue);
}

#[test]
fn d1_pulls_in_workers_and_then_hono() {
    let config = StackConfig {
        backend: Backend::Express,
        runtime: Runtime::Node,
        database: Database::Postgres,
        orm: Orm::Prisma,
        db_setup: DbSetup::D1,
        ..StackConfig::default()
    };

    let result = resolve(&config);

    assert_eq!(fired_ids(&result), vec!["db-setup-d1", "workers-requires-hono"]);
    assert_eq!(result.final_config.database, Database::Sqlite);
    assert_eq!(result.final_config.runtime, Runtime::Workers);
    assert_eq!(result.final_config.orm, Orm::Drizzle);
    assert_eq!(result.final_config.backend, Backend::Hono);
    assert_eq!(result.final_config.db_setup, DbSetup::D1);
    assert_eq!(result.passes, 2);
}

#[test]
fn nuxt_drops_pwa_and_trpc() {
    let config = StackConfig {
        frontend: BTreeSet::from([Frontend::Nuxt]),
        addons: BTreeSet::from([Addon::Pwa, Addon::Turborepo]),
        ..StackConfig::default()
    };

    let result = resolve(&config);

    assert_eq!(result.final_config.addons, BTreeSet::from([Addon::Turborepo]));
    assert_eq!(result.final_config.api, Api::Orpc);
    assert!(result
        .notes(Field::Addons)
        .iter()
        .any(|n| n == "pwa not supported with nuxt; removed"));
    // The frontend caused both corrections
    assert_eq!(result.notes(Field::Frontend).len(), 2);
}

#[test]
fn convex_clears_server_side_choices() {
    let config = StackConfig {
        backend: Backend::Convex,
        ..StackConfig::default()
    };

    let result = resolve(&config);
    let fin = &result.final_config;

    assert_eq!(fin.runtime, Runtime::None);
    assert_eq!(fin.database, Database::None);
    assert_eq!(fin.orm, Orm::None);
    assert_eq!(fin.api, Api::None);
    assert_eq!(fin.auth, Auth::Clerk);
    assert_eq!(
        fired_ids(&result),
        vec!["convex-managed-platform", "convex-auth-provider"]
    );
    // Assignments that were already satisfied are not reported
    assert!(!result.fired[0]
        .assignments
        .contains(&FieldValue::DbSetup(DbSetup::None)));
}

#[test]
fn backend_none_clears_auth_and_examples() {
    let config = StackConfig {
        backend: Backend::None,
        examples: BTreeSet::from([crate::domain::value_objects::Example::Todo]),
        ..StackConfig::default()
    };

    let result = resolve(&config);

    assert_eq!(result.final_config.auth, Auth::None);
    assert!(result.final_config.examples.is_empty());
    assert_eq!(result.final_config.runtime, Runtime::None);
    assert_eq!(fired_ids(&result), vec!["backend-none"]);
}

#[test]
fn keeps_first_web_frontend_in_catalog_order() {
    let config = StackConfig {
        frontend: BTreeSet::from([Frontend::Next, Frontend::TanstackRouter, Frontend::NativeNativewind]),
        ..StackConfig::default()
    };

    let result = resolve(&config);

    assert_eq!(
        result.final_config.frontend,
        BTreeSet::from([Frontend::TanstackRouter, Frontend::NativeNativewind])
    );
    assert!(result.fired[0].explanation.ends_with("keeping tanstack-router"));
}

#[test]
fn elysia_on_workers_becomes_hono() {
    let config = StackConfig {
        backend: Backend::Elysia,
        runtime: Runtime::Workers,
        ..StackConfig::default()
    };

    let result = resolve(&config);

    assert_eq!(result.final_config.backend, Backend::Hono);
    assert_eq!(result.final_config.runtime, Runtime::Workers);
    assert_eq!(fired_ids(&result), vec!["workers-requires-hono"]);
}

#[test]
fn resolution_is_idempotent() {
    let config = StackConfig {
        frontend: BTreeSet::from([Frontend::Svelte]),
        backend: Backend::Elysia,
        runtime: Runtime::Node,
        database: Database::Mongodb,
        db_setup: DbSetup::Turso,
        ..StackConfig::default()
    };

    let first = resolve(&config);
    let second = resolve(&first.final_config);

    assert!(second.is_unchanged());
    assert_eq!(second.final_config, first.final_config);
}

#[test]
fn fired_entries_are_in_pass_order() {
    let config = StackConfig {
        backend: Backend::Express,
        runtime: Runtime::Node,
        db_setup: DbSetup::D1,
        ..StackConfig::default()
    };

    let result = resolve(&config);
    let passes: Vec<usize> = result.fired.iter().map(|f| f.pass).collect();
    let mut sorted = passes.clone();
    sorted.sort_unstable();

    assert_eq!(passes, sorted);
}

#[test]
fn strict_rejects_changes_to_pinned_fields() {
    let config = StackConfig {
        database: Database::Mongodb,
        ..StackConfig::default()
    };
    let pinned = BTreeSet::from([Field::Database, Field::Orm]);

    let err = Resolver::default().resolve_strict(&config, &pinned).unwrap_err();

    match err {
        ResolveError::Incompatible(e) => {
            assert_eq!(e.violations.len(), 1);
            assert_eq!(e.violations[0].rule_id, "orm-matches-database");
            assert_eq!(e.violations[0].fields, vec![Field::Orm]);
            let message = e.to_string();
            assert!(message.contains("[orm-matches-database]"));
            assert!(message.contains("pinned: orm"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn strict_still_fixes_unpinned_fields() {
    let config = StackConfig {
        database: Database::Mongodb,
        ..StackConfig::default()
    };
    let pinned = BTreeSet::from([Field::Database]);

    let result = Resolver::default().resolve_strict(&config, &pinned).unwrap();

    assert_eq!(result.final_config.orm, Orm::Prisma);
}

#[test]
fn oscillating_rules_hit_the_pass_bound() {
    let rules = RuleSet::new(vec![
        CompatibilityRule {
            id: "to-node",
            cause: &[Field::Runtime],
            trigger: |c| c.runtime == Runtime::Bun,
            apply: |_| vec![FieldValue::Runtime(Runtime::Node)],
            explain: |_, _| String::new(),
        },
        CompatibilityRule {
            id: "to-bun",
            cause: &[Field::Runtime],
            trigger: |c| c.runtime == Runtime::Node,
            apply: |_| vec![FieldValue::Runtime(Runtime::Bun)],
            explain: |_, _| String::new(),
        },
    ]);

    let err = Resolver::new(rules)
        .with_max_passes(4)
        .resolve(&StackConfig::default())
        .unwrap_err();

    assert_eq!(
        err,
        ResolveError::NonTermination {
            max_passes: 4,
            still_firing: vec!["to-node", "to-bun"],
        }
    );
}

#[test]
fn result_serializes_with_camel_case_keys() {
    let config = StackConfig {
        database: Database::Mongodb,
        ..StackConfig::default()
    };
    let json = serde_json::to_value(resolve(&config)).unwrap();

    assert_eq!(json["fired"][0]["ruleId"], "orm-matches-database");
    assert_eq!(json["notesByField"]["orm"]["hasIssue"], true);
    assert_eq!(json["finalConfig"]["orm"], "prisma");
}
