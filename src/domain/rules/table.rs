//! The built-in compatibility rule table
//!
//! Order matters. Each pass walks this table top to bottom and later rules see
//! the effects of earlier ones. Platform rules come first, then database
//! hosting (which may imply a runtime), then runtime/backend fixups, then the
//! data layer, then everything that only ever removes choices.

use std::collections::BTreeSet;

use super::CompatibilityRule;
use crate::domain::entities::StackConfig;
use crate::domain::value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Field, FieldValue, Frontend, Orm,
    Runtime, ServerDeploy, WebDeploy,
};

fn describe(assignments: &[FieldValue]) -> String {
    assignments
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn web_count(config: &StackConfig) -> usize {
    config.frontend.iter().filter(|f| f.is_web()).count()
}

fn native_count(config: &StackConfig) -> usize {
    config.frontend.iter().filter(|f| f.is_native()).count()
}

/// Keep the first frontend of the kind selected by `is_kind`, drop the others
fn keep_first(config: &StackConfig, is_kind: fn(&Frontend) -> bool) -> BTreeSet<Frontend> {
    let first = config.frontend.iter().copied().find(is_kind);
    config
        .frontend
        .iter()
        .copied()
        .filter(|f| !is_kind(f) || Some(*f) == first)
        .collect()
}

fn unsupported_addons(config: &StackConfig) -> Vec<Addon> {
    config
        .addons
        .iter()
        .copied()
        .filter(|addon| match addon.compatible_frontends() {
            Some(supported) => !config.frontend.iter().any(|f| supported.contains(f)),
            None => false,
        })
        .collect()
}

fn clears_server_side() -> Vec<FieldValue> {
    vec![
        FieldValue::Runtime(Runtime::None),
        FieldValue::Database(Database::None),
        FieldValue::Orm(Orm::None),
        FieldValue::Api(Api::None),
        FieldValue::DbSetup(DbSetup::None),
        FieldValue::ServerDeploy(ServerDeploy::None),
    ]
}

pub(super) fn rules() -> Vec<CompatibilityRule> {
    vec![
        // -- frontend shape ---------------------------------------------------
        CompatibilityRule {
            id: "frontend-single-web",
            cause: &[Field::Frontend],
            trigger: |c| web_count(c) > 1,
            apply: |c| vec![FieldValue::Frontend(keep_first(c, Frontend::is_web))],
            explain: |c, _| {
                let kept = c.web_frontend().map(|f| f.to_string()).unwrap_or_default();
                format!("Only one web frontend is supported; keeping {kept}")
            },
        },
        CompatibilityRule {
            id: "frontend-single-native",
            cause: &[Field::Frontend],
            trigger: |c| native_count(c) > 1,
            apply: |c| vec![FieldValue::Frontend(keep_first(c, Frontend::is_native))],
            explain: |c, _| {
                let kept = c.native_frontend().map(|f| f.to_string()).unwrap_or_default();
                format!("Only one native frontend is supported; keeping {kept}")
            },
        },
        // -- backend platform -------------------------------------------------
        CompatibilityRule {
            id: "backend-none",
            cause: &[Field::Backend],
            trigger: |c| c.backend == Backend::None,
            apply: |_| {
                let mut values = clears_server_side();
                values.push(FieldValue::Auth(Auth::None));
                values.push(FieldValue::Examples(BTreeSet::new()));
                values
            },
            explain: |_, a| {
                format!(
                    "Without a backend there is nothing to run server-side code on ({})",
                    describe(a)
                )
            },
        },
        CompatibilityRule {
            id: "convex-managed-platform",
            cause: &[Field::Backend],
            trigger: |c| c.backend == Backend::Convex,
            apply: |_| clears_server_side(),
            explain: |_, a| {
                format!(
                    "Convex is a managed platform providing its own runtime, storage and API ({})",
                    describe(a)
                )
            },
        },
        CompatibilityRule {
            id: "convex-auth-provider",
            cause: &[Field::Backend, Field::Auth],
            trigger: |c| c.backend == Backend::Convex && c.auth == Auth::BetterAuth,
            apply: |_| vec![FieldValue::Auth(Auth::Clerk)],
            explain: |_, _| "Convex projects authenticate through Clerk".to_string(),
        },
        CompatibilityRule {
            id: "convex-examples",
            cause: &[Field::Backend, Field::Examples],
            trigger: |c| c.backend == Backend::Convex,
            apply: |c| {
                vec![FieldValue::Examples(
                    c.examples
                        .iter()
                        .copied()
                        .filter(|e| *e == Example::Todo)
                        .collect(),
                )]
            },
            explain: |c, _| {
                let dropped = c.examples.iter().filter(|e| **e != Example::Todo);
                format!("Convex only ships the todo example; dropping {}", join(dropped))
            },
        },
        CompatibilityRule {
            id: "clerk-requires-convex",
            cause: &[Field::Auth, Field::Backend],
            trigger: |c| c.auth == Auth::Clerk && c.backend != Backend::Convex,
            apply: |_| vec![FieldValue::Auth(Auth::BetterAuth)],
            explain: |c, _| {
                format!(
                    "Clerk is only wired up for Convex; using better-auth with {}",
                    c.backend
                )
            },
        },
        CompatibilityRule {
            id: "next-backend-frontend",
            cause: &[Field::Backend, Field::Frontend],
            trigger: |c| c.backend == Backend::Next && !c.has_frontend(Frontend::Next),
            apply: |c| {
                let mut frontend: BTreeSet<Frontend> =
                    c.frontend.iter().copied().filter(Frontend::is_native).collect();
                frontend.insert(Frontend::Next);
                vec![FieldValue::Frontend(frontend)]
            },
            explain: |c, _| match c.web_frontend() {
                Some(previous) => format!(
                    "The Next.js backend is served alongside a Next.js web app; replacing {previous}"
                ),
                None => "The Next.js backend is served alongside a Next.js web app".to_string(),
            },
        },
        CompatibilityRule {
            id: "next-backend-runtime",
            cause: &[Field::Backend],
            trigger: |c| c.backend == Backend::Next,
            apply: |_| vec![FieldValue::Runtime(Runtime::None)],
            explain: |_, _| "Next.js brings its own server runtime".to_string(),
        },
        // -- database hosting -------------------------------------------------
        CompatibilityRule {
            id: "db-setup-turso",
            cause: &[Field::DbSetup],
            trigger: |c| c.db_setup == DbSetup::Turso,
            apply: |_| vec![FieldValue::Database(Database::Sqlite)],
            explain: |_, _| "Turso hosts SQLite (libSQL) databases".to_string(),
        },
        CompatibilityRule {
            id: "db-setup-neon",
            cause: &[Field::DbSetup],
            trigger: |c| c.db_setup == DbSetup::Neon,
            apply: |_| vec![FieldValue::Database(Database::Postgres)],
            explain: |_, _| "Neon hosts PostgreSQL databases".to_string(),
        },
        CompatibilityRule {
            id: "db-setup-supabase",
            cause: &[Field::DbSetup],
            trigger: |c| c.db_setup == DbSetup::Supabase,
            apply: |_| vec![FieldValue::Database(Database::Postgres)],
            explain: |_, _| "Supabase hosts PostgreSQL databases".to_string(),
        },
        CompatibilityRule {
            id: "db-setup-prisma-postgres",
            cause: &[Field::DbSetup],
            trigger: |c| c.db_setup == DbSetup::PrismaPostgres,
            apply: |_| {
                vec![
                    FieldValue::Database(Database::Postgres),
                    FieldValue::Orm(Orm::Prisma),
                ]
            },
            explain: |_, a| format!("Prisma Postgres is accessed through Prisma ({})", describe(a)),
        },
        CompatibilityRule {
            id: "db-setup-mongodb-atlas",
            cause: &[Field::DbSetup],
            trigger: |c| c.db_setup == DbSetup::MongodbAtlas,
            apply: |_| vec![FieldValue::Database(Database::Mongodb)],
            explain: |_, _| "MongoDB Atlas hosts MongoDB databases".to_string(),
        },
        CompatibilityRule {
            id: "db-setup-d1",
            cause: &[Field::DbSetup],
            trigger: |c| c.db_setup == DbSetup::D1,
            apply: |_| {
                vec![
                    FieldValue::Database(Database::Sqlite),
                    FieldValue::Runtime(Runtime::Workers),
                    FieldValue::Orm(Orm::Drizzle),
                ]
            },
            explain: |_, a| {
                format!(
                    "Cloudflare D1 is edge SQLite, reachable from Workers through Drizzle ({})",
                    describe(a)
                )
            },
        },
        CompatibilityRule {
            id: "db-setup-docker",
            cause: &[Field::DbSetup, Field::Database, Field::Runtime],
            trigger: |c| {
                c.db_setup == DbSetup::Docker
                    && (matches!(c.database, Database::None | Database::Sqlite)
                        || c.runtime == Runtime::Workers)
            },
            apply: |_| vec![FieldValue::DbSetup(DbSetup::None)],
            explain: |c, _| {
                if c.runtime == Runtime::Workers {
                    "A docker database is unreachable from Workers".to_string()
                } else {
                    format!("Docker setup needs a server database, not {}", c.database)
                }
            },
        },
        // -- runtime / backend ------------------------------------------------
        CompatibilityRule {
            id: "server-runtime-required",
            cause: &[Field::Backend, Field::Runtime],
            trigger: |c| c.backend.needs_runtime() && c.runtime == Runtime::None,
            apply: |_| vec![FieldValue::Runtime(Runtime::Bun)],
            explain: |c, _| format!("{} runs as a standalone server and needs a runtime", c.backend),
        },
        CompatibilityRule {
            id: "workers-requires-hono",
            cause: &[Field::Runtime, Field::Backend],
            trigger: |c| c.runtime == Runtime::Workers && c.backend != Backend::Hono,
            apply: |_| vec![FieldValue::Backend(Backend::Hono)],
            explain: |c, _| format!("Workers runs Hono; {} is not supported there", c.backend),
        },
        CompatibilityRule {
            id: "elysia-requires-bun",
            cause: &[Field::Backend, Field::Runtime],
            trigger: |c| c.backend == Backend::Elysia && c.runtime == Runtime::Node,
            apply: |_| vec![FieldValue::Runtime(Runtime::Bun)],
            explain: |_, _| "Elysia is built for the Bun runtime".to_string(),
        },
        CompatibilityRule {
            id: "workers-excludes-mongodb",
            cause: &[Field::Runtime, Field::Database],
            trigger: |c| c.runtime == Runtime::Workers && c.database == Database::Mongodb,
            apply: |c| {
                let mut values = vec![FieldValue::Database(Database::Sqlite)];
                if c.db_setup == DbSetup::MongodbAtlas {
                    values.push(FieldValue::DbSetup(DbSetup::None));
                }
                values
            },
            explain: |_, a| format!("MongoDB drivers do not run on Workers ({})", describe(a)),
        },
        // -- data layer -------------------------------------------------------
        CompatibilityRule {
            id: "orm-requires-database",
            cause: &[Field::Database, Field::Orm],
            trigger: |c| c.database == Database::None && c.orm != Orm::None,
            apply: |_| vec![FieldValue::Orm(Orm::None)],
            explain: |c, _| format!("{} has no database to talk to", c.orm),
        },
        CompatibilityRule {
            id: "orm-matches-database",
            cause: &[Field::Database, Field::Orm],
            trigger: |c| c.database != Database::None && !c.orm.supports(c.database),
            apply: |c| {
                let orm = Orm::compatible_with(c.database)
                    .first()
                    .copied()
                    .unwrap_or(Orm::None);
                vec![FieldValue::Orm(orm)]
            },
            explain: |c, a| {
                format!(
                    "{} does not support {}; compatible: {} ({})",
                    c.orm,
                    c.database,
                    join(Orm::compatible_with(c.database)),
                    describe(a)
                )
            },
        },
        CompatibilityRule {
            id: "better-auth-requires-database",
            cause: &[Field::Auth, Field::Database],
            trigger: |c| c.auth == Auth::BetterAuth && c.database == Database::None,
            apply: |_| vec![FieldValue::Auth(Auth::None)],
            explain: |_, _| "better-auth stores sessions in the database; none selected".to_string(),
        },
        // -- API and examples -------------------------------------------------
        CompatibilityRule {
            id: "trpc-frontend-support",
            cause: &[Field::Api, Field::Frontend],
            trigger: |c| {
                c.api == Api::Trpc
                    && c.frontend
                        .iter()
                        .any(|f| matches!(f, Frontend::Nuxt | Frontend::Svelte | Frontend::Solid))
            },
            apply: |_| vec![FieldValue::Api(Api::Orpc)],
            explain: |c, _| {
                let offending = c
                    .frontend
                    .iter()
                    .filter(|f| matches!(f, Frontend::Nuxt | Frontend::Svelte | Frontend::Solid));
                format!("tRPC has no client for {}; using oRPC", join(offending))
            },
        },
        CompatibilityRule {
            id: "examples-require-api",
            cause: &[Field::Api, Field::Examples],
            trigger: |c| {
                c.api == Api::None && c.backend != Backend::Convex && !c.examples.is_empty()
            },
            apply: |_| vec![FieldValue::Examples(BTreeSet::new())],
            explain: |c, _| {
                format!(
                    "Examples talk to the server through the API layer; dropping {}",
                    join(&c.examples)
                )
            },
        },
        CompatibilityRule {
            id: "examples-require-web",
            cause: &[Field::Frontend, Field::Examples],
            trigger: |c| c.web_frontend().is_none() && !c.examples.is_empty(),
            apply: |_| vec![FieldValue::Examples(BTreeSet::new())],
            explain: |c, _| {
                format!(
                    "Examples render in the web app; none selected, dropping {}",
                    join(&c.examples)
                )
            },
        },
        CompatibilityRule {
            id: "ai-example-frontend",
            cause: &[Field::Examples, Field::Frontend],
            trigger: |c| c.has_example(Example::Ai) && c.has_frontend(Frontend::Solid),
            apply: |c| {
                vec![FieldValue::Examples(
                    c.examples
                        .iter()
                        .copied()
                        .filter(|e| *e != Example::Ai)
                        .collect(),
                )]
            },
            explain: |_, _| "The ai example has no solid implementation".to_string(),
        },
        // -- addons and deployment --------------------------------------------
        CompatibilityRule {
            id: "addon-frontend-support",
            cause: &[Field::Addons, Field::Frontend],
            trigger: |c| !unsupported_addons(c).is_empty(),
            apply: |c| {
                let dropped = unsupported_addons(c);
                vec![FieldValue::Addons(
                    c.addons
                        .iter()
                        .copied()
                        .filter(|a| !dropped.contains(a))
                        .collect(),
                )]
            },
            explain: |c, _| {
                let frontends = if c.frontend.is_empty() {
                    "no frontend".to_string()
                } else {
                    join(&c.frontend)
                };
                format!(
                    "{} not supported with {frontends}; removed",
                    join(unsupported_addons(c))
                )
            },
        },
        CompatibilityRule {
            id: "web-deploy-requires-web",
            cause: &[Field::WebDeploy, Field::Frontend],
            trigger: |c| c.web_deploy != WebDeploy::None && c.web_frontend().is_none(),
            apply: |_| vec![FieldValue::WebDeploy(WebDeploy::None)],
            explain: |_, _| "There is no web app to deploy".to_string(),
        },
        CompatibilityRule {
            id: "server-deploy-requires-workers",
            cause: &[Field::ServerDeploy, Field::Runtime],
            trigger: |c| c.server_deploy == ServerDeploy::Workers && c.runtime != Runtime::Workers,
            apply: |_| vec![FieldValue::ServerDeploy(ServerDeploy::None)],
            explain: |c, _| format!("Workers deployment needs the workers runtime, not {}", c.runtime),
        },
    ]
}
