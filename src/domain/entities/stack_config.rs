//! StackConfig entity - the full set of choices describing a project
//!
//! A `StackConfig` is a plain value. Resolution never mutates one in place:
//! `with` returns a new configuration with a single field replaced.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Field, FieldValue, Frontend, Orm,
    PackageManager, Runtime, ServerDeploy, WebDeploy,
};

/// Stack configuration
///
/// Every field individually holds a catalog value. Whether the combination is
/// consistent is the resolver's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackConfig {
    pub frontend: BTreeSet<Frontend>,
    pub backend: Backend,
    pub runtime: Runtime,
    pub database: Database,
    pub orm: Orm,
    pub auth: Auth,
    pub api: Api,
    pub db_setup: DbSetup,
    pub addons: BTreeSet<Addon>,
    pub examples: BTreeSet<Example>,
    pub web_deploy: WebDeploy,
    pub server_deploy: ServerDeploy,
    pub package_manager: PackageManager,
    pub git: bool,
    pub install: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            frontend: BTreeSet::from([Frontend::TanstackRouter]),
            backend: Backend::Hono,
            runtime: Runtime::Bun,
            database: Database::Sqlite,
            orm: Orm::Drizzle,
            auth: Auth::BetterAuth,
            api: Api::Trpc,
            db_setup: DbSetup::None,
            addons: BTreeSet::from([Addon::Turborepo]),
            examples: BTreeSet::new(),
            web_deploy: WebDeploy::None,
            server_deploy: ServerDeploy::None,
            package_manager: PackageManager::Bun,
            git: true,
            install: true,
        }
    }
}

impl StackConfig {
    /// Current value of `field`
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Frontend => FieldValue::Frontend(self.frontend.clone()),
            Field::Backend => FieldValue::Backend(self.backend),
            Field::Runtime => FieldValue::Runtime(self.runtime),
            Field::Database => FieldValue::Database(self.database),
            Field::Orm => FieldValue::Orm(self.orm),
            Field::Auth => FieldValue::Auth(self.auth),
            Field::Api => FieldValue::Api(self.api),
            Field::DbSetup => FieldValue::DbSetup(self.db_setup),
            Field::Addons => FieldValue::Addons(self.addons.clone()),
            Field::Examples => FieldValue::Examples(self.examples.clone()),
            Field::WebDeploy => FieldValue::WebDeploy(self.web_deploy),
            Field::ServerDeploy => FieldValue::ServerDeploy(self.server_deploy),
            Field::PackageManager => FieldValue::PackageManager(self.package_manager),
            Field::Git => FieldValue::Git(self.git),
            Field::Install => FieldValue::Install(self.install),
        }
    }

    /// Whether assigning `value` would change this configuration
    pub fn differs(&self, value: &FieldValue) -> bool {
        self.get(value.field()) != *value
    }

    /// New configuration with one field replaced
    #[must_use]
    pub fn with(&self, value: FieldValue) -> Self {
        let mut next = self.clone();
        match value {
            FieldValue::Frontend(v) => next.frontend = v,
            FieldValue::Backend(v) => next.backend = v,
            FieldValue::Runtime(v) => next.runtime = v,
            FieldValue::Database(v) => next.database = v,
            FieldValue::Orm(v) => next.orm = v,
            FieldValue::Auth(v) => next.auth = v,
            FieldValue::Api(v) => next.api = v,
            FieldValue::DbSetup(v) => next.db_setup = v,
            FieldValue::Addons(v) => next.addons = v,
            FieldValue::Examples(v) => next.examples = v,
            FieldValue::WebDeploy(v) => next.web_deploy = v,
            FieldValue::ServerDeploy(v) => next.server_deploy = v,
            FieldValue::PackageManager(v) => next.package_manager = v,
            FieldValue::Git(v) => next.git = v,
            FieldValue::Install(v) => next.install = v,
        }
        next
    }

    /// The selected web frontend, if any (the first one in catalog order)
    pub fn web_frontend(&self) -> Option<Frontend> {
        self.frontend.iter().copied().find(Frontend::is_web)
    }

    /// The selected native frontend, if any
    pub fn native_frontend(&self) -> Option<Frontend> {
        self.frontend.iter().copied().find(Frontend::is_native)
    }

    pub fn has_frontend(&self, frontend: Frontend) -> bool {
        self.frontend.contains(&frontend)
    }

    pub fn has_addon(&self, addon: Addon) -> bool {
        self.addons.contains(&addon)
    }

    pub fn has_example(&self, example: Example) -> bool {
        self.examples.contains(&example)
    }

    /// Whether the project gets a server workspace at all
    pub fn has_server(&self) -> bool {
        self.backend != Backend::None
    }
}
