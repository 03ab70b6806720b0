//! Field identifiers and typed field values
//!
//! Rules speak in terms of `FieldValue`s: an assignment names its field through
//! the variant, so a rule can never write a value of the wrong type.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::options::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Frontend, Orm, PackageManager,
    Runtime, ServerDeploy, WebDeploy,
};

/// A field of the stack configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Frontend,
    Backend,
    Runtime,
    Database,
    Orm,
    Auth,
    Api,
    DbSetup,
    Addons,
    Examples,
    WebDeploy,
    ServerDeploy,
    PackageManager,
    Git,
    Install,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::Frontend,
        Field::Backend,
        Field::Runtime,
        Field::Database,
        Field::Orm,
        Field::Auth,
        Field::Api,
        Field::DbSetup,
        Field::Addons,
        Field::Examples,
        Field::WebDeploy,
        Field::ServerDeploy,
        Field::PackageManager,
        Field::Git,
        Field::Install,
    ];

    /// Name as it appears in the persisted state file
    pub fn key(&self) -> &'static str {
        match self {
            Field::Frontend => "frontend",
            Field::Backend => "backend",
            Field::Runtime => "runtime",
            Field::Database => "database",
            Field::Orm => "orm",
            Field::Auth => "auth",
            Field::Api => "api",
            Field::DbSetup => "dbSetup",
            Field::Addons => "addons",
            Field::Examples => "examples",
            Field::WebDeploy => "webDeploy",
            Field::ServerDeploy => "serverDeploy",
            Field::PackageManager => "packageManager",
            Field::Git => "git",
            Field::Install => "install",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A value for exactly one field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    Frontend(BTreeSet<Frontend>),
    Backend(Backend),
    Runtime(Runtime),
    Database(Database),
    Orm(Orm),
    Auth(Auth),
    Api(Api),
    DbSetup(DbSetup),
    Addons(BTreeSet<Addon>),
    Examples(BTreeSet<Example>),
    WebDeploy(WebDeploy),
    ServerDeploy(ServerDeploy),
    PackageManager(PackageManager),
    Git(bool),
    Install(bool),
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Frontend(_) => Field::Frontend,
            FieldValue::Backend(_) => Field::Backend,
            FieldValue::Runtime(_) => Field::Runtime,
            FieldValue::Database(_) => Field::Database,
            FieldValue::Orm(_) => Field::Orm,
            FieldValue::Auth(_) => Field::Auth,
            FieldValue::Api(_) => Field::Api,
            FieldValue::DbSetup(_) => Field::DbSetup,
            FieldValue::Addons(_) => Field::Addons,
            FieldValue::Examples(_) => Field::Examples,
            FieldValue::WebDeploy(_) => Field::WebDeploy,
            FieldValue::ServerDeploy(_) => Field::ServerDeploy,
            FieldValue::PackageManager(_) => Field::PackageManager,
            FieldValue::Git(_) => Field::Git,
            FieldValue::Install(_) => Field::Install,
        }
    }
}

fn join_set<T: fmt::Display>(items: &BTreeSet<T>) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field();
        match self {
            FieldValue::Frontend(set) => write!(f, "{field} = [{}]", join_set(set)),
            FieldValue::Addons(set) => write!(f, "{field} = [{}]", join_set(set)),
            FieldValue::Examples(set) => write!(f, "{field} = [{}]", join_set(set)),
            FieldValue::Backend(v) => write!(f, "{field} = {v}"),
            FieldValue::Runtime(v) => write!(f, "{field} = {v}"),
            FieldValue::Database(v) => write!(f, "{field} = {v}"),
            FieldValue::Orm(v) => write!(f, "{field} = {v}"),
            FieldValue::Auth(v) => write!(f, "{field} = {v}"),
            FieldValue::Api(v) => write!(f, "{field} = {v}"),
            FieldValue::DbSetup(v) => write!(f, "{field} = {v}"),
            FieldValue::WebDeploy(v) => write!(f, "{field} = {v}"),
            FieldValue::ServerDeploy(v) => write!(f, "{field} = {v}"),
            FieldValue::PackageManager(v) => write!(f, "{field} = {v}"),
            FieldValue::Git(v) | FieldValue::Install(v) => write!(f, "{field} = {v}"),
        }
    }
}
