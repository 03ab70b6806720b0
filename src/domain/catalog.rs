//! Option catalog
//!
//! Every category and its legal values, as data. Behavior lives in the rule
//! set; this is what `stackwright catalog` prints and what property tests
//! sample from.

use serde::Serialize;

use crate::domain::value_objects::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Field, Frontend, Orm, PackageManager,
    Runtime, ServerDeploy, WebDeploy,
};

/// Whether a category holds one value or an ordered set of values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    Single,
    Set,
    Flag,
}

/// One catalog category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub field: Field,
    pub cardinality: Cardinality,
    pub values: Vec<&'static str>,
}

fn names<T: Copy>(all: &[T], name: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(name).collect()
}

/// The full option catalog, in field order
pub fn catalog() -> Vec<CatalogEntry> {
    Field::ALL
        .iter()
        .map(|&field| {
            let (cardinality, values) = match field {
                Field::Frontend => (Cardinality::Set, names(Frontend::ALL, Frontend::as_str)),
                Field::Backend => (Cardinality::Single, names(Backend::ALL, Backend::as_str)),
                Field::Runtime => (Cardinality::Single, names(Runtime::ALL, Runtime::as_str)),
                Field::Database => (Cardinality::Single, names(Database::ALL, Database::as_str)),
                Field::Orm => (Cardinality::Single, names(Orm::ALL, Orm::as_str)),
                Field::Auth => (Cardinality::Single, names(Auth::ALL, Auth::as_str)),
                Field::Api => (Cardinality::Single, names(Api::ALL, Api::as_str)),
                Field::DbSetup => (Cardinality::Single, names(DbSetup::ALL, DbSetup::as_str)),
                Field::Addons => (Cardinality::Set, names(Addon::ALL, Addon::as_str)),
                Field::Examples => (Cardinality::Set, names(Example::ALL, Example::as_str)),
                Field::WebDeploy => (
                    Cardinality::Single,
                    names(WebDeploy::ALL, WebDeploy::as_str),
                ),
                Field::ServerDeploy => (
                    Cardinality::Single,
                    names(ServerDeploy::ALL, ServerDeploy::as_str),
                ),
                Field::PackageManager => (
                    Cardinality::Single,
                    names(PackageManager::ALL, PackageManager::as_str),
                ),
                Field::Git | Field::Install => (Cardinality::Flag, vec!["true", "false"]),
            };
            CatalogEntry {
                field,
                cardinality,
                values,
            }
        })
        .collect()
}

/// Catalog entry for a single field
pub fn entry(field: Field) -> CatalogEntry {
    catalog()
        .into_iter()
        .find(|e| e.field == field)
        .unwrap_or(CatalogEntry {
            field,
            cardinality: Cardinality::Flag,
            values: Vec::new(),
        })
}
