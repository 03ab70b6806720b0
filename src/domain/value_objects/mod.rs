//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts: the option values of
//! every catalog category, field identifiers, workspaces and content hashes.

mod field;
mod hash;
mod options;
mod workspace;

pub use field::{Field, FieldValue};
pub use hash::ContentHash;
pub use options::{
    Addon, Api, Auth, Backend, Database, DbSetup, Example, Frontend, Orm, PackageManager,
    Runtime, ServerDeploy, UnknownOption, WebDeploy,
};
pub use workspace::Workspace;
