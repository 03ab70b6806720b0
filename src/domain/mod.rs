//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Option enums, field identifiers, workspaces, hashes
//! - `entities/` - `StackConfig` and the persisted `ProjectState`
//! - `catalog` - Every category and its legal values
//! - `rules/` - The ordered compatibility rule table
//! - `services/` - Resolver and patch operations
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! Nothing in here touches the file system or logs.

pub mod catalog;
pub mod entities;
pub mod ports;
pub mod rules;
pub mod services;
pub mod value_objects;
