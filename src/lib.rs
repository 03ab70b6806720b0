//! Stackwright - full-stack TypeScript scaffolding
//!
//! Stackwright takes a requested stack (frontends, backend, runtime, database,
//! ORM, auth, API layer, addons, deployment targets), resolves it into a
//! compatible configuration with a fixed-point pass over an ordered rule table,
//! and then composes the project from generator modules that each contribute
//! templates, dependencies, scripts and config patches.
//!
//! ## Layers
//!
//! - `domain` - option catalog, compatibility rules, resolver, patch operations
//! - `modules` - the generator module table and pinned dependency versions
//! - `application` - `create` and `add` orchestration
//! - `infrastructure` - file systems, template rendering, manifest merging
//! - `presentation` - CLI definitions and output rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod modules;
pub mod presentation;

// Re-exports for convenience
pub use application::{AddRequest, AddUseCase, GenerateOptions, GenerateUseCase, GeneratedProject};
pub use config::Config;
pub use domain::entities::StackConfig;
pub use domain::services::{ResolutionResult, ResolveError, Resolver};
pub use error::{StackwrightError, StackwrightResult};
pub use modules::ModuleRegistry;
