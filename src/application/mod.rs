//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure, Domain and the module registry
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Runs the module plan for a resolved configuration
//! - `AddUseCase` - Adds addons or deployment targets to an existing project

pub mod add;
pub mod generate;

pub use add::{AddError, AddRequest, AddResult, AddUseCase, NotAdded};
pub use generate::{
    GenerateOptions, GenerateUseCase, GeneratedProject, GenerationError, GenerationErrorKind,
    SkippedContribution, Stage,
};
