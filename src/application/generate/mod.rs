//! Generate Module
//!
//! Materializes a resolved stack configuration into a project directory.
//!
//! ## Structure
//!
//! - `options` - Where and under what name to generate (`GenerateOptions`)
//! - `result` - What was written (`GeneratedProject`) and how it failed (`GenerationError`)
//! - `use_case` - The module orchestrator (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use stackwright::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(&fs, &registry, versions);
//! let project = use_case.execute(&resolved.final_config, &GenerateOptions::new("./my-app"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{project_name_for, GenerateOptions};
pub use result::{GeneratedProject, GenerationError, GenerationErrorKind, SkippedContribution, Stage};
pub use use_case::GenerateUseCase;
