//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions and flag-to-configuration mapping
//! - `factory` - Builds the registry and resolver, hands out use cases
//! - `output` - Output rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, StackArgs};
pub use factory::Services;
pub use output::OutputFormat;
