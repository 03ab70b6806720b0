//! Domain Entities
//!
//! - `StackConfig` - the stack configuration value threaded through resolution
//!   and generation
//! - `ProjectState` - what is persisted about a generated project

mod project_state;
mod stack_config;

pub use project_state::{ProjectState, STATE_FILE_NAME};
pub use stack_config::StackConfig;
