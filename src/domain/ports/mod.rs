//! Domain Ports (Interfaces)
//!
//! Traits at the I/O boundary. The infrastructure layer provides the
//! implementations.

pub mod file_system;
pub mod state_repository;

pub use file_system::{FileSystem, FsError, FsResult};
pub use state_repository::{StateError, StateRepository, StateResult};
