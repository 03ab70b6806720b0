//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `project/` - Writers for generated project files (templates, manifests, patches, env)
//! - `repositories/` - Persisted state repository

pub mod fs;
pub mod project;
pub mod repositories;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use repositories::JsoncStateRepository;
