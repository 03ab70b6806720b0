//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the per-target run
//! lock.

mod home;
mod lock;
mod local;
mod memory;
mod overlay;

pub use home::{user_config_dir, CONFIG_DIR_VAR};
pub use local::LocalFs;
pub use lock::{LockError, TargetLock};
pub use memory::MemoryFs;
pub use overlay::OverlayFs;
