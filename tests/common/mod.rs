//! Common test utilities for Stackwright CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and user config directories
//! - Assertion macros: `assert_generated!`, `assert_output_contains!`

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
