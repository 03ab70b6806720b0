//! Domain Services
//!
//! Pure logic over domain values: fixed-point resolution of a stack
//! configuration and idempotent text patches. No I/O.

pub mod patcher;
pub mod resolver;

pub use patcher::{PatchError, PatchOp, PatchOutcome};
pub use resolver::{
    FieldNotes, FiredRule, IncompatibleInputError, ResolutionResult, ResolveError, Resolver,
    Violation, MAX_PASSES,
};
