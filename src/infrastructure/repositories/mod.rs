//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod state;

pub use state::{parse as parse_state, render as render_state, strip_comments, JsoncStateRepository};
