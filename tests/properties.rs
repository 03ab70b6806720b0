//! Property tests for Stackwright.
//!
//! Properties use randomized stacks drawn from the option catalog to check
//! the resolver and orchestrator invariants across the combinatorial space.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/stack.rs"]
mod stack;

#[path = "properties/resolver.rs"]
mod resolver;

#[path = "properties/orchestrator.rs"]
mod orchestrator;

#[path = "properties/patches.rs"]
mod patches;
