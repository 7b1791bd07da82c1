//! CLI command handlers.
//!
//! Testable handlers invoked by `main.rs`; the binary parses arguments and
//! dispatches here.

mod compare;

pub use compare::{run_compare, CompareConfig};
