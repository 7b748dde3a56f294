//! Server Command Wrappers
//!
//! Frontend bindings to the to-do server's task endpoints.

mod task;

pub use task::*;
