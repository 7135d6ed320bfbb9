//! Type definitions module.
//!
//! Contains shared types used across the crate.

pub mod invocation;
pub mod network;
pub mod options;

pub use invocation::*;
pub use network::*;
pub use options::*;
