//! Ports (Interfaces)
//!
//! Abstract interfaces for external services. Implementations live in
//! the server crate; tests substitute mocks.

pub mod completion;

pub use completion::*;
