//! Touchline Domain Library
//!
//! Core types and logic for the Touchline league-chat service.
//!
//! # Architecture
//!
//! The request pipeline is a straight line:
//!
//! validation (`validate`) -> completion call (`ports::CompletionProvider`)
//! -> formatting (`format`)
//!
//! with the system instruction (`instructions`) assembled once at startup
//! from the rules document and shared read-only by every request.
//!
//! - **Domain Layer** (`domain/`): error taxonomy and the rules-load policy
//! - **Ports** (`ports/`): the completion-service interface implemented
//!   by the server crate and mocked in tests
//!
//! This crate performs no I/O; the HTTP surface, the OpenAI adapter, and
//! the rules-document loader live in `touchline-server`.

pub mod domain;
pub mod format;
pub mod instructions;
pub mod ports;
pub mod validate;

// Re-export commonly used types
pub use domain::{ChatError, RulesError, RulesPolicy};
pub use ports::{CompletionProvider, Tool};
