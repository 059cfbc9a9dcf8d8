//! Domain Layer
//!
//! Error taxonomy and value objects shared across the workspace.

pub mod errors;
pub mod rules_policy;

pub use errors::{ChatError, RulesError};
pub use rules_policy::RulesPolicy;
