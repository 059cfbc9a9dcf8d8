//! Infrastructure Adapters

pub mod rules;
