//! Touchline HTTP Routes
//!
//! - GET /       - chat page
//! - POST /chat  - one chat turn: validate, complete, format

pub mod chat;
