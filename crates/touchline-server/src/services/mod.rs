//! External Service Clients

pub mod openai;
