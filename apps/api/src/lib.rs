//! Advocate API - relays chat messages from the interactive resume website
//! to the Anthropic Messages API under a fixed persona prompt.

pub mod chat;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod routes;
pub mod state;
