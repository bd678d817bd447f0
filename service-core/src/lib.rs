//! service-core: Shared infrastructure for the chat Lambda functions.
pub mod config;
pub mod error;
pub mod observability;
