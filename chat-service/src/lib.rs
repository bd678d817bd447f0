//! chat-service: Lambda function that forwards a user message to a hosted
//! Bedrock text model and returns the generated text.

pub mod config;
pub mod handler;
pub mod models;
pub mod services;
pub mod startup;
