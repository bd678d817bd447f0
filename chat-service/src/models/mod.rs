//! Wire types for the chat Lambda function.

pub mod event;
pub mod generation;
pub mod response;

pub use event::InvocationEvent;
pub use generation::{GenerationOutput, GenerationRequest, GenerationResult, TextGenerationConfig};
pub use response::Response;
