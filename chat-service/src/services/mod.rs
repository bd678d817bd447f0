pub mod providers;

pub use providers::bedrock::BedrockTextProvider;
pub use providers::mock::MockTextProvider;
pub use providers::{ProviderError, TextGenerationService};
