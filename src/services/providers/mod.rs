/// External text-generation providers
///
/// The recommendation logic lives entirely in a hosted language model. A
/// provider turns a prompt into the model's raw text output and nothing more;
/// parsing belongs to the recommendation client.
use crate::error::AppResult;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Trait for text-completion backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one prompt and returns the model's text
    ///
    /// The API key is only checked by the remote service, so an invalid key
    /// shows up here as an `ExternalApi` error.
    async fn generate(&self, api_key: &str, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
