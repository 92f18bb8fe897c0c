//! Hosted model providers.
//!
//! The gateway only sees the [`TextModel`] and [`ImageModel`] traits, so the
//! OpenAI client can be swapped for [`mock::MockAiClient`] in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use mock::MockAiClient;
pub use openai::OpenAiClient;

/// Failures talking to a model provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No credential was configured for the provider.
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    /// The request could not be sent or the body could not be read.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("OpenAI API error (status {status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body as returned.
        body: String,
    },
    /// The provider's response decoded but carried nothing usable.
    #[error("OpenAI returned no {0}")]
    EmptyReply(&'static str),
    /// Returned image data was not valid base64.
    #[error("Failed to decode image data: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Produces text for a prompt.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Sends one prompt and returns the raw reply text.
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Produces an image for a prompt.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Returns a URL (hosted or `data:`) for the generated image.
    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError>;
}
