//! Request and response bodies exchanged with the browser.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate-blog`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenerationRequest {
    /// Subject of the post, trimmed before use.
    #[serde(default)]
    pub topic: Option<String>,
}

/// A generated blog post.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct BlogPost {
    /// Post title.
    pub title: String,
    /// Post body, paragraphs separated by blank lines.
    pub content: String,
    /// Short keyword tags.
    pub tags: Vec<String>,
    /// Illustration, merged in by the client after a separate image request.
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

/// Body of `POST /api/generate-image`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ImageRequest {
    /// Description of the picture to draw.
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Successful response from `POST /api/generate-image`.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct ImageResponse {
    /// Hosted or `data:` URL of the generated image.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// JSON error body returned by the API endpoints.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct ErrorBody {
    /// Fixed, user-facing summary.
    pub error: String,
    /// Underlying failure, for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
