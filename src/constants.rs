//! Shared constants/setters for things
//!

use std::sync::LazyLock;

/// Default OpenAI API root, including the version segment like the official
/// SDKs' `OPENAI_BASE_URL`.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Text model used to write posts.
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o";

/// Image model used to illustrate posts.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Size requested from the image model.
pub const IMAGE_SIZE: &str = "1024x1024";

/// Language the post is written in.
pub const TARGET_LANGUAGE: &str = "Mongolian";

/// Subject area every topic is framed in.
pub const TOPIC_CONTEXT: &str = "cloud technology";

/// Inclusive word count range requested from the model.
pub const WORD_RANGE: (u32, u32) = (800, 1200);

/// How many characters of an unusable reply are kept for diagnostics.
pub const EXCERPT_CHARS: usize = 100;

/// Error message for a blog request without a topic.
pub const TOPIC_REQUIRED: &str = "Topic is required";

/// Error message for an image request without a prompt.
pub const PROMPT_REQUIRED: &str = "Prompt is required";

/// Summary returned when blog generation fails.
pub const BLOG_FAILURE: &str = "Failed to generate blog post";

/// Summary returned when image generation fails.
pub const IMAGE_FAILURE: &str = "Failed to generate image";

/// Max age (in seconds) for bundled static assets.
pub const STATIC_CACHE_MAX_AGE_SECONDS: u64 = 60 * 60;

/// Cache-Control value for static asset responses.
pub static STATIC_CACHE_CONTROL: LazyLock<String> =
    LazyLock::new(|| format!("public, max-age={}", STATIC_CACHE_MAX_AGE_SECONDS));
