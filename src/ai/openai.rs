//! OpenAI chat completions and image generations over plain HTTP.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::{ImageModel, ProviderError, TextModel};
use crate::constants::{
    DEFAULT_IMAGE_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_TEXT_MODEL, IMAGE_SIZE,
};

// -----------------------------
// Chat completions (text)
// -----------------------------

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

// -----------------------------
// Images API
// -----------------------------

/// Format requested from GPT image models, which always answer in base64.
const GPT_IMAGE_FORMAT: &str = "png";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Request body for POST {base}/images/generations
#[derive(Serialize, Debug)]
struct ImagesGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,

    // For GPT image models.
    #[serde(skip_serializing_if = "Option::is_none")]
    quality: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    output_format: Option<&'a str>,

    // For dall-e models.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'a str>,
}

impl<'a> ImagesGenerateRequest<'a> {
    fn for_model(model: &'a str, prompt: &'a str) -> Self {
        // GPT image models always answer in base64; dall-e models can hand back a hosted URL.
        let base = Self {
            model,
            prompt,
            n: 1,
            size: IMAGE_SIZE,
            quality: None,
            output_format: None,
            response_format: None,
            style: None,
        };
        if model.starts_with("gpt-image") {
            Self {
                quality: Some("high"),
                output_format: Some(GPT_IMAGE_FORMAT),
                ..base
            }
        } else if model == "dall-e-3" {
            Self {
                quality: Some("hd"),
                response_format: Some("url"),
                style: Some("natural"),
                ..base
            }
        } else {
            Self {
                response_format: Some("url"),
                ..base
            }
        }
    }
}

#[derive(Deserialize, Debug)]
struct ImagesGenerateResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize, Debug)]
struct ImageData {
    b64_json: Option<String>,
    url: Option<String>,
    revised_prompt: Option<String>,
}

/// Client for the OpenAI HTTP API.
///
/// The API key is only checked when a request is made, so a server started
/// without one still serves pages and reports the problem per request.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl OpenAiClient {
    /// Creates a client against the public endpoint with the default models.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Points the client at another API root, eg a proxy or a test server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the model used for chat completions.
    pub fn with_text_model(mut self, model: &str) -> Self {
        self.text_model = model.to_string();
        self
    }

    /// Overrides the model used for image generation.
    pub fn with_image_model(mut self, model: &str) -> Self {
        self.image_model = model.to_string();
        self
    }

    async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                error!("Request to {} failed: {}", path, err);
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!("OpenAI API error on {} (status {}): {}", path, status, body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TextModel for OpenAiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!("Sending chat completion request with model {}", self.text_model);
        let request = ChatCompletionRequest {
            model: &self.text_model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response: ChatCompletionResponse =
            self.post("/chat/completions", &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyReply("completion"))
    }
}

#[async_trait]
impl ImageModel for OpenAiClient {
    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!("Sending image generation request with model {}", self.image_model);
        let request = ImagesGenerateRequest::for_model(&self.image_model, prompt);

        let response: ImagesGenerateResponse =
            self.post("/images/generations", &request).await?;

        let first = response
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyReply("image data"))?;

        if let Some(revised_prompt) = first.revised_prompt {
            info!("Revised prompt from OpenAI: {}", revised_prompt);
        }

        if let Some(url) = first.url {
            Ok(url)
        } else if let Some(b64_json) = first.b64_json {
            png_data_url(b64_json)
        } else {
            Err(ProviderError::EmptyReply("image URL or base64 data"))
        }
    }
}

/// Wraps base64 PNG data from a GPT image model in a `data:` URL.
///
/// The payload is decoded once so corrupt data fails here rather than in the
/// browser.
fn png_data_url(b64_json: String) -> Result<String, ProviderError> {
    let bytes = general_purpose::STANDARD.decode(&b64_json)?;
    if !bytes.starts_with(&PNG_SIGNATURE) {
        warn!(
            "Image data ({} bytes) lacks the PNG signature, labelling it image/{} anyway",
            bytes.len(),
            GPT_IMAGE_FORMAT
        );
    }
    Ok(format!("data:image/{GPT_IMAGE_FORMAT};base64,{b64_json}"))
}
