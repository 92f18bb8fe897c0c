//! Turns a topic into a validated blog post, and a prompt into an illustration.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::ai::{ImageModel, TextModel};
use crate::constants::{EXCERPT_CHARS, PROMPT_REQUIRED, TOPIC_REQUIRED};
use crate::error::{GenerationError, MalformedResponse};
use crate::models::BlogPost;
use crate::prompts::PromptSpec;
use crate::sanitize::{excerpt, extract_json};

/// Trims optional caller input, treating blank as missing.
fn required<'a>(
    input: Option<&'a str>,
    message: &'static str,
) -> Result<&'a str, GenerationError> {
    match input.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(GenerationError::InvalidRequest(message)),
    }
}

/// Checks a sanitized reply against the blog post schema.
///
/// Extra fields are ignored; missing or mistyped fields and a blank title or
/// body are rejected. Any `imageUrl` the model invents is dropped.
pub fn validate_post(value: Value) -> Result<BlogPost, MalformedResponse> {
    let snippet = excerpt(&value.to_string(), EXCERPT_CHARS);
    let schema_error = |reason: String| MalformedResponse::Schema {
        reason,
        excerpt: snippet.clone(),
    };

    let mut post: BlogPost =
        serde_json::from_value(value).map_err(|err| schema_error(err.to_string()))?;
    if post.title.trim().is_empty() {
        return Err(schema_error("title is empty".to_string()));
    }
    if post.content.trim().is_empty() {
        return Err(schema_error("content is empty".to_string()));
    }
    post.image_url = None;
    Ok(post)
}

/// Front door to the hosted models.
///
/// Holds no per-request state, so one instance is shared by every request.
#[derive(Clone)]
pub struct BlogGateway {
    text_model: Arc<dyn TextModel>,
    image_model: Arc<dyn ImageModel>,
    prompt: PromptSpec,
}

impl BlogGateway {
    /// Creates a gateway using the default prompt settings.
    pub fn new(text_model: Arc<dyn TextModel>, image_model: Arc<dyn ImageModel>) -> Self {
        Self {
            text_model,
            image_model,
            prompt: PromptSpec::default(),
        }
    }

    /// Replaces the prompt settings.
    pub fn with_prompt(mut self, prompt: PromptSpec) -> Self {
        self.prompt = prompt;
        self
    }

    /// The prompt that would be sent for a topic.
    pub fn prompt_for(&self, topic: &str) -> String {
        self.prompt.render(topic)
    }

    /// Writes a blog post about `topic`.
    ///
    /// A missing or blank topic fails before the model is called.
    pub async fn generate_post(&self, topic: Option<&str>) -> Result<BlogPost, GenerationError> {
        let topic = required(topic, TOPIC_REQUIRED)?;
        info!("Generating blog post about {:?}", topic);

        let raw = self.text_model.generate_text(&self.prompt_for(topic)).await?;
        debug!("Raw AI response: {}", raw);

        let value = extract_json(&raw)?;
        Ok(validate_post(value)?)
    }

    /// Generates an illustration and returns its URL.
    pub async fn generate_image(&self, prompt: Option<&str>) -> Result<String, GenerationError> {
        let prompt = required(prompt, PROMPT_REQUIRED)?;
        info!("Generating image for {:?}", prompt);
        Ok(self.image_model.generate_image(prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MockAiClient, ProviderError};
    use crate::prompts::JSON_ONLY_DIRECTIVE;
    use crate::sanitize::SanitizeError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn gateway(mock: &MockAiClient) -> BlogGateway {
        BlogGateway::new(Arc::new(mock.clone()), Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn fenced_reply_becomes_post() {
        let mock = MockAiClient::new().with_text_reply(
            "```json\n{\"title\":\"T\",\"content\":\"C\",\"tags\":[\"a\",\"b\"]}\n```",
        );
        let post = gateway(&mock)
            .generate_post(Some("Kubernetes Security"))
            .await
            .expect("post");

        assert_eq!(
            post,
            BlogPost {
                title: "T".to_string(),
                content: "C".to_string(),
                tags: vec!["a".to_string(), "b".to_string()],
                image_url: None,
            }
        );
        let prompts = mock.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Kubernetes Security"));
        assert!(prompts[0].contains(JSON_ONLY_DIRECTIVE));
    }

    #[tokio::test]
    async fn topic_is_trimmed_before_prompting() {
        let mock = MockAiClient::new();
        gateway(&mock)
            .generate_post(Some("  Serverless  \n"))
            .await
            .expect("post");
        assert!(mock.prompts()[0].contains("\"Serverless\""));
    }

    #[tokio::test]
    async fn missing_or_blank_topic_never_calls_upstream() {
        let mock = MockAiClient::new();
        let gateway = gateway(&mock);
        for topic in [None, Some(""), Some("   ")] {
            let err = gateway.generate_post(topic).await.unwrap_err();
            assert!(matches!(err, GenerationError::InvalidRequest(TOPIC_REQUIRED)));
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_failure_is_upstream_error() {
        let mock = MockAiClient::new().with_text_failure("quota exceeded");
        let err = gateway(&mock).generate_post(Some("FinOps")).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::UpstreamError(ProviderError::Api { .. })
        ));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn prose_reply_is_malformed() {
        let mock = MockAiClient::new().with_text_reply("I cannot write about that.");
        let err = gateway(&mock).generate_post(Some("FinOps")).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::MalformedResponse(MalformedResponse::Sanitize(
                SanitizeError::NotJson { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn json_missing_fields_is_rejected() {
        let mock = MockAiClient::new().with_text_reply("{\"title\": \"Only a title\"}");
        let err = gateway(&mock).generate_post(Some("FinOps")).await.unwrap_err();
        match err {
            GenerationError::MalformedResponse(MalformedResponse::Schema { reason, excerpt }) => {
                assert!(reason.contains("content"), "reason was {reason}");
                assert!(excerpt.contains("Only a title"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn mistyped_tags_are_rejected() {
        let err = validate_post(json!({"title": "T", "content": "C", "tags": "a,b"})).unwrap_err();
        assert!(matches!(err, MalformedResponse::Schema { .. }));
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = validate_post(json!({"title": " ", "content": "C", "tags": []})).unwrap_err();
        match err {
            MalformedResponse::Schema { reason, .. } => assert_eq!(reason, "title is empty"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn extra_fields_pass_and_model_image_is_dropped() {
        let post = validate_post(json!({
            "title": "T",
            "content": "C",
            "tags": [],
            "summary": "ignored",
            "imageUrl": "https://made.up/img.png"
        }))
        .expect("valid post");
        assert_eq!(post.image_url, None);
    }

    #[tokio::test]
    async fn custom_prompt_spec_is_used() {
        let mock = MockAiClient::new();
        let gateway = gateway(&mock).with_prompt(PromptSpec {
            target_language: "English".to_string(),
            ..PromptSpec::default()
        });
        gateway.generate_post(Some("IaC")).await.expect("post");
        assert!(mock.prompts()[0].contains("- Write in English language"));
    }

    #[tokio::test]
    async fn image_prompt_is_required() {
        let mock = MockAiClient::new();
        let err = gateway(&mock).generate_image(Some(" ")).await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidRequest(PROMPT_REQUIRED)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn image_url_is_returned() {
        let mock = MockAiClient::new().with_image_url("https://img.example/a.png");
        let url = gateway(&mock)
            .generate_image(Some("Professional illustration"))
            .await
            .expect("image");
        assert_eq!(url, "https://img.example/a.png");
        assert_eq!(mock.prompts(), vec!["Professional illustration"]);
    }

    #[tokio::test]
    async fn image_failure_is_upstream_error() {
        let mock = MockAiClient::new().with_image_failure("content policy");
        let err = gateway(&mock).generate_image(Some("x")).await.unwrap_err();
        assert!(matches!(err, GenerationError::UpstreamError(_)));
    }
}
