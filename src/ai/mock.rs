//! In-process stand-in for a model provider, used by tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{ImageModel, ProviderError, TextModel};

/// Status reported by scripted failures.
const MOCK_FAILURE_STATUS: u16 = 503;

const DEFAULT_TEXT_REPLY: &str =
    r#"{"title":"Mock post","content":"Mock content","tags":["mock"]}"#;

#[derive(Debug, Default)]
struct MockState {
    text_replies: VecDeque<Result<String, String>>,
    image_replies: VecDeque<Result<String, String>>,
    prompts: Vec<String>,
    call_count: usize,
}

/// Scripted text and image model.
///
/// Replies are handed out in the order they were queued. Once a queue is
/// empty, text calls echo a small valid post and image calls return a fixed
/// URL.
#[derive(Clone, Debug, Default)]
pub struct MockAiClient {
    state: Arc<Mutex<MockState>>,
}

impl MockAiClient {
    /// Creates a mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queues a raw text reply.
    pub fn with_text_reply(self, reply: &str) -> Self {
        self.state().text_replies.push_back(Ok(reply.to_string()));
        self
    }

    /// Queues a failed text call.
    pub fn with_text_failure(self, message: &str) -> Self {
        self.state()
            .text_replies
            .push_back(Err(message.to_string()));
        self
    }

    /// Queues an image URL.
    pub fn with_image_url(self, url: &str) -> Self {
        self.state().image_replies.push_back(Ok(url.to_string()));
        self
    }

    /// Queues a failed image call.
    pub fn with_image_failure(self, message: &str) -> Self {
        self.state()
            .image_replies
            .push_back(Err(message.to_string()));
        self
    }

    /// Number of provider calls made so far, text and image combined.
    pub fn call_count(&self) -> usize {
        self.state().call_count
    }

    /// Every prompt received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.state().prompts.clone()
    }

    fn record(&self, prompt: &str) -> MutexGuard<'_, MockState> {
        let mut state = self.state();
        state.call_count += 1;
        state.prompts.push(prompt.to_string());
        state
    }
}

fn scripted(reply: Result<String, String>) -> Result<String, ProviderError> {
    reply.map_err(|body| ProviderError::Api {
        status: MOCK_FAILURE_STATUS,
        body,
    })
}

#[async_trait]
impl TextModel for MockAiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        let next = self.record(prompt).text_replies.pop_front();
        match next {
            Some(reply) => scripted(reply),
            None => Ok(DEFAULT_TEXT_REPLY.to_string()),
        }
    }
}

#[async_trait]
impl ImageModel for MockAiClient {
    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError> {
        let next = self.record(prompt).image_replies.pop_front();
        match next {
            Some(reply) => scripted(reply),
            None => Ok("https://images.example/mock.png".to_string()),
        }
    }
}
