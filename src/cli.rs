//! CLI parser
use clap::Parser;
use std::num::NonZeroU16;
use url::Url;

use crate::constants::{DEFAULT_IMAGE_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_TEXT_MODEL};

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "CLOUDBLOG_DEBUG")]
    /// Enable debug logging. Env: CLOUDBLOG_DEBUG
    pub debug: bool,
    #[clap(long, short, default_value = "3000", env = "CLOUDBLOG_PORT")]
    /// http listener, defaults to `3000`.
    /// Env: CLOUDBLOG_PORT
    pub port: NonZeroU16,
    #[clap(
        long,
        short,
        default_value = "127.0.0.1",
        env = "CLOUDBLOG_LISTEN_ADDRESS"
    )]
    /// Listen address, defaults to `127.0.0.1`.
    /// Env: CLOUDBLOG_LISTEN_ADDRESS
    pub listen_address: String,

    #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    /// OpenAI API key. Requests fail until one is set.
    /// Env: OPENAI_API_KEY
    pub openai_api_key: Option<String>,

    #[clap(long, default_value = DEFAULT_OPENAI_BASE_URL, env = "OPENAI_BASE_URL")]
    /// Root of the OpenAI-compatible API.
    /// Env: OPENAI_BASE_URL
    pub openai_base_url: Url,

    #[clap(long, default_value = DEFAULT_TEXT_MODEL, env = "CLOUDBLOG_TEXT_MODEL")]
    /// Model that writes the posts.
    /// Env: CLOUDBLOG_TEXT_MODEL
    pub text_model: String,

    #[clap(long, default_value = DEFAULT_IMAGE_MODEL, env = "CLOUDBLOG_IMAGE_MODEL")]
    /// Model that draws the illustrations.
    /// Env: CLOUDBLOG_IMAGE_MODEL
    pub image_model: String,
}
