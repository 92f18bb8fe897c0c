pub(crate) use crate::constants::{BLOG_FAILURE, IMAGE_FAILURE};
pub(crate) use crate::error::ApiError;
pub(crate) use crate::web::AppState;
pub(crate) use askama::Template;
pub(crate) use askama_web::WebTemplate;
pub(crate) use axum::Json;
pub(crate) use axum::extract::State;
pub(crate) use tracing::debug;
