use axum::extract::rejection::JsonRejection;

use super::prelude::*;
use crate::models::{BlogPost, GenerationRequest, ImageRequest, ImageResponse};

/// handles the /api/generate-blog POST
///
/// A body that is not a JSON object with a string `topic` counts as having
/// no topic.
pub(crate) async fn generate_blog_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<BlogPost>, ApiError> {
    let request = payload
        .map(|Json(request)| request)
        .unwrap_or_else(|rejection| {
            debug!("Unreadable blog request body: {}", rejection);
            GenerationRequest::default()
        });

    state
        .gateway
        .generate_post(request.topic.as_deref())
        .await
        .map(Json)
        .map_err(|err| ApiError::new(BLOG_FAILURE, err))
}

/// handles the /api/generate-image POST
pub(crate) async fn generate_image_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    let request = payload
        .map(|Json(request)| request)
        .unwrap_or_else(|rejection| {
            debug!("Unreadable image request body: {}", rejection);
            ImageRequest::default()
        });

    state
        .gateway
        .generate_image(request.prompt.as_deref())
        .await
        .map(|image_url| Json(ImageResponse { image_url }))
        .map_err(|err| ApiError::new(IMAGE_FAILURE, err))
}
