//! Valentine Image Handler - 回忆片段风格图像

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GenerationInput;
use crate::domain::valentine_prompt;
use crate::infrastructure::http::dto::{SubmitResponse, ValentineImageRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const VALENTINE_ASPECT_RATIO: &str = "16:9";
const VALENTINE_OUTPUT_QUALITY: u8 = 90;

/// 提交回忆片段图像任务
pub async fn submit_valentine_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValentineImageRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let scene = match req.scene.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ApiError::bad_request("Scene is required")),
    };

    let job = state
        .prediction_port
        .submit(GenerationInput::image(
            valentine_prompt(scene),
            VALENTINE_ASPECT_RATIO,
            VALENTINE_OUTPUT_QUALITY,
        ))
        .await?;

    Ok(Json(job.into()))
}
