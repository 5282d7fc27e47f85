//! Video Handler - 视频生成任务提交

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GenerationInput;
use crate::infrastructure::http::dto::{SubmitResponse, VideoRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 提交视频生成任务
pub async fn submit_video(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VideoRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let prompt = match req.prompt.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ApiError::bad_request("Prompt is required")),
    };

    let job = state
        .prediction_port
        .submit(GenerationInput::video(prompt))
        .await?;

    Ok(Json(job.into()))
}
