//! Image Handlers - 分镜图像生成
//!
//! POST 提交任务，GET 按 id 查询状态。id 原样透传给上游，不做转换。

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::GenerationInput;
use crate::domain::panel_prompt;
use crate::infrastructure::http::dto::{PanelImageRequest, PollQuery, PollResponse, SubmitResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const PANEL_ASPECT_RATIO: &str = "1:1";
const PANEL_OUTPUT_QUALITY: u8 = 80;

/// 提交分镜图像任务
pub async fn submit_panel_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PanelImageRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let scene = match req.scene.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ApiError::bad_request("Scene is required")),
    };

    let prompt = panel_prompt(scene, req.character.as_deref(), req.brand.as_deref());
    let job = state
        .prediction_port
        .submit(GenerationInput::image(
            prompt,
            PANEL_ASPECT_RATIO,
            PANEL_OUTPUT_QUALITY,
        ))
        .await?;

    Ok(Json(job.into()))
}

/// 查询任务状态（所有图像/视频任务共用）
pub async fn poll_job(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PollQuery>,
) -> Result<Json<PollResponse>, ApiError> {
    let id = match query.id.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ApiError::bad_request("ID is required")),
    };

    let job = state.prediction_port.fetch(id).await?;
    Ok(Json(job.into()))
}
