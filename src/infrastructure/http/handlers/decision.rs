//! Decision Image Handler - 决策场景图像
//!
//! 只接受固定决策表中的键，未知键同样返回 400。

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GenerationInput;
use crate::domain::decision_prompt;
use crate::infrastructure::http::dto::{DecisionImageRequest, SubmitResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const DECISION_ASPECT_RATIO: &str = "1:1";
const DECISION_OUTPUT_QUALITY: u8 = 90;

/// 提交决策场景图像任务
pub async fn submit_decision_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DecisionImageRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let prompt = req
        .decision
        .as_deref()
        .map(str::trim)
        .and_then(decision_prompt)
        .ok_or_else(|| ApiError::bad_request("Valid decision is required"))?;

    let job = state
        .prediction_port
        .submit(GenerationInput::image(
            prompt,
            DECISION_ASPECT_RATIO,
            DECISION_OUTPUT_QUALITY,
        ))
        .await?;

    Ok(Json(job.into()))
}
