//! Voice Handler - 旁白语音合成
//!
//! 根据角色名选择预设音色，返回二进制音频。

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::application::SpeechRequest;
use crate::domain::select_voice;
use crate::infrastructure::http::dto::VoiceRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 合成旁白语音
pub async fn synthesize_voice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VoiceRequest>,
) -> Result<Response, ApiError> {
    let text = match req.text.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ApiError::bad_request("Text is required")),
    };

    let preset = select_voice(req.character.as_deref());
    debug!(voice = preset.as_str(), "voice preset selected");

    let result = state
        .speech_port
        .synthesize(SpeechRequest {
            text: text.to_string(),
            voice_id: preset.voice_id().to_string(),
        })
        .await?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(header::CONTENT_LENGTH, result.audio_data.len())
        .body(Body::from(result.audio_data))
        .unwrap())
}
