//! Workflow Handlers - 组合式生成流程
//!
//! 每个请求独立创建取消令牌；连接断开由 axum 丢弃 future 处理，
//! 令牌保留给上层需要主动取消的场景。

use axum::{extract::State, Json};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::application::{
    GenerateAdCommand, GenerateReelCommand, GenerateStoryboardCommand, GenerateTiktokCommand,
};
use crate::infrastructure::http::dto::{
    GenerateAdRequest, GenerateAdResponseDto, GenerateReelRequest, GenerateReelResponseDto,
    GenerateStoryboardRequest, GenerateStoryboardResponseDto, GenerateTiktokResponseDto,
    SceneResultDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 生成 9 格分镜
pub async fn generate_storyboard(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateStoryboardRequest>,
) -> Result<Json<GenerateStoryboardResponseDto>, ApiError> {
    let cancel = CancellationToken::new();
    let result = state
        .storyboard_handler
        .handle(
            GenerateStoryboardCommand {
                character: req.character,
                brand: req.brand,
                panels: req.panels,
            },
            &cancel,
        )
        .await?;

    Ok(Json(GenerateStoryboardResponseDto {
        panels: result.panels,
    }))
}

/// 生成场景卷
pub async fn generate_reel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateReelRequest>,
) -> Result<Json<GenerateReelResponseDto>, ApiError> {
    let cancel = CancellationToken::new();
    let result = state
        .reel_handler
        .handle(GenerateReelCommand { scenes: req.scenes }, &cancel)
        .await?;

    Ok(Json(GenerateReelResponseDto {
        scenes: result
            .scenes
            .into_iter()
            .map(|s| SceneResultDto {
                description: s.description,
                images: s.images,
            })
            .collect(),
    }))
}

/// 生成完整广告
pub async fn generate_ad(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateAdRequest>,
) -> Result<Json<GenerateAdResponseDto>, ApiError> {
    let cancel = CancellationToken::new();
    let result = state
        .ad_handler
        .handle(
            GenerateAdCommand {
                brand: req.brand.unwrap_or_default(),
                character: req.character.unwrap_or_default(),
                slogan: req.slogan.unwrap_or_default(),
                panels: req.panels,
            },
            &cancel,
        )
        .await?;

    Ok(Json(GenerateAdResponseDto {
        panels: result.panels,
        script: result.script,
        video: result.video,
        generated_at: result.generated_at,
    }))
}

/// 生成 TikTok 反应视频
pub async fn generate_tiktok(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateAdRequest>,
) -> Result<Json<GenerateTiktokResponseDto>, ApiError> {
    let cancel = CancellationToken::new();
    let result = state
        .tiktok_handler
        .handle(
            GenerateTiktokCommand {
                brand: req.brand.unwrap_or_default(),
                character: req.character.unwrap_or_default(),
                slogan: req.slogan.unwrap_or_default(),
                panels: req.panels,
            },
            &cancel,
        )
        .await?;

    Ok(Json(GenerateTiktokResponseDto {
        script: result.script,
        video: result.video,
        generated_at: result.generated_at,
    }))
}
