//! Data Transfer Objects - HTTP 请求/响应结构
//!
//! 提交响应固定为 {id, status}，查询响应固定为 {id, status, output, error}，
//! 与上游预测服务的任务表示一一对应，id 不做任何转换。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::Job;

// ============================================================================
// 任务提交 / 查询
// ============================================================================

/// 提交成功响应
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: String,
    pub status: &'static str,
}

impl From<Job> for SubmitResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            status: job.status.as_str(),
        }
    }
}

/// 查询响应
#[derive(Debug, Serialize)]
pub struct PollResponse {
    pub id: String,
    pub status: &'static str,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl From<Job> for PollResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            status: job.status.as_str(),
            output: job.output,
            error: job.error,
        }
    }
}

/// 查询参数: ?id=...
#[derive(Debug, Deserialize)]
pub struct PollQuery {
    pub id: Option<String>,
}

// ============================================================================
// 单任务提交请求
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PanelImageRequest {
    pub scene: Option<String>,
    pub character: Option<String>,
    pub brand: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DecisionImageRequest {
    pub decision: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValentineImageRequest {
    pub scene: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VoiceRequest {
    pub text: Option<String>,
    pub character: Option<String>,
}

// ============================================================================
// 组合流程请求 / 响应
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateStoryboardRequest {
    pub character: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub panels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateStoryboardResponseDto {
    pub panels: Vec<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateReelRequest {
    #[serde(default)]
    pub scenes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SceneResultDto {
    pub description: String,
    pub images: Vec<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReelResponseDto {
    pub scenes: Vec<SceneResultDto>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateAdRequest {
    pub brand: Option<String>,
    pub character: Option<String>,
    pub slogan: Option<String>,
    #[serde(default)]
    pub panels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateAdResponseDto {
    pub panels: Vec<Option<String>>,
    pub script: String,
    pub video: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct GenerateTiktokResponseDto {
    pub script: String,
    pub video: Option<String>,
    pub generated_at: DateTime<Utc>,
}
