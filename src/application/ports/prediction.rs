//! Prediction Port - 生成预测服务抽象
//!
//! 定义图像/视频生成服务（异步预测 API）的抽象接口，
//! 具体实现在 infrastructure/adapters 层。
//!
//! 外部预测 API 形态:
//! POST {base}/v1/models/{model}/predictions  提交 → {id, status}
//! GET  {base}/v1/predictions/{id}            查询 → {id, status, output, error}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 生成服务错误
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 服务端返回非 2xx。原始错误文本只记录日志，不透传给调用方
    #[error("Service error: HTTP {status}")]
    ServiceError { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 任务状态（与预测服务的状态字符串一一对应）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// 已提交，等待启动
    Starting,
    /// 生成中
    Processing,
    /// 成功
    Succeeded,
    /// 失败
    Failed,
    /// 已取消
    Canceled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Starting => "starting",
            JobStatus::Processing => "processing",
            JobStatus::Succeeded => "succeeded",
            JobStatus::Failed => "failed",
            JobStatus::Canceled => "canceled",
        }
    }

    /// 解析服务端状态字符串。未知状态按 processing 处理（非终态，
    /// 由轮询次数上限兜底）
    pub fn from_provider(s: &str) -> Self {
        match s {
            "starting" => JobStatus::Starting,
            "processing" => JobStatus::Processing,
            "succeeded" => JobStatus::Succeeded,
            "failed" => JobStatus::Failed,
            "canceled" => JobStatus::Canceled,
            _ => JobStatus::Processing,
        }
    }

    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded | JobStatus::Failed | JobStatus::Canceled
        )
    }
}

/// 生成任务
///
/// id 为服务端分配的不透明标识，查询时原样传回，不做任何转换。
/// 任务不落盘，消费后即丢弃。
#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    /// 生成结果 URL（终态成功时出现）
    pub output: Option<String>,
    /// 服务端错误描述（终态失败时出现）
    pub error: Option<String>,
}

/// 图像生成输入
#[derive(Debug, Clone, Serialize)]
pub struct ImageInput {
    pub prompt: String,
    /// 画幅比例，如 "1:1"、"16:9"
    pub aspect_ratio: String,
    /// 输出质量 (0-100)
    pub output_quality: u8,
}

/// 视频生成输入
#[derive(Debug, Clone, Serialize)]
pub struct VideoInput {
    pub prompt: String,
}

/// 生成请求输入
#[derive(Debug, Clone)]
pub enum GenerationInput {
    Image(ImageInput),
    Video(VideoInput),
}

impl GenerationInput {
    /// 构建图像输入
    pub fn image(prompt: impl Into<String>, aspect_ratio: impl Into<String>, output_quality: u8) -> Self {
        GenerationInput::Image(ImageInput {
            prompt: prompt.into(),
            aspect_ratio: aspect_ratio.into(),
            output_quality,
        })
    }

    /// 构建视频输入
    pub fn video(prompt: impl Into<String>) -> Self {
        GenerationInput::Video(VideoInput {
            prompt: prompt.into(),
        })
    }

    pub fn prompt(&self) -> &str {
        match self {
            GenerationInput::Image(input) => &input.prompt,
            GenerationInput::Video(input) => &input.prompt,
        }
    }
}

/// Prediction Port
///
/// 外部生成预测服务的抽象接口
#[async_trait]
pub trait PredictionPort: Send + Sync {
    /// 提交生成任务，返回服务端分配的任务
    async fn submit(&self, input: GenerationInput) -> Result<Job, ProviderError>;

    /// 按 id 查询任务状态
    async fn fetch(&self, id: &str) -> Result<Job, ProviderError>;
}
