//! Speech Port - 语音合成服务抽象
//!
//! 定义文本转语音的抽象接口，具体实现在 infrastructure/adapters 层。
//! 与预测服务不同，语音合成是单次同步调用，直接返回二进制音频。

use async_trait::async_trait;
use thiserror::Error;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
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

/// 语音合成请求
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 要合成的文本
    pub text: String,
    /// 音色 ID
    pub voice_id: String,
}

/// 语音合成响应
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// MPEG 音频数据
    pub audio_data: Vec<u8>,
    /// Content-Type（固定 audio/mpeg）
    pub content_type: &'static str,
}

/// Speech Port
///
/// 外部语音合成服务的抽象接口
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// 合成语音，返回二进制音频
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, SpeechError>;
}
