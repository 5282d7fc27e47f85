//! Fake Speech Client - 用于测试的语音客户端
//!
//! 始终返回固定的音频字节，不实际调用 TTS 服务，并记录所有请求
//! 供测试断言音色选择等行为。

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SpeechError, SpeechPort, SpeechRequest, SpeechResponse};

/// Fake Speech Client 配置
#[derive(Debug, Clone)]
pub struct FakeSpeechClientConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
    /// 是否模拟服务端失败
    pub fail: bool,
}

impl Default for FakeSpeechClientConfig {
    fn default() -> Self {
        Self {
            // 伪 MPEG 帧头，足够测试二进制透传
            audio_data: vec![0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00],
            fail: false,
        }
    }
}

/// Fake Speech Client
pub struct FakeSpeechClient {
    config: FakeSpeechClientConfig,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl FakeSpeechClient {
    pub fn new(config: FakeSpeechClientConfig) -> Self {
        Self {
            config,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeSpeechClientConfig::default())
    }

    /// 模拟始终失败的客户端
    pub fn failing() -> Self {
        Self::new(FakeSpeechClientConfig {
            fail: true,
            ..Default::default()
        })
    }

    /// 所有收到的请求（按调用顺序）
    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechPort for FakeSpeechClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, SpeechError> {
        self.requests.lock().unwrap().push(request);

        if self.config.fail {
            return Err(SpeechError::ServiceError { status: 500 });
        }

        Ok(SpeechResponse {
            audio_data: self.config.audio_data.clone(),
            content_type: "audio/mpeg",
        })
    }
}
