//! ElevenLabs Client - 调用 ElevenLabs TTS 服务
//!
//! 实现 SpeechPort trait，通过 HTTP 调用 ElevenLabs 文本转语音服务
//!
//! 外部 API:
//! POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}
//! Request: {"text": "...", "model_id": "...", "voice_settings": {...}}  (JSON)
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechError, SpeechPort, SpeechRequest, SpeechResponse};

/// TTS 请求体 (JSON)
#[derive(Debug, Serialize)]
struct TtsHttpRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// 音色参数（固定值，与原始调用保持一致）
#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

/// ElevenLabs 客户端配置
#[derive(Debug, Clone)]
pub struct ElevenLabsClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API Key。为空时不做启动检查，调用时由服务端返回认证失败
    pub api_key: String,
    /// TTS 模型
    pub model_id: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ElevenLabsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.elevenlabs.io".to_string(),
            api_key: String::new(),
            model_id: "eleven_monolingual_v1".to_string(),
            timeout_secs: 120,
        }
    }
}

impl ElevenLabsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// ElevenLabs 客户端
pub struct ElevenLabsClient {
    client: Client,
    config: ElevenLabsClientConfig,
}

impl ElevenLabsClient {
    /// 创建新的 ElevenLabs 客户端
    pub fn new(config: ElevenLabsClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesize_url(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{}", self.config.base_url, voice_id)
    }
}

#[async_trait]
impl SpeechPort for ElevenLabsClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, SpeechError> {
        let http_request = TtsHttpRequest {
            text: &request.text,
            model_id: &self.config.model_id,
            voice_settings: VoiceSettings::default(),
        };

        tracing::debug!(
            voice_id = %request.voice_id,
            text_len = request.text.len(),
            "Sending TTS request"
        );

        let response = self
            .client
            .post(self.synthesize_url(&request.voice_id))
            .header("xi-api-key", &self.config.api_key)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    SpeechError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // 服务端错误文本只进日志，不透传
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), error = %error_text, "TTS service error");
            return Err(SpeechError::ServiceError {
                status: status.as_u16(),
            });
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            voice_id = %request.voice_id,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SpeechResponse {
            audio_data,
            content_type: "audio/mpeg",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ElevenLabsClientConfig::default();
        assert_eq!(config.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.model_id, "eleven_monolingual_v1");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_synthesize_url() {
        let client = ElevenLabsClient::new(ElevenLabsClientConfig::default()).unwrap();
        assert_eq!(
            client.synthesize_url("21m00Tcm4TlvDq8ikWAM"),
            "https://api.elevenlabs.io/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM"
        );
    }

    #[test]
    fn test_request_serialization() {
        let request = TtsHttpRequest {
            text: "hello",
            model_id: "eleven_monolingual_v1",
            voice_settings: VoiceSettings::default(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["text"], "hello");
        assert_eq!(value["model_id"], "eleven_monolingual_v1");
        assert_eq!(value["voice_settings"]["stability"], 0.5);
        assert_eq!(value["voice_settings"]["similarity_boost"], 0.75);
    }
}
