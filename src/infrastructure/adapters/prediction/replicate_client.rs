//! Replicate Client - 调用 Replicate 预测 API
//!
//! 实现 PredictionPort trait，通过 HTTP 调用 Replicate 异步预测服务
//!
//! 外部 API:
//! POST https://api.replicate.com/v1/models/{model}/predictions
//! Request: {"input": {...}}  (JSON, Bearer token)
//! Response: {"id": "...", "status": "starting", ...}
//! GET https://api.replicate.com/v1/predictions/{id}
//! Response: {"id": "...", "status": "...", "output": ..., "error": ...}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{
    GenerationInput, ImageInput, Job, JobStatus, PredictionPort, ProviderError, VideoInput,
};

/// 图像模型请求体
#[derive(Debug, Serialize)]
struct ImageModelInput<'a> {
    prompt: &'a str,
    aspect_ratio: &'a str,
    output_format: &'static str,
    output_quality: u8,
}

/// 视频模型请求体
#[derive(Debug, Serialize)]
struct VideoModelInput<'a> {
    prompt: &'a str,
    prompt_optimizer: bool,
}

#[derive(Debug, Serialize)]
struct PredictionRequest<T: Serialize> {
    input: T,
}

/// 服务端预测响应
#[derive(Debug, Deserialize)]
struct PredictionResponse {
    id: String,
    status: String,
    #[serde(default)]
    output: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Replicate 客户端配置
#[derive(Debug, Clone)]
pub struct ReplicateClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API Token。为空时不做启动检查，调用时由服务端返回认证失败
    pub api_token: String,
    /// 图像模型
    pub image_model: String,
    /// 视频模型
    pub video_model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ReplicateClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.replicate.com".to_string(),
            api_token: String::new(),
            image_model: "black-forest-labs/flux-schnell".to_string(),
            video_model: "minimax/video-01".to_string(),
            timeout_secs: 60,
        }
    }
}

impl ReplicateClientConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Replicate 客户端
pub struct ReplicateClient {
    client: Client,
    config: ReplicateClientConfig,
}

impl ReplicateClient {
    /// 创建新的 Replicate 客户端
    pub fn new(config: ReplicateClientConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取模型提交 URL
    fn submit_url(&self, model: &str) -> String {
        format!("{}/v1/models/{}/predictions", self.config.base_url, model)
    }

    /// 获取任务查询 URL
    fn fetch_url(&self, id: &str) -> String {
        format!("{}/v1/predictions/{}", self.config.base_url, id)
    }

    fn map_transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_connect() {
            ProviderError::NetworkError(format!("Cannot connect to prediction service: {}", e))
        } else {
            ProviderError::NetworkError(e.to_string())
        }
    }

    /// 非 2xx 响应: 记录服务端错误文本，只向调用方返回状态码
    async fn map_status_error(response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!(status, error = %error_text, "Prediction service error");
        ProviderError::ServiceError { status }
    }

    async fn post_prediction<T: Serialize>(
        &self,
        model: &str,
        input: T,
    ) -> Result<Job, ProviderError> {
        let response = self
            .client
            .post(self.submit_url(model))
            .bearer_auth(&self.config.api_token)
            .json(&PredictionRequest { input })
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Err(Self::map_status_error(response).await);
        }

        let prediction: PredictionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            id = %prediction.id,
            status = %prediction.status,
            model = %model,
            "Prediction submitted"
        );

        Ok(into_job(prediction))
    }
}

/// 归一化服务端 output 字段: 图像模型返回 URL 数组，取第一个；
/// 视频模型返回单个 URL 字符串
fn normalize_output(output: Option<Value>) -> Option<String> {
    match output? {
        Value::String(url) => Some(url),
        Value::Array(items) => items.into_iter().find_map(|v| match v {
            Value::String(url) => Some(url),
            _ => None,
        }),
        _ => None,
    }
}

fn normalize_error(error: Option<Value>) -> Option<String> {
    match error? {
        Value::String(msg) => Some(msg),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn into_job(prediction: PredictionResponse) -> Job {
    Job {
        status: JobStatus::from_provider(&prediction.status),
        output: normalize_output(prediction.output),
        error: normalize_error(prediction.error),
        id: prediction.id,
    }
}

#[async_trait]
impl PredictionPort for ReplicateClient {
    async fn submit(&self, input: GenerationInput) -> Result<Job, ProviderError> {
        match input {
            GenerationInput::Image(ImageInput {
                prompt,
                aspect_ratio,
                output_quality,
            }) => {
                self.post_prediction(
                    &self.config.image_model,
                    ImageModelInput {
                        prompt: &prompt,
                        aspect_ratio: &aspect_ratio,
                        output_format: "webp",
                        output_quality,
                    },
                )
                .await
            }
            GenerationInput::Video(VideoInput { prompt }) => {
                self.post_prediction(
                    &self.config.video_model,
                    VideoModelInput {
                        prompt: &prompt,
                        prompt_optimizer: true,
                    },
                )
                .await
            }
        }
    }

    async fn fetch(&self, id: &str) -> Result<Job, ProviderError> {
        let response = self
            .client
            .get(self.fetch_url(id))
            .bearer_auth(&self.config.api_token)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        if !response.status().is_success() {
            return Err(Self::map_status_error(response).await);
        }

        let prediction: PredictionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(into_job(prediction))
    }
}
