//! HTTP Error Handling - 错误响应
//!
//! 错误以真实 HTTP 状态码返回，响应体为 {"error": "..."}。
//! 供应商错误细节只记录日志，对外只给出笼统描述。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::error::ApplicationError;
use crate::application::ports::{ProviderError, SpeechError};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 缺少必填字段等验证错误 → 400
    BadRequest(String),
    /// 服务端内部错误或供应商调用失败 → 500
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg.clone()))
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(msg.clone()),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::ExternalServiceError(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(e: ProviderError) -> Self {
        // 错误细节已在适配器层记录
        tracing::error!(error = %e, "Prediction provider call failed");
        ApiError::Internal("Generation failed".to_string())
    }
}

impl From<SpeechError> for ApiError {
    fn from(e: SpeechError) -> Self {
        tracing::error!(error = %e, "Speech provider call failed");
        ApiError::Internal("Voice generation failed".to_string())
    }
}
