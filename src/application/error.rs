//! 应用层错误定义
//!
//! 统一的命令处理错误类型

use thiserror::Error;

use crate::application::ports::{ProviderError, SpeechError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（缺少必填字段等），在任何外部调用之前同步返回
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<ProviderError> for ApplicationError {
    fn from(err: ProviderError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<SpeechError> for ApplicationError {
    fn from(err: SpeechError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}
