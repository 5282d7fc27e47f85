//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 供应商凭证环境变量（REPLICATE_API_TOKEN / ELEVENLABS_API_KEY）
//! 2. 环境变量（前缀 ADREEL_）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `ADREEL_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// 供应商凭证额外接受无前缀的惯用变量名，优先于其他来源：
/// - `REPLICATE_API_TOKEN`
/// - `ELEVENLABS_API_KEY`
///
/// # 环境变量示例
/// - `ADREEL_SERVER__HOST=127.0.0.1`
/// - `ADREEL_SERVER__PORT=8080`
/// - `ADREEL_REPLICATE__BASE_URL=http://replicate-mock:8000`
/// - `ADREEL_POLL__IMAGE_MAX_ATTEMPTS=10`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5080)?
        .set_default("replicate.base_url", "https://api.replicate.com")?
        .set_default("replicate.image_model", "black-forest-labs/flux-schnell")?
        .set_default("replicate.video_model", "minimax/video-01")?
        .set_default("replicate.timeout_secs", 60)?
        .set_default("elevenlabs.base_url", "https://api.elevenlabs.io")?
        .set_default("elevenlabs.model_id", "eleven_monolingual_v1")?
        .set_default("elevenlabs.timeout_secs", 120)?
        .set_default("poll.image_interval_secs", 2)?
        .set_default("poll.image_max_attempts", 30)?
        .set_default("poll.video_interval_secs", 5)?
        .set_default("poll.video_max_attempts", 60)?
        .set_default("batch.group_size", 3)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量
    // 前缀: ADREEL_
    // 层级分隔符: __ (双下划线)
    // 例如: ADREEL_REPLICATE__BASE_URL=http://replicate-mock:8000
    builder = builder.add_source(
        Environment::with_prefix("ADREEL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let mut app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 供应商凭证的惯用变量名覆盖其他来源
    if let Ok(token) = std::env::var("REPLICATE_API_TOKEN") {
        if !token.is_empty() {
            app_config.replicate.api_token = token;
        }
    }
    if let Ok(key) = std::env::var("ELEVENLABS_API_KEY") {
        if !key.is_empty() {
            app_config.elevenlabs.api_key = key;
        }
    }

    // 7. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 凭证不做存在性检查：未配置时上游会在首次调用返回认证错误。
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证上游服务 URL
    if config.replicate.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Replicate base URL cannot be empty".to_string(),
        ));
    }
    if config.elevenlabs.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "ElevenLabs base URL cannot be empty".to_string(),
        ));
    }

    // 验证轮询参数
    if config.poll.image_max_attempts == 0 || config.poll.video_max_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "Poll max attempts cannot be 0".to_string(),
        ));
    }

    // 验证批量参数
    if config.batch.group_size == 0 {
        return Err(ConfigError::ValidationError(
            "Batch group size cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("Replicate URL: {}", config.replicate.base_url);
    tracing::info!("Image Model: {}", config.replicate.image_model);
    tracing::info!("Video Model: {}", config.replicate.video_model);
    tracing::info!("ElevenLabs URL: {}", config.elevenlabs.base_url);
    tracing::info!("ElevenLabs Model: {}", config.elevenlabs.model_id);
    tracing::info!(
        "Image Poll: every {}s, up to {} attempts",
        config.poll.image_interval_secs,
        config.poll.image_max_attempts
    );
    tracing::info!(
        "Video Poll: every {}s, up to {} attempts",
        config.poll.video_interval_secs,
        config.poll.video_max_attempts
    );
    tracing::info!("Batch Group Size: {}", config.batch.group_size);
    tracing::info!(
        "Static Files: {}",
        if config.server.static_files.enabled {
            config.server.static_files.dir.display().to_string()
        } else {
            "disabled".to_string()
        }
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
