//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 图像/视频预测服务配置
    #[serde(default)]
    pub replicate: ReplicateConfig,

    /// 语音合成服务配置
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,

    /// 任务轮询配置
    #[serde(default)]
    pub poll: PollSettings,

    /// 批量提交配置
    #[serde(default)]
    pub batch: BatchSettings,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            replicate: ReplicateConfig::default(),
            elevenlabs: ElevenLabsConfig::default(),
            poll: PollSettings::default(),
            batch: BatchSettings::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_enabled() -> bool {
    false
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// 图像/视频预测服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReplicateConfig {
    /// API Token（通常由环境变量 REPLICATE_API_TOKEN 提供）
    #[serde(default)]
    pub api_token: String,

    /// API 基础 URL
    #[serde(default = "default_replicate_url")]
    pub base_url: String,

    /// 图像模型标识
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// 视频模型标识
    #[serde(default = "default_video_model")]
    pub video_model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_replicate_timeout")]
    pub timeout_secs: u64,
}

fn default_replicate_url() -> String {
    "https://api.replicate.com".to_string()
}

fn default_image_model() -> String {
    "black-forest-labs/flux-schnell".to_string()
}

fn default_video_model() -> String {
    "minimax/video-01".to_string()
}

fn default_replicate_timeout() -> u64 {
    60
}

impl Default for ReplicateConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: default_replicate_url(),
            image_model: default_image_model(),
            video_model: default_video_model(),
            timeout_secs: default_replicate_timeout(),
        }
    }
}

/// 语音合成服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ElevenLabsConfig {
    /// API Key（通常由环境变量 ELEVENLABS_API_KEY 提供）
    #[serde(default)]
    pub api_key: String,

    /// API 基础 URL
    #[serde(default = "default_elevenlabs_url")]
    pub base_url: String,

    /// 合成模型标识
    #[serde(default = "default_elevenlabs_model")]
    pub model_id: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_elevenlabs_timeout")]
    pub timeout_secs: u64,
}

fn default_elevenlabs_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_elevenlabs_model() -> String {
    "eleven_monolingual_v1".to_string()
}

fn default_elevenlabs_timeout() -> u64 {
    120
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_elevenlabs_url(),
            model_id: default_elevenlabs_model(),
            timeout_secs: default_elevenlabs_timeout(),
        }
    }
}

/// 任务轮询配置
#[derive(Debug, Clone, Deserialize)]
pub struct PollSettings {
    /// 图像任务轮询间隔（秒）
    #[serde(default = "default_image_interval")]
    pub image_interval_secs: u64,

    /// 图像任务最大轮询次数
    #[serde(default = "default_image_attempts")]
    pub image_max_attempts: u32,

    /// 视频任务轮询间隔（秒）
    #[serde(default = "default_video_interval")]
    pub video_interval_secs: u64,

    /// 视频任务最大轮询次数
    #[serde(default = "default_video_attempts")]
    pub video_max_attempts: u32,
}

fn default_image_interval() -> u64 {
    2
}

fn default_image_attempts() -> u32 {
    30
}

fn default_video_interval() -> u64 {
    5
}

fn default_video_attempts() -> u32 {
    60
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            image_interval_secs: default_image_interval(),
            image_max_attempts: default_image_attempts(),
            video_interval_secs: default_video_interval(),
            video_max_attempts: default_video_attempts(),
        }
    }
}

/// 批量提交配置
#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    /// 每组并发提交的任务数
    #[serde(default = "default_group_size")]
    pub group_size: usize,
}

fn default_group_size() -> usize {
    3
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            group_size: default_group_size(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
