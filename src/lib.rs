//! Adreel - 浏览器端创意广告生成后端
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Prompt: 图像提示词模板与决策表
//! - Script: 旁白/视频脚本模板
//! - Voice: 旁白音色选择规则
//! - Storyboard: 分镜与场景模型
//! - Playback: 生成阶段与幻灯片状态机
//!
//! 应用层 (application/):
//! - Ports: 端口定义（PredictionPort, SpeechPort）
//! - Poll: 任务轮询器（固定间隔 + 次数上限 + 协作取消）
//! - Batch: 分组并发批量执行器
//! - Commands: 组合式生成流程处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（透传端点 + 流程端点）
//! - Adapters: Replicate 预测客户端, ElevenLabs 语音客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
