//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PredictionPort, SpeechPort）
//! - poll: 任务轮询（固定间隔 + 次数上限 + 协作式取消）
//! - batch: 批量生成编排（固定大小分组、有序槽位聚合）
//! - commands: 组合式生成流程的命令及处理器
//! - error: 应用层错误定义

pub mod batch;
pub mod commands;
pub mod error;
pub mod poll;
pub mod ports;

pub use batch::{BatchConfig, BatchRunner, DEFAULT_GROUP_SIZE};
pub use commands::{
    GenerateAdCommand, GenerateAdHandler, GenerateAdResponse, GenerateReelCommand,
    GenerateReelHandler, GenerateReelResponse, GenerateStoryboardCommand,
    GenerateStoryboardHandler, GenerateStoryboardResponse, GenerateTiktokCommand,
    GenerateTiktokHandler, GenerateTiktokResponse, SceneResult,
};
pub use error::ApplicationError;
pub use poll::{JobPoller, PollConfig, PollResult};
pub use ports::{
    GenerationInput, ImageInput, Job, JobStatus, PredictionPort, ProviderError, SpeechError,
    SpeechPort, SpeechRequest, SpeechResponse, VideoInput,
};
