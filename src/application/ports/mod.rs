//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod prediction;
mod speech;

pub use prediction::{
    GenerationInput, ImageInput, Job, JobStatus, PredictionPort, ProviderError, VideoInput,
};
pub use speech::{SpeechError, SpeechPort, SpeechRequest, SpeechResponse};
