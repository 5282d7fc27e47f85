//! Application State - HTTP 应用状态
//!
//! 包含端口与所有命令处理器

use std::sync::Arc;

use crate::application::{
    BatchConfig, GenerateAdHandler, GenerateReelHandler, GenerateStoryboardHandler,
    GenerateTiktokHandler, PollConfig, PredictionPort, SpeechPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub prediction_port: Arc<dyn PredictionPort>,
    pub speech_port: Arc<dyn SpeechPort>,

    // ========== Command Handlers ==========
    pub storyboard_handler: GenerateStoryboardHandler,
    pub reel_handler: GenerateReelHandler,
    pub ad_handler: GenerateAdHandler,
    pub tiktok_handler: GenerateTiktokHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        prediction_port: Arc<dyn PredictionPort>,
        speech_port: Arc<dyn SpeechPort>,
        batch: BatchConfig,
        image_poll: PollConfig,
        video_poll: PollConfig,
    ) -> Self {
        Self {
            storyboard_handler: GenerateStoryboardHandler::new(
                prediction_port.clone(),
                batch.clone(),
                image_poll.clone(),
            ),
            reel_handler: GenerateReelHandler::new(prediction_port.clone(), image_poll.clone()),
            ad_handler: GenerateAdHandler::new(
                prediction_port.clone(),
                batch,
                image_poll,
                video_poll.clone(),
            ),
            tiktok_handler: GenerateTiktokHandler::new(prediction_port.clone(), video_poll),
            prediction_port,
            speech_port,
        }
    }
}
