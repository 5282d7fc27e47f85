//! Application Commands - 命令与处理器

mod generate_commands;
pub mod handlers;

pub use generate_commands::{
    GenerateAdCommand, GenerateAdResponse, GenerateReelCommand, GenerateReelResponse,
    GenerateStoryboardCommand, GenerateStoryboardResponse, GenerateTiktokCommand,
    GenerateTiktokResponse, SceneResult,
};
pub use handlers::{
    GenerateAdHandler, GenerateReelHandler, GenerateStoryboardHandler, GenerateTiktokHandler,
};
