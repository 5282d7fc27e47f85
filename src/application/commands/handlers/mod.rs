//! Command Handlers - 命令处理器

mod generate_handlers;

pub use generate_handlers::{
    GenerateAdHandler, GenerateReelHandler, GenerateStoryboardHandler, GenerateTiktokHandler,
};
