//! Domain Layer - 领域层
//!
//! 纯数据与状态机，不依赖任何基础设施:
//! - prompt: 固定提示词模板与构建函数
//! - script: 旁白脚本与视频提示词
//! - voice: 音色预设与关键词选择
//! - storyboard: 分镜、场景卷与用户选择状态
//! - playback: 展示层状态机（生成流程、幻灯片放映）

pub mod playback;
pub mod prompt;
pub mod script;
pub mod storyboard;
pub mod voice;

pub use playback::{Frame, GenerationPhase, Slideshow, SLIDESHOW_TICK};
pub use prompt::{decision_prompt, panel_prompt, valentine_prompt};
pub use storyboard::{Panel, Scene, Selection, Storyboard, FRAMES_PER_SCENE, PANEL_COUNT};
pub use voice::{select_voice, VoicePreset};
