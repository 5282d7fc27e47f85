//! HTTP Handlers
//!
//! 单任务透传端点 + 组合式流程端点

mod decision;
mod image;
mod ping;
mod valentine;
mod video;
mod voice;
mod workflow;

pub use decision::*;
pub use image::*;
pub use ping::*;
pub use valentine::*;
pub use video::*;
pub use voice::*;
pub use workflow::*;
