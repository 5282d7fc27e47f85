//! Infrastructure Adapters - 适配器实现
//!
//! 六边形架构的适配器实现

pub mod prediction;
pub mod tts;

pub use prediction::*;
pub use tts::*;
