//! Playback State Machines - 展示层状态机
//!
//! 浏览器展示层的两个状态机在此以库形式建模：
//! - 生成流程状态: idle → generating → done | error
//! - 幻灯片放映: 固定节拍交替显示 图像帧 / 黑幕，循环播放
//!
//! 状态机只负责状态推进，不感知计时器；tick 由调用方按固定间隔驱动。

use std::time::Duration;

/// 幻灯片节拍（图像与黑幕各占一个 tick）
pub const SLIDESHOW_TICK: Duration = Duration::from_millis(200);

/// 生成流程状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    /// 空闲
    #[default]
    Idle,
    /// 生成中
    Generating,
    /// 完成
    Done,
    /// 失败（可整体重试）
    Error,
}

impl GenerationPhase {
    /// 开始生成。任何状态都允许重新开始
    pub fn start(&mut self) {
        *self = GenerationPhase::Generating;
    }

    /// 生成结束，success 决定进入 Done 还是 Error
    pub fn finish(&mut self, success: bool) {
        *self = if success {
            GenerationPhase::Done
        } else {
            GenerationPhase::Error
        };
    }

    /// 重置为空闲
    pub fn reset(&mut self) {
        *self = GenerationPhase::Idle;
    }

    pub fn is_generating(&self) -> bool {
        matches!(self, GenerationPhase::Generating)
    }
}

/// 当前应显示的帧
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// 黑幕
    Blank,
    /// 第 index 张图像
    Image(usize),
}

/// 幻灯片放映状态机
///
/// 不变量:
/// - 启动时位于第 0 帧，黑幕关闭
/// - 每个 tick 在 图像 / 黑幕 之间切换，黑幕→图像 的边沿推进帧序号
/// - 越过最后一帧时回绕到第 0 帧
#[derive(Debug, Clone)]
pub struct Slideshow {
    frame_count: usize,
    current: usize,
    blank: bool,
    playing: bool,
}

impl Slideshow {
    /// 创建放映器。frame_count 为 0 时无法启动
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            current: 0,
            blank: false,
            playing: false,
        }
    }

    /// 开始放映，总是从第 0 帧、黑幕关闭开始
    pub fn play(&mut self) -> bool {
        if self.frame_count == 0 {
            return false;
        }
        self.playing = true;
        self.current = 0;
        self.blank = false;
        true
    }

    /// 显式停止（ESC 等退出信号映射到这里）
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// 当前帧
    pub fn frame(&self) -> Frame {
        if self.blank {
            Frame::Blank
        } else {
            Frame::Image(self.current)
        }
    }

    /// 推进一个节拍，返回推进后的帧
    ///
    /// 未在放映时 tick 不产生变化
    pub fn tick(&mut self) -> Frame {
        if !self.playing {
            return self.frame();
        }
        if self.blank {
            // 黑幕结束，推进到下一张图像，越界回绕
            self.current += 1;
            if self.current >= self.frame_count {
                self.current = 0;
            }
            self.blank = false;
        } else {
            self.blank = true;
        }
        self.frame()
    }
}
