//! Storyboard Context - 分镜与选择状态
//!
//! 分镜（9 格面板）、场景卷（每场景 3 帧）与用户选择状态的领域模型。
//! 所有状态仅存在于一次会话的内存中，不落盘。

use crate::domain::prompt::STORYBOARD_PLACEHOLDERS;

/// 分镜面板数量
pub const PANEL_COUNT: usize = 9;

/// 每个场景的帧数
pub const FRAMES_PER_SCENE: usize = 3;

/// 单个分镜面板
///
/// text 为用户输入的文案，image 为生成完成后回填的 URL
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub text: String,
    pub image: Option<String>,
}

/// 9 格分镜
#[derive(Debug, Clone)]
pub struct Storyboard {
    panels: [Panel; PANEL_COUNT],
}

impl Default for Storyboard {
    fn default() -> Self {
        Self {
            panels: Default::default(),
        }
    }
}

impl Storyboard {
    /// 从面板文案创建分镜，超出 9 格的部分被忽略
    pub fn from_texts(texts: &[String]) -> Self {
        let mut board = Self::default();
        for (panel, text) in board.panels.iter_mut().zip(texts) {
            panel.text = text.clone();
        }
        board
    }

    pub fn panels(&self) -> &[Panel; PANEL_COUNT] {
        &self.panels
    }

    /// 更新某个面板的文案
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.text = text.into();
        }
    }

    /// 回填某个面板的生成结果
    pub fn set_image(&mut self, index: usize, image: Option<String>) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.image = image;
        }
    }

    /// 面板生效文案：留空时回退到默认文案
    pub fn effective_text(&self, index: usize) -> &str {
        let text = self
            .panels
            .get(index)
            .map(|p| p.text.trim())
            .unwrap_or_default();
        if text.is_empty() {
            STORYBOARD_PLACEHOLDERS[index]
        } else {
            text
        }
    }

    /// 所有面板的生效文案
    pub fn effective_texts(&self) -> Vec<String> {
        (0..PANEL_COUNT)
            .map(|i| self.effective_text(i).to_string())
            .collect()
    }

    /// 是否有任何面板已填写文案
    pub fn has_text(&self) -> bool {
        self.panels.iter().any(|p| !p.text.trim().is_empty())
    }

    /// 是否有任何面板已生成图像
    pub fn has_images(&self) -> bool {
        self.panels.iter().any(|p| p.image.is_some())
    }
}

/// 场景卷中的单个场景
#[derive(Debug, Clone)]
pub struct Scene {
    pub description: String,
    pub images: [Option<String>; FRAMES_PER_SCENE],
}

impl Scene {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            images: Default::default(),
        }
    }

    /// 已生成的帧（过滤空槽位）
    pub fn ready_images(&self) -> impl Iterator<Item = &str> {
        self.images.iter().filter_map(|i| i.as_deref())
    }
}

/// 用户选择状态
///
/// 每个类别同一时刻只有一个激活选择
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub brand: Option<String>,
    pub character: Option<String>,
    pub slogan: Option<String>,
}

impl Selection {
    /// 三项齐备才允许生成完整广告
    pub fn can_generate(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.brand) && filled(&self.character) && filled(&self.slogan)
    }
}
