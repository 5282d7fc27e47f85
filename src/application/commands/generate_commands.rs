//! Generation Commands - 生成命令定义
//!
//! 四个组合式生成流程的命令与响应结构

use chrono::{DateTime, Utc};

/// 生成 9 格分镜图像
#[derive(Debug, Clone)]
pub struct GenerateStoryboardCommand {
    pub character: Option<String>,
    pub brand: Option<String>,
    /// 面板文案，留空的面板使用默认文案；多余部分被忽略
    pub panels: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GenerateStoryboardResponse {
    /// 与面板一一对应的图像 URL 槽位，失败槽位为 None
    pub panels: Vec<Option<String>>,
}

/// 生成场景卷（每场景 3 帧）
#[derive(Debug, Clone)]
pub struct GenerateReelCommand {
    pub scenes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SceneResult {
    pub description: String,
    pub images: Vec<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct GenerateReelResponse {
    pub scenes: Vec<SceneResult>,
}

/// 生成完整广告：分镜图像 + 旁白脚本 + 视频
#[derive(Debug, Clone)]
pub struct GenerateAdCommand {
    pub brand: String,
    pub character: String,
    pub slogan: String,
    pub panels: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GenerateAdResponse {
    pub panels: Vec<Option<String>>,
    /// 旁白脚本。音频由 /api/voice 单独合成
    pub script: String,
    pub video: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// 生成 TikTok 反应视频
#[derive(Debug, Clone)]
pub struct GenerateTiktokCommand {
    pub brand: String,
    pub character: String,
    pub slogan: String,
    pub panels: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GenerateTiktokResponse {
    pub script: String,
    pub video: Option<String>,
    pub generated_at: DateTime<Utc>,
}
