//! Narration Scripts - 旁白脚本与视频提示词
//!
//! 由用户选择（品牌、角色、口号）和分镜文案拼装旁白脚本与视频提示词。
//! 纯函数，无外部调用。

/// 构建广告旁白脚本
pub fn ad_script(character: &str, brand: &str, slogan: &str) -> String {
    format!(
        "{character} here. Listen up. {brand} changed my life.\n        You know what I always say? {slogan}.\n        {brand}. Get some.",
    )
}

/// 构建广告视频提示词
///
/// 分镜文案用 " → " 连接成单条叙事线
pub fn ad_video_prompt(character: &str, brand: &str, slogan: &str, panels: &[String]) -> String {
    let storyboard_text = panels.join(" → ");
    format!(
        "Cinematic Super Bowl commercial. {character} as spokesperson for {brand}.\n        Storyboard: {storyboard_text}\n        Style: High production value, dramatic lighting, epic feel.\n        Slogan: \"{slogan}\"",
    )
}

/// 构建 TikTok 反应视频旁白脚本
///
/// 引用第 1、2、5 个面板的文案（与原始叙事节奏保持一致）
pub fn tiktok_script(character: &str, brand: &str, slogan: &str, panels: &[String]) -> String {
    let first = panels.first().map(String::as_str).unwrap_or_default();
    let second = panels.get(1).map(String::as_str).unwrap_or_default();
    let fifth = panels.get(4).map(String::as_str).unwrap_or_default();
    format!(
        "Okay hear me out. So {brand} drops this Super Bowl ad right? And it's got {character} in it.\n        So it starts with {first}.\n        Then boom, {second}.\n        And get this - {fifth}.\n        The whole vibe is just... {slogan}.\n        I'm telling you this would break the internet. Like actually viral. Thoughts?",
    )
}

/// 构建 TikTok 反应视频提示词（9:16 竖屏）
pub fn tiktok_video_prompt(character: &str, brand: &str, panels: &[String]) -> String {
    let first = panels.first().map(String::as_str).unwrap_or_default();
    format!(
        "Vertical 9:16 TikTok reaction video format. Main content takes up most of screen showing a dramatic black and white storyboard illustration for a {brand} commercial featuring {character}. Small circular facecam bubble in bottom right corner showing a young excited person reacting and explaining. The person has ring light catchlights, casual clothes, animated expressions, pointing at the main image. Gen-z TikTok creator energy, \"okay hear me out\" vibes. The storyboard shows: {first}. Split screen layout - art dominates, reactor in corner.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels() -> Vec<String> {
        (1..=9).map(|i| format!("panel {}", i)).collect()
    }

    #[test]
    fn test_ad_script_mentions_all_selections() {
        let script = ad_script("The Rock", "Doritos", "crunch different");
        assert!(script.starts_with("The Rock here."));
        assert!(script.contains("Doritos changed my life."));
        assert!(script.contains("crunch different."));
        assert!(script.ends_with("Doritos. Get some."));
    }

    #[test]
    fn test_ad_video_prompt_joins_panels_with_arrow() {
        let prompt = ad_video_prompt("Batman", "Pepsi", "just sip it", &panels());
        assert!(prompt.contains("panel 1 → panel 2 → panel 3"));
        assert!(prompt.contains("Batman as spokesperson for Pepsi."));
        assert!(prompt.contains("Slogan: \"just sip it\""));
    }

    #[test]
    fn test_tiktok_script_references_panels_1_2_5() {
        let script = tiktok_script("Shrek", "Nike", "swamp mode", &panels());
        assert!(script.contains("So it starts with panel 1."));
        assert!(script.contains("Then boom, panel 2."));
        assert!(script.contains("And get this - panel 5."));
        assert!(script.contains("The whole vibe is just... swamp mode."));
    }

    #[test]
    fn test_tiktok_video_prompt_vertical_format() {
        let prompt = tiktok_video_prompt("Groot", "Apple", &panels());
        assert!(prompt.starts_with("Vertical 9:16 TikTok reaction video format."));
        assert!(prompt.contains("Apple commercial featuring Groot"));
        assert!(prompt.contains("The storyboard shows: panel 1."));
    }

    #[test]
    fn test_scripts_tolerate_short_storyboards() {
        let short = vec!["only one".to_string()];
        let script = tiktok_script("Mario", "Toyota", "wahoo", &short);
        assert!(script.contains("So it starts with only one."));
        assert!(script.contains("Then boom, ."));
    }
}
