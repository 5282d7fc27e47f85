//! Prompt Templates - 提示词模板
//!
//! 所有固定提示词均为不可变常量数据，运行时不做任何修改。
//! 生成请求的最终提示词由这里的构建函数拼装。

/// 分镜画风提示词（黑白水墨海报风），追加在每个分镜面板提示词之后
pub const STYLE_PROMPT: &str = "High-contrast monochrome ink look: heavy blacks carved out of bright white space, minimal midtones. Expressive, scratchy linework: dry-brush streaks, jittery hatching, and visible stroke direction. Strong line-weight variation: thick-to-thin contours that snap between delicate detail and bold outline. Graphic poster sensibility: simplified shapes, readable silhouettes, and flat shadow masses. Comic/storyboard finish: confident panel-border geometry, bold framing language, and print-ready clarity. Analog/print imperfections: uneven fills, rough edges, slight bleed/ghosting like photocopy or risograph. Controlled limited-palette feel: primarily black/white with restrained gray/blue wash and rare accent hits. Cinematic contrast design: dramatic cropping, deep blacks for depth, and lighting implied via negative space. Texture-forward surfaces: layered hatching, scumbled blacks, and paper grain showing through. Overall mood: stark, gritty, dystopian tone created purely through contrast, density, and abrasion.";

/// 记忆碎片画风提示词（valentine 场景卷），追加在每个场景描述之后
pub const VALENTINE_STYLE_PROMPT: &str = "Hazy, motion-blurred, memory-fragment realism. Half-remembered moment mid-movement.
Handheld, imperfect, incidental vantage. Smear, rolling-shutter wobble, accidental framing.
Human presence implied not shown. Partially silhouetted. Face unreadable. Mid-motion. Ambiguous.
Overexposed center, dirty shadows, vignette into murk.
Harsh light bleeding in. Veiling glare. Lifted blacks. Bloom around highlights.
Washed out. Nicotine-tinted. Desaturated. Muted greens yellows grays.
Murky. Dreamlike. Raw. Unpolished.
Background streaks and smears. Unreadable details.
Grit. Soft focus. Film noise. No sharp edges.
Do: overexposure, motion blur, ambiguous figures, grime, grain.
Avoid: clean lighting, sharp focus, vivid color, clarity, polish.";

/// 人生抉择场景提示词表
///
/// key 必须命中表中某一项，否则视为验证错误，不发起任何外部调用
pub const DECISION_PROMPTS: &[(&str, &str)] = &[
    (
        "porsche",
        "A person sitting alone in a beautiful Porsche 911, parked in a driveway of a modest house. The car is gleaming but the person looks stressed, staring at bills and bank statements scattered on the passenger seat. Empty wallet visible. The contrast between the luxury car and financial stress is palpable. Realistic photography style, cinematic lighting, melancholic mood.",
    ),
    (
        "save",
        "A middle-aged person sitting alone in a sparse, minimalist apartment, staring at a computer screen showing a large bank balance. They look healthy but lonely. No decorations, no photos of friends or family, just bare walls and a single plant. A stack of untouched travel brochures gathering dust. The person has never lived, only saved. Realistic photography style, cold blue lighting, isolated atmosphere.",
    ),
    (
        "sushi",
        "A joyful person at a sushi restaurant surrounded by empty plates, chopsticks in hand, laughing with friends. Photos on the wall behind them show the same person at different sushi restaurants around the world - Tokyo, LA, NYC. They look genuinely happy and fulfilled, with a slightly rounder figure and the biggest smile. Warm golden lighting, vibrant colors, sense of community and joy. Realistic photography style.",
    ),
];

/// 分镜默认文案（面板留空时的回退内容）
pub const STORYBOARD_PLACEHOLDERS: [&str; 9] = [
    "WIDE SHOT: Industrial warehouse. Rows of workers stare at screens.",
    "CLOSE UP: A single chip falls in slow motion.",
    "MEDIUM: Character turns dramatically toward camera.",
    "POV: Walking through a crowd of confused onlookers.",
    "WIDE: Character stands alone on mountaintop, holding product.",
    "CLOSE UP: A single tear rolls down cheek.",
    "ACTION: Explosion of color and confetti behind character.",
    "MEDIUM: Character takes a bite / sip / uses product.",
    "FINAL: Logo appears. Slogan fades in. Character winks.",
];

/// 查找人生抉择提示词
pub fn decision_prompt(decision: &str) -> Option<&'static str> {
    DECISION_PROMPTS
        .iter()
        .find(|(key, _)| *key == decision)
        .map(|(_, prompt)| *prompt)
}

/// 构建分镜面板图像提示词
///
/// character / brand 缺省时使用占位描述，保证提示词始终完整
pub fn panel_prompt(scene: &str, character: Option<&str>, brand: Option<&str>) -> String {
    let character = character
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("mysterious figure");
    let brand = brand.filter(|s| !s.trim().is_empty()).unwrap_or("product");
    format!(
        "{}. Character: {}. Brand: {} visible in scene. {}",
        scene, character, brand, STYLE_PROMPT
    )
}

/// 构建记忆碎片场景提示词
pub fn valentine_prompt(scene: &str) -> String {
    format!("{}. {}", scene, VALENTINE_STYLE_PROMPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_prompt_known_keys() {
        assert!(decision_prompt("porsche").is_some());
        assert!(decision_prompt("save").is_some());
        assert!(decision_prompt("sushi").is_some());
    }

    #[test]
    fn test_decision_prompt_unknown_key() {
        assert!(decision_prompt("lambo").is_none());
        assert!(decision_prompt("").is_none());
    }

    #[test]
    fn test_panel_prompt_with_all_fields() {
        let prompt = panel_prompt("CLOSE UP: a chip falls", Some("Batman"), Some("Doritos"));
        assert!(prompt.starts_with("CLOSE UP: a chip falls. Character: Batman. Brand: Doritos visible in scene."));
        assert!(prompt.ends_with(STYLE_PROMPT));
    }

    #[test]
    fn test_panel_prompt_defaults() {
        let prompt = panel_prompt("WIDE: warehouse", None, None);
        assert!(prompt.contains("Character: mysterious figure."));
        assert!(prompt.contains("Brand: product visible in scene."));
    }

    #[test]
    fn test_panel_prompt_blank_fields_fall_back() {
        let prompt = panel_prompt("WIDE: warehouse", Some("  "), Some(""));
        assert!(prompt.contains("Character: mysterious figure."));
        assert!(prompt.contains("Brand: product visible in scene."));
    }

    #[test]
    fn test_valentine_prompt() {
        let prompt = valentine_prompt("Sitting in a parked car at night");
        assert!(prompt.starts_with("Sitting in a parked car at night. "));
        assert!(prompt.ends_with(VALENTINE_STYLE_PROMPT));
    }
}
