//! Voice Presets - 音色预设与选择
//!
//! 五个固定的 ElevenLabs 预设音色，根据角色名做不区分大小写的
//! 子串匹配来选择。规则顺序即优先级：首个命中的规则生效。

/// 预设音色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoicePreset {
    /// 旁白（默认）
    Narrator,
    /// 低沉男声
    Deep,
    /// 活力
    Energetic,
    /// 沉稳权威
    Wise,
    /// 亲切男声
    Friendly,
}

impl VoicePreset {
    /// ElevenLabs 音色 ID
    pub fn voice_id(&self) -> &'static str {
        match self {
            VoicePreset::Narrator => "21m00Tcm4TlvDq8ikWAM",
            VoicePreset::Deep => "29vD33N1CtxCmqQRPOHJ",
            VoicePreset::Energetic => "ErXwobaYiN019PkySvjV",
            VoicePreset::Wise => "VR6AewLTigWG4xSOukaG",
            VoicePreset::Friendly => "pNInz6obpgDQGcFmaJgB",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoicePreset::Narrator => "narrator",
            VoicePreset::Deep => "deep",
            VoicePreset::Energetic => "energetic",
            VoicePreset::Wise => "wise",
            VoicePreset::Friendly => "friendly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "narrator" => Some(VoicePreset::Narrator),
            "deep" => Some(VoicePreset::Deep),
            "energetic" => Some(VoicePreset::Energetic),
            "wise" => Some(VoicePreset::Wise),
            "friendly" => Some(VoicePreset::Friendly),
            _ => None,
        }
    }
}

/// 关键词匹配规则，按声明顺序生效
const KEYWORD_RULES: &[(VoicePreset, &[&str])] = &[
    (VoicePreset::Deep, &["rock", "vader", "batman"]),
    (VoicePreset::Friendly, &["snoop", "kevin"]),
    (VoicePreset::Energetic, &["beyoncé", "taylor"]),
    (VoicePreset::Wise, &["martha", "yoda", "groot"]),
];

/// 根据角色名选择音色
///
/// 优先级:
/// 1. 角色名直接命中预设名（"narrator" / "deep" / ...）
/// 2. 关键词子串匹配，规则顺序即优先级
/// 3. 兜底为旁白音色
pub fn select_voice(character: Option<&str>) -> VoicePreset {
    let character = character.unwrap_or_default().to_lowercase();

    if let Some(preset) = VoicePreset::from_str(&character) {
        return preset;
    }

    for (preset, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|kw| character.contains(kw)) {
            return *preset;
        }
    }

    VoicePreset::Narrator
}
