use serde::{Deserialize, Serialize};

/// Тип кондиционирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AcType {
    #[default]
    Split,
    Window,
    SplitWindow,
    Central,
    None,
}

impl AcType {
    pub fn code(&self) -> &'static str {
        match self {
            AcType::Split => "split",
            AcType::Window => "window",
            AcType::SplitWindow => "splitWindow",
            AcType::Central => "central",
            AcType::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AcType::Split => "سبليت",
            AcType::Window => "شباك",
            AcType::SplitWindow => "سبليت وشباك",
            AcType::Central => "مركزي",
            AcType::None => "بدون تكييف",
        }
    }

    pub fn all() -> Vec<AcType> {
        vec![
            AcType::Split,
            AcType::Window,
            AcType::SplitWindow,
            AcType::Central,
            AcType::None,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "split" => Some(AcType::Split),
            "window" => Some(AcType::Window),
            "splitWindow" => Some(AcType::SplitWindow),
            "central" => Some(AcType::Central),
            "none" => Some(AcType::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for AcType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
