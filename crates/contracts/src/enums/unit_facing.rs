use serde::{Deserialize, Serialize};

/// Расположение единицы относительно улицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitFacing {
    #[default]
    Front,
    Back,
    Corner,
}

impl UnitFacing {
    pub fn code(&self) -> &'static str {
        match self {
            UnitFacing::Front => "front",
            UnitFacing::Back => "back",
            UnitFacing::Corner => "corner",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitFacing::Front => "أمامية",
            UnitFacing::Back => "خلفية",
            UnitFacing::Corner => "زاوية",
        }
    }

    pub fn all() -> Vec<UnitFacing> {
        vec![UnitFacing::Front, UnitFacing::Back, UnitFacing::Corner]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "front" => Some(UnitFacing::Front),
            "back" => Some(UnitFacing::Back),
            "corner" => Some(UnitFacing::Corner),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitFacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
