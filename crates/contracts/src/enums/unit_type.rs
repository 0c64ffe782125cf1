use serde::{Deserialize, Serialize};

/// Тип жилой единицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitType {
    #[default]
    Apartment,
    Studio,
    Duplex,
    Penthouse,
}

impl UnitType {
    /// Код для хранения в БД
    pub fn code(&self) -> &'static str {
        match self {
            UnitType::Apartment => "apartment",
            UnitType::Studio => "studio",
            UnitType::Duplex => "duplex",
            UnitType::Penthouse => "penthouse",
        }
    }

    /// Название для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitType::Apartment => "شقة",
            UnitType::Studio => "استوديو",
            UnitType::Duplex => "دوبلكس",
            UnitType::Penthouse => "بنتهاوس",
        }
    }

    pub fn all() -> Vec<UnitType> {
        vec![
            UnitType::Apartment,
            UnitType::Studio,
            UnitType::Duplex,
            UnitType::Penthouse,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "apartment" => Some(UnitType::Apartment),
            "studio" => Some(UnitType::Studio),
            "duplex" => Some(UnitType::Duplex),
            "penthouse" => Some(UnitType::Penthouse),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
