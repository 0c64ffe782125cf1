use serde::{Deserialize, Serialize};

/// Статус продажи единицы. При создании всегда `Available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitStatus {
    #[default]
    Available,
    Reserved,
    Sold,
}

impl UnitStatus {
    pub fn code(&self) -> &'static str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Reserved => "reserved",
            UnitStatus::Sold => "sold",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitStatus::Available => "متاحة",
            UnitStatus::Reserved => "محجوزة",
            UnitStatus::Sold => "مباعة",
        }
    }

    pub fn all() -> Vec<UnitStatus> {
        vec![UnitStatus::Available, UnitStatus::Reserved, UnitStatus::Sold]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(UnitStatus::Available),
            "reserved" => Some(UnitStatus::Reserved),
            "sold" => Some(UnitStatus::Sold),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
