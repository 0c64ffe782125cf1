use serde::{Deserialize, Serialize};

/// Шаблон планировки этажа.
///
/// Тег носит справочный характер и не ограничивает количество единиц на этаже.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FloorPlan {
    #[default]
    FourUnits,
    ThreeUnits,
    TwoUnits,
    Custom,
}

impl FloorPlan {
    pub fn code(&self) -> &'static str {
        match self {
            FloorPlan::FourUnits => "fourUnits",
            FloorPlan::ThreeUnits => "threeUnits",
            FloorPlan::TwoUnits => "twoUnits",
            FloorPlan::Custom => "custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FloorPlan::FourUnits => "أربع شقق",
            FloorPlan::ThreeUnits => "ثلاث شقق",
            FloorPlan::TwoUnits => "شقتان",
            FloorPlan::Custom => "مخصص",
        }
    }

    pub fn all() -> Vec<FloorPlan> {
        vec![
            FloorPlan::FourUnits,
            FloorPlan::ThreeUnits,
            FloorPlan::TwoUnits,
            FloorPlan::Custom,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fourUnits" => Some(FloorPlan::FourUnits),
            "threeUnits" => Some(FloorPlan::ThreeUnits),
            "twoUnits" => Some(FloorPlan::TwoUnits),
            "custom" => Some(FloorPlan::Custom),
            _ => None,
        }
    }

    /// Вывести шаблон из количества единиц на этаже: 4 и 3 распознаются,
    /// всё остальное считается `TwoUnits`.
    pub fn from_units_per_floor(units_per_floor: usize) -> Self {
        match units_per_floor {
            4 => FloorPlan::FourUnits,
            3 => FloorPlan::ThreeUnits,
            _ => FloorPlan::TwoUnits,
        }
    }
}

impl std::fmt::Display for FloorPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
