use serde::{Deserialize, Serialize};

use crate::domain::a001_building::inventory::DraftValidationError;

/// Результат записи черновика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CreateBuildingResponse {
    /// Здание и все единицы записаны
    #[serde(rename_all = "camelCase")]
    Created {
        building_id: String,
        code: String,
        units_created: usize,
    },
    /// Черновик не прошёл проверку, ничего не записано
    Rejected {
        violations: Vec<DraftValidationError>,
    },
}
