use serde::{Deserialize, Serialize};

use crate::domain::a001_building::aggregate::BuildingDto;
use crate::domain::a001_building::inventory::InventoryModel;

/// Запрос на запись готового черновика здания
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBuildingRequest {
    pub building: BuildingDto,
    pub inventory: InventoryModel,
}
