use serde::{Deserialize, Serialize};

use crate::domain::a001_building::inventory::{InventoryModel, InventorySnapshot};

/// Модель после применения команды
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftCommandResponse {
    pub model: InventoryModel,
    pub snapshot: InventorySnapshot,
    /// Для команд копирования: сколько этажей перезаписано
    pub affected_floors: Option<usize>,
    pub message: String,
}
