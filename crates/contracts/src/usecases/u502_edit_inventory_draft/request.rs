use serde::{Deserialize, Serialize};

use super::command::DraftCommand;
use crate::domain::a001_building::inventory::InventoryModel;

/// Текущая модель черновика и команда, которую к ней применить
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftCommandRequest {
    pub model: InventoryModel,
    pub command: DraftCommand,
}
