use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::a001_building::inventory::{InventoryError, InventoryModel};
use crate::enums::FloorPlan;

/// Команда конструктора этажей.
///
/// Разрушающие команды несут явный флаг подтверждения: без него команда
/// отклоняется до обращения к модели.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DraftCommand {
    #[serde(rename_all = "camelCase")]
    Resize {
        total_floors: usize,
        units_per_floor: usize,
    },
    AddFloor,
    #[serde(rename_all = "camelCase")]
    RemoveFloor { floor_number: u32 },
    #[serde(rename_all = "camelCase")]
    UpdateFloorPlan {
        floor_number: u32,
        floor_plan: FloorPlan,
    },
    #[serde(rename_all = "camelCase")]
    AddUnit { floor_number: u32 },
    #[serde(rename_all = "camelCase")]
    RemoveUnit { floor_number: u32, index: usize },
    #[serde(rename_all = "camelCase")]
    CopyFloorToAll {
        source_floor: u32,
        #[serde(default)]
        confirmed: bool,
    },
    ApplyFirstFloorToRepeater {
        #[serde(default)]
        confirmed: bool,
    },
}

/// Ошибка применения команды
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "camelCase")]
pub enum DraftCommandError {
    #[error("هذه العملية تستبدل بيانات الطوابق، يلزم التأكيد")]
    ConfirmationRequired,

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Итог успешной команды
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub affected_floors: Option<usize>,
}

impl DraftCommand {
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            DraftCommand::CopyFloorToAll { .. } | DraftCommand::ApplyFirstFloorToRepeater { .. }
        )
    }

    fn is_confirmed(&self) -> bool {
        match *self {
            DraftCommand::CopyFloorToAll { confirmed, .. }
            | DraftCommand::ApplyFirstFloorToRepeater { confirmed } => confirmed,
            _ => false,
        }
    }

    /// Применить команду к модели. При ошибке модель не меняется.
    pub fn apply(&self, model: &mut InventoryModel) -> Result<CommandOutcome, DraftCommandError> {
        if self.is_destructive() && !self.is_confirmed() {
            return Err(DraftCommandError::ConfirmationRequired);
        }

        let affected_floors = match *self {
            DraftCommand::Resize {
                total_floors,
                units_per_floor,
            } => {
                model.resize(total_floors.max(1), units_per_floor.max(1));
                None
            }
            DraftCommand::AddFloor => {
                model.add_floor();
                None
            }
            DraftCommand::RemoveFloor { floor_number } => {
                model.remove_floor(floor_number)?;
                None
            }
            DraftCommand::UpdateFloorPlan {
                floor_number,
                floor_plan,
            } => {
                model.update_floor_plan(floor_number, floor_plan)?;
                None
            }
            DraftCommand::AddUnit { floor_number } => {
                model.add_unit(floor_number)?;
                None
            }
            DraftCommand::RemoveUnit {
                floor_number,
                index,
            } => {
                model.remove_unit(floor_number, index)?;
                None
            }
            DraftCommand::CopyFloorToAll { source_floor, .. } => {
                Some(model.copy_floor_to_all(source_floor)?)
            }
            DraftCommand::ApplyFirstFloorToRepeater { .. } => {
                Some(model.apply_first_floor_to_repeater()?)
            }
        };

        Ok(CommandOutcome { affected_floors })
    }

    /// Сообщение для уведомления в UI
    pub fn success_message(&self, outcome: &CommandOutcome) -> String {
        match (self, outcome.affected_floors) {
            (DraftCommand::CopyFloorToAll { source_floor, .. }, Some(n)) => {
                format!("تم نسخ الطابق {} إلى {} طوابق", source_floor, n)
            }
            (DraftCommand::ApplyFirstFloorToRepeater { .. }, Some(n)) => {
                format!("تم تطبيق الطابق الأول على {} طوابق متكررة", n)
            }
            _ => "تم تحديث الطوابق".to_string(),
        }
    }
}
