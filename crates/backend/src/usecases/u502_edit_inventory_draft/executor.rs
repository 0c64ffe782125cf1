use contracts::domain::a001_building::inventory::InventoryModel;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_edit_inventory_draft::{
    DraftCommandError, DraftCommandRequest, DraftCommandResponse, EditInventoryDraft,
};

use crate::shared::config::DraftConfig;

/// Новый черновик по настройкам
pub fn new_draft(config: &DraftConfig) -> InventoryModel {
    InventoryModel::new(
        config.default_total_floors.max(1),
        config.default_units_per_floor.max(1),
    )
}

/// Применить команду к присланной модели и вернуть новую
pub fn execute(request: DraftCommandRequest) -> Result<DraftCommandResponse, DraftCommandError> {
    let DraftCommandRequest { mut model, command } = request;

    let outcome = match command.apply(&mut model) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(
                "{}: command {:?} rejected: {}",
                EditInventoryDraft::full_name(),
                command,
                e
            );
            return Err(e);
        }
    };

    tracing::debug!(
        "{}: command applied, floors={}, units={}",
        EditInventoryDraft::full_name(),
        model.floors().len(),
        model.total_unit_count()
    );

    Ok(DraftCommandResponse {
        snapshot: model.snapshot(),
        affected_floors: outcome.affected_floors,
        message: command.success_message(&outcome),
        model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_building::inventory::InventoryError;
    use contracts::usecases::u502_edit_inventory_draft::DraftCommand;

    #[test]
    fn test_new_draft_uses_config() {
        let config = DraftConfig {
            default_total_floors: 3,
            default_units_per_floor: 2,
        };
        let model = new_draft(&config);
        assert_eq!(model.floors().len(), 3);
        assert_eq!(model.total_unit_count(), 6);
    }

    #[test]
    fn test_execute_copy_floor() {
        let request = DraftCommandRequest {
            model: InventoryModel::new(3, 2),
            command: DraftCommand::CopyFloorToAll {
                source_floor: 1,
                confirmed: true,
            },
        };

        let response = execute(request).unwrap();

        assert_eq!(response.affected_floors, Some(2));
        assert_eq!(response.snapshot.total_unit_count, 6);
        assert_eq!(response.model.total_unit_count(), 6);
    }

    #[test]
    fn test_execute_reports_structural_error() {
        let request = DraftCommandRequest {
            model: InventoryModel::new(2, 2),
            command: DraftCommand::ApplyFirstFloorToRepeater { confirmed: true },
        };

        let err = execute(request).unwrap_err();

        assert_eq!(
            err,
            DraftCommandError::Inventory(InventoryError::InsufficientFloorsForRepeater {
                floors: 2
            })
        );
    }
}
