use anyhow::Result;
use contracts::domain::a001_building::aggregate::Building;
use contracts::domain::a001_building::inventory::DraftValidationError;
use contracts::domain::a002_unit::aggregate::ResidentialUnit;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_create_building::{
    CreateBuilding, CreateBuildingRequest, CreateBuildingResponse,
};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::domain::{a001_building, a002_unit};
use crate::shared::data::db::get_connection;

/// Здание и единицы, готовые к записи
#[derive(Debug)]
pub struct PreparedBuilding {
    pub building: Building,
    pub units: Vec<ResidentialUnit>,
}

/// Проверить черновик и разложить его на записи.
///
/// Черновик поглощается: после этой точки он больше не редактируется,
/// независимо от исхода записи.
pub fn prepare(request: CreateBuildingRequest) -> Result<PreparedBuilding, Vec<DraftValidationError>> {
    let CreateBuildingRequest {
        building: dto,
        inventory,
    } = request;

    inventory.validate(&dto.required_fields())?;

    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("BLD-{}", &Uuid::new_v4().simple().to_string()[..8]));

    let mut building = Building::new_for_insert(code, &dto);
    building.total_floors = inventory.floors().len() as i32;
    building.total_units = inventory.total_unit_count() as i32;
    building.before_write();

    let building_ref = building.to_string_id();
    let units = inventory
        .into_unit_rows()
        .into_iter()
        .map(|row| ResidentialUnit::from_draft_row(&building_ref, row))
        .collect();

    Ok(PreparedBuilding { building, units })
}

/// Записать черновик здания одной транзакцией
pub async fn execute(request: CreateBuildingRequest) -> Result<CreateBuildingResponse> {
    let prepared = match prepare(request) {
        Ok(prepared) => prepared,
        Err(violations) => {
            tracing::warn!(
                "{}: draft rejected with {} violations",
                CreateBuilding::full_name(),
                violations.len()
            );
            return Ok(CreateBuildingResponse::Rejected { violations });
        }
    };

    let started_at = std::time::Instant::now();
    let db = get_connection();
    let txn = db.begin().await?;

    let building_id = a001_building::repository::insert_txn(&txn, &prepared.building).await?;
    for unit in &prepared.units {
        a002_unit::repository::insert_txn(&txn, unit).await?;
    }

    txn.commit().await?;

    tracing::info!(
        "{}: building {} ({}) created: floors={}, units={}, elapsed_ms={}",
        CreateBuilding::full_name(),
        prepared.building.base.code,
        building_id,
        prepared.building.total_floors,
        prepared.units.len(),
        started_at.elapsed().as_millis()
    );

    Ok(CreateBuildingResponse::Created {
        building_id: building_id.to_string(),
        code: prepared.building.base.code.clone(),
        units_created: prepared.units.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_building::aggregate::BuildingDto;
    use contracts::domain::a001_building::inventory::InventoryModel;

    fn dto(name: &str, owner: &str) -> BuildingDto {
        BuildingDto {
            name: name.into(),
            owner_name: owner.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prepare_flattens_draft() {
        let mut inventory = InventoryModel::new(3, 2);
        inventory.remove_unit(3, 1).unwrap();
        let request = CreateBuildingRequest {
            building: BuildingDto {
                code: Some("BLD-777".into()),
                ..dto("برج الريان", "فهد")
            },
            inventory,
        };

        let prepared = prepare(request).unwrap();

        assert_eq!(prepared.building.base.code, "BLD-777");
        assert_eq!(prepared.building.total_floors, 3);
        assert_eq!(prepared.building.total_units, 5);
        assert_eq!(prepared.units.len(), 5);
        let building_ref = prepared.building.to_string_id();
        assert!(prepared.units.iter().all(|u| u.building_ref == building_ref));
        let labels: Vec<&str> = prepared.units.iter().map(|u| u.label()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(prepared.units[4].floor_number, 3);
    }

    #[test]
    fn test_prepare_generates_code() {
        let request = CreateBuildingRequest {
            building: dto("برج", "مالك"),
            inventory: InventoryModel::default(),
        };
        let prepared = prepare(request).unwrap();
        assert!(prepared.building.base.code.starts_with("BLD-"));
        assert_eq!(prepared.building.base.code.len(), 12);
    }

    #[test]
    fn test_prepare_rejects_blank_fields() {
        let request = CreateBuildingRequest {
            building: dto(" ", ""),
            inventory: InventoryModel::default(),
        };

        let violations = prepare(request).unwrap_err();

        assert_eq!(
            violations,
            vec![
                DraftValidationError::MissingRequiredField {
                    field: "name".into()
                },
                DraftValidationError::MissingRequiredField {
                    field: "ownerName".into()
                },
            ]
        );
    }

    #[test]
    fn test_prepare_rejects_gapped_labels() {
        let mut json = serde_json::json!({
            "building": { "name": "برج", "ownerName": "مالك" },
            "inventory": InventoryModel::new(1, 2),
        });
        json["inventory"]["floors"][0]["units"][1]["label"] = serde_json::json!("7");
        let request: CreateBuildingRequest = serde_json::from_value(json).unwrap();

        let violations = prepare(request).unwrap_err();

        assert_eq!(
            violations,
            vec![DraftValidationError::UnitNumberOutOfSequence {
                floor_number: 1,
                expected: "2".into(),
                found: "7".into(),
            }]
        );
    }
}
