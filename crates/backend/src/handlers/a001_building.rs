use axum::{extract::Path, http::StatusCode, Json};

use contracts::domain::a001_building::aggregate::Building;
use contracts::domain::a001_building::inventory::{InventoryError, InventoryModel};
use contracts::domain::a002_unit::aggregate::ResidentialUnit;
use contracts::usecases::u501_create_building::{CreateBuildingRequest, CreateBuildingResponse};
use contracts::usecases::u502_edit_inventory_draft::{
    DraftCommandError, DraftCommandRequest, DraftCommandResponse,
};

use crate::domain::a001_building;
use crate::shared::config;
use crate::usecases::{u501_create_building, u502_edit_inventory_draft};

fn parse_id(id: &str) -> Result<uuid::Uuid, StatusCode> {
    uuid::Uuid::parse_str(id).map_err(|_| StatusCode::BAD_REQUEST)
}

/// GET /api/building
pub async fn list_all() -> Result<Json<Vec<Building>>, StatusCode> {
    match a001_building::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list buildings: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/building/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Building>, StatusCode> {
    let uuid = parse_id(&id)?;
    match a001_building::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load building {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/building/:id/units
pub async fn list_units(Path(id): Path<String>) -> Result<Json<Vec<ResidentialUnit>>, StatusCode> {
    let uuid = parse_id(&id)?;
    match a001_building::service::list_units(uuid).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to load units of building {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/building/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = parse_id(&id)?;
    match a001_building::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete building {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/building
pub async fn create(
    Json(request): Json<CreateBuildingRequest>,
) -> Result<(StatusCode, Json<CreateBuildingResponse>), StatusCode> {
    match u501_create_building::executor::execute(request).await {
        Ok(response) => Ok((create_status(&response), Json(response))),
        Err(e) => {
            tracing::error!("Failed to create building: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/building/draft/new
pub async fn new_draft() -> Json<InventoryModel> {
    Json(u502_edit_inventory_draft::executor::new_draft(
        &config::draft_config(),
    ))
}

/// POST /api/building/draft/command
pub async fn draft_command(
    Json(request): Json<DraftCommandRequest>,
) -> Result<Json<DraftCommandResponse>, (StatusCode, Json<DraftCommandError>)> {
    u502_edit_inventory_draft::executor::execute(request)
        .map(Json)
        .map_err(|e| (command_error_status(&e), Json(e)))
}

fn create_status(response: &CreateBuildingResponse) -> StatusCode {
    match response {
        CreateBuildingResponse::Created { .. } => StatusCode::CREATED,
        CreateBuildingResponse::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn command_error_status(error: &DraftCommandError) -> StatusCode {
    match error {
        DraftCommandError::ConfirmationRequired => StatusCode::BAD_REQUEST,
        DraftCommandError::Inventory(InventoryError::FloorNotFound { .. })
        | DraftCommandError::Inventory(InventoryError::UnitNotFound { .. }) => {
            StatusCode::NOT_FOUND
        }
        DraftCommandError::Inventory(_) => StatusCode::CONFLICT,
    }
}
