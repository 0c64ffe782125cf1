use super::repository;
use crate::domain::a002_unit;
use crate::shared::data::db::get_connection;
use contracts::domain::a001_building::aggregate::Building;
use contracts::domain::a002_unit::aggregate::ResidentialUnit;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

/// Получение списка всех зданий
pub async fn list_all() -> anyhow::Result<Vec<Building>> {
    repository::list_all().await
}

/// Получение здания по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Building>> {
    repository::get_by_id(id).await
}

/// Единицы здания в порядке номеров
pub async fn list_units(id: Uuid) -> anyhow::Result<Vec<ResidentialUnit>> {
    a002_unit::repository::list_by_building(&id.to_string()).await
}

/// Мягкое удаление здания вместе с его единицами
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    delete_in(get_connection(), id).await
}

/// Здание и его единицы помечаются одной транзакцией: либо всё, либо ничего
async fn delete_in(db: &DatabaseConnection, id: Uuid) -> anyhow::Result<bool> {
    let txn = db.begin().await?;

    if !repository::soft_delete_txn(&txn, id).await? {
        txn.rollback().await?;
        return Ok(false);
    }
    let units = a002_unit::repository::soft_delete_by_building_txn(&txn, &id.to_string()).await?;

    txn.commit().await?;
    tracing::info!("Building {} deleted with {} units", id, units);
    Ok(true)
}
