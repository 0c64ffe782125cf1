use chrono::Utc;
use contracts::domain::a001_building::inventory::UnitAttributes;
use contracts::domain::a002_unit::aggregate::{ResidentialUnit, ResidentialUnitId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::{AcType, UnitFacing, UnitStatus, UnitType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_unit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub building_ref: String,
    pub floor_number: i32,
    pub unit_type: String,
    pub facing: String,
    pub area: f64,
    pub rooms: i32,
    pub bathrooms: i32,
    pub living_rooms: i32,
    pub kitchens: i32,
    pub maid_room: bool,
    pub driver_room: bool,
    pub entrances: i32,
    pub ac_type: String,
    pub status: String,
    pub price: Option<f64>,
    pub unit_description: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResidentialUnit {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        let attributes = UnitAttributes {
            unit_type: UnitType::from_code(&m.unit_type).unwrap_or_default(),
            facing: UnitFacing::from_code(&m.facing).unwrap_or_default(),
            area: m.area,
            rooms: m.rooms.max(0) as u32,
            bathrooms: m.bathrooms.max(0) as u32,
            living_rooms: m.living_rooms.max(0) as u32,
            kitchens: m.kitchens.max(0) as u32,
            maid_room: m.maid_room,
            driver_room: m.driver_room,
            entrances: m.entrances.max(1) as u32,
            ac_type: AcType::from_code(&m.ac_type).unwrap_or_default(),
            status: UnitStatus::from_code(&m.status).unwrap_or_default(),
            price: m.price,
            description: m.unit_description,
        };

        ResidentialUnit {
            base: BaseAggregate::with_metadata(
                ResidentialUnitId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            building_ref: m.building_ref,
            floor_number: m.floor_number,
            attributes,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Единицы здания: по этажам, внутри этажа по номеру
pub async fn list_by_building(building_ref: &str) -> anyhow::Result<Vec<ResidentialUnit>> {
    let mut items: Vec<ResidentialUnit> = Entity::find()
        .filter(Column::BuildingRef.eq(building_ref))
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::FloorNumber)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Номер хранится строкой, сортируем как число
    items.sort_by_key(|u| {
        (
            u.floor_number,
            u.label().parse::<u64>().unwrap_or(u64::MAX),
        )
    });
    Ok(items)
}

/// Вставка в рамках транзакции записи черновика
pub async fn insert_txn(
    txn: &DatabaseTransaction,
    aggregate: &ResidentialUnit,
) -> anyhow::Result<()> {
    let attrs = &aggregate.attributes;
    let active = ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        building_ref: Set(aggregate.building_ref.clone()),
        floor_number: Set(aggregate.floor_number),
        unit_type: Set(attrs.unit_type.code().to_string()),
        facing: Set(attrs.facing.code().to_string()),
        area: Set(attrs.area),
        rooms: Set(attrs.rooms as i32),
        bathrooms: Set(attrs.bathrooms as i32),
        living_rooms: Set(attrs.living_rooms as i32),
        kitchens: Set(attrs.kitchens as i32),
        maid_room: Set(attrs.maid_room),
        driver_room: Set(attrs.driver_room),
        entrances: Set(attrs.entrances as i32),
        ac_type: Set(attrs.ac_type.code().to_string()),
        status: Set(attrs.status.code().to_string()),
        price: Set(attrs.price),
        unit_description: Set(attrs.description.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(txn).await?;
    Ok(())
}

pub async fn soft_delete_by_building_txn(
    txn: &DatabaseTransaction,
    building_ref: &str,
) -> anyhow::Result<u64> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::BuildingRef.eq(building_ref))
        .filter(Column::IsDeleted.eq(false))
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}
