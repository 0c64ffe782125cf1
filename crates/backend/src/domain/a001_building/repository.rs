use chrono::Utc;
use contracts::domain::a001_building::aggregate::{Building, BuildingId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_building")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub owner_name: String,
    pub address: String,
    pub city: String,
    pub district: String,
    pub guard_name: Option<String>,
    pub guard_phone: Option<String>,
    pub association_name: Option<String>,
    pub total_floors: i32,
    pub total_units: i32,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Building {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Building {
            base: BaseAggregate::with_metadata(
                BuildingId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            owner_name: m.owner_name,
            address: m.address,
            city: m.city,
            district: m.district,
            guard_name: m.guard_name,
            guard_phone: m.guard_phone,
            association_name: m.association_name,
            total_floors: m.total_floors,
            total_units: m.total_units,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Building>> {
    let mut items: Vec<Building> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| {
        a.base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase())
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Building>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Вставка в рамках транзакции записи черновика
pub async fn insert_txn(txn: &DatabaseTransaction, aggregate: &Building) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        owner_name: Set(aggregate.owner_name.clone()),
        address: Set(aggregate.address.clone()),
        city: Set(aggregate.city.clone()),
        district: Set(aggregate.district.clone()),
        guard_name: Set(aggregate.guard_name.clone()),
        guard_phone: Set(aggregate.guard_phone.clone()),
        association_name: Set(aggregate.association_name.clone()),
        total_floors: Set(aggregate.total_floors),
        total_units: Set(aggregate.total_units),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(txn).await?;
    Ok(uuid)
}

/// Мягкое удаление в рамках транзакции; единицы помечаются той же транзакцией
pub async fn soft_delete_txn(txn: &DatabaseTransaction, id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(txn)
        .await?;
    Ok(result.rows_affected > 0)
}
