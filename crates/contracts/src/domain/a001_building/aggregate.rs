use serde::{Deserialize, Serialize};

use super::inventory::RequiredField;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор здания
    BuildingId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Здание (шапка карточки). Название хранится в `base.description`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    #[serde(flatten)]
    pub base: BaseAggregate<BuildingId>,

    #[serde(rename = "ownerName")]
    pub owner_name: String,
    pub address: String,
    pub city: String,
    pub district: String,

    /// Охранник (حارس العمارة)
    #[serde(rename = "guardName")]
    pub guard_name: Option<String>,
    #[serde(rename = "guardPhone")]
    pub guard_phone: Option<String>,

    /// Ассоциация собственников (اتحاد الملاك)
    #[serde(rename = "associationName")]
    pub association_name: Option<String>,

    #[serde(rename = "totalFloors")]
    pub total_floors: i32,
    #[serde(rename = "totalUnits")]
    pub total_units: i32,
}

impl Building {
    /// Создать новое здание для вставки в БД
    pub fn new_for_insert(code: String, dto: &BuildingDto) -> Self {
        let mut base = BaseAggregate::new(BuildingId::new_v4(), code, dto.name.clone());
        base.comment = dto.comment.clone();

        Self {
            base,
            owner_name: dto.owner_name.clone(),
            address: dto.address.clone(),
            city: dto.city.clone(),
            district: dto.district.clone(),
            guard_name: dto.guard_name.clone(),
            guard_phone: dto.guard_phone.clone(),
            association_name: dto.association_name.clone(),
            total_floors: 0,
            total_units: 0,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Building {
    type Id = BuildingId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "building"
    }

    fn element_name() -> &'static str {
        "عمارة"
    }

    fn list_name() -> &'static str {
        "العمارات"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Поля карточки здания из формы черновика
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuildingDto {
    pub code: Option<String>,
    pub name: String,

    #[serde(rename = "ownerName")]
    pub owner_name: String,

    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,

    #[serde(rename = "guardName", default)]
    pub guard_name: Option<String>,
    #[serde(rename = "guardPhone", default)]
    pub guard_phone: Option<String>,
    #[serde(rename = "associationName", default)]
    pub association_name: Option<String>,

    pub comment: Option<String>,
}

impl BuildingDto {
    /// Обязательные поля, проверяемые перед записью черновика
    pub fn required_fields(&self) -> Vec<RequiredField<'_>> {
        vec![
            RequiredField::new("name", &self.name),
            RequiredField::new("ownerName", &self.owner_name),
        ]
    }
}
