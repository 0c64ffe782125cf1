use serde::{Deserialize, Serialize};

use crate::domain::a001_building::inventory::{UnitAttributes, UnitRow};
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};

crate::uuid_aggregate_id!(
    /// Уникальный идентификатор жилой единицы
    ResidentialUnitId
);

/// Жилая единица здания. Номер единицы хранится в `base.code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidentialUnit {
    #[serde(flatten)]
    pub base: BaseAggregate<ResidentialUnitId>,

    /// UUID здания (a001)
    #[serde(rename = "buildingRef")]
    pub building_ref: String,

    #[serde(rename = "floorNumber")]
    pub floor_number: i32,

    pub attributes: UnitAttributes,
}

impl ResidentialUnit {
    /// Единица из строки черновика, переданного на запись
    pub fn from_draft_row(building_ref: &str, row: UnitRow) -> Self {
        let description = format!("الوحدة {} - الطابق {}", row.label, row.floor_number);
        let base = BaseAggregate::new(ResidentialUnitId::new_v4(), row.label, description);

        Self {
            base,
            building_ref: building_ref.to_string(),
            floor_number: row.floor_number as i32,
            attributes: row.attributes,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn label(&self) -> &str {
        &self.base.code
    }
}

impl AggregateRoot for ResidentialUnit {
    type Id = ResidentialUnitId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "unit"
    }

    fn element_name() -> &'static str {
        "وحدة سكنية"
    }

    fn list_name() -> &'static str {
        "الوحدات السكنية"
    }
}
