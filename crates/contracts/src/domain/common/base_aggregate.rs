use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    /// Бизнес-код записи (например, "BLD-0001")
    pub code: String,
    /// Описание/название записи
    pub description: String,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать агрегат с существующими метаданными (для загрузки из БД)
    pub fn with_metadata(
        id: Id,
        code: String,
        description: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            description,
            comment,
            metadata,
        }
    }

    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
