use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки структурных операций над черновиком.
///
/// Любая из них означает, что модель осталась без изменений.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InventoryError {
    #[error("لا يمكن حذف الطابق الوحيد في المبنى")]
    CannotRemoveLastFloor,

    #[error("الطابق {floor_number} لا يحتوي على وحدات لنسخها")]
    #[serde(rename_all = "camelCase")]
    EmptySourceFloor { floor_number: u32 },

    #[error("يلزم ثلاثة طوابق على الأقل لتطبيق الطابق المتكرر (الحالي: {floors})")]
    InsufficientFloorsForRepeater { floors: usize },

    #[error("الطابق {floor_number} غير موجود")]
    #[serde(rename_all = "camelCase")]
    FloorNotFound { floor_number: u32 },

    #[error("الوحدة رقم {index} غير موجودة في الطابق {floor_number}")]
    #[serde(rename_all = "camelCase")]
    UnitNotFound { floor_number: u32, index: usize },
}

/// Нарушения, найденные предварительной проверкой черновика перед записью
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DraftValidationError {
    #[error("يوجد وحدة بدون رقم في الطابق {floor_number}")]
    #[serde(rename_all = "camelCase")]
    EmptyUnitNumber { floor_number: u32 },

    #[error("أرقام وحدات مكررة: {}", labels.join(", "))]
    DuplicateUnitNumbers { labels: Vec<String> },

    #[error("ترقيم الوحدات غير متسلسل في الطابق {floor_number}: المتوقع {expected} والموجود {found}")]
    #[serde(rename_all = "camelCase")]
    UnitNumberOutOfSequence {
        floor_number: u32,
        expected: String,
        found: String,
    },

    #[error("الحقل المطلوب فارغ: {field}")]
    MissingRequiredField { field: String },

    #[error("قيمة غير صالحة للحقل {field} في الوحدة {label}")]
    InvalidUnitAttribute { label: String, field: String },
}
