use serde::{Deserialize, Serialize};

use crate::enums::{AcType, UnitFacing, UnitStatus, UnitType};

/// Атрибуты жилой единицы (всё, кроме номера и этажа)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitAttributes {
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub facing: UnitFacing,
    /// Площадь, м²
    pub area: f64,
    pub rooms: u32,
    pub bathrooms: u32,
    pub living_rooms: u32,
    pub kitchens: u32,
    pub maid_room: bool,
    pub driver_room: bool,
    /// Количество входов, не меньше 1
    pub entrances: u32,
    pub ac_type: AcType,
    pub status: UnitStatus,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl Default for UnitAttributes {
    fn default() -> Self {
        Self {
            unit_type: UnitType::Apartment,
            facing: UnitFacing::Front,
            area: 0.0,
            rooms: 3,
            bathrooms: 2,
            living_rooms: 1,
            kitchens: 1,
            maid_room: false,
            driver_room: false,
            entrances: 1,
            ac_type: AcType::Split,
            status: UnitStatus::Available,
            price: None,
            description: None,
        }
    }
}

/// Жилая единица на этаже черновика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Сквозной номер единицы по зданию ("1", "2", ...)
    pub label: String,
    pub floor_number: u32,
    #[serde(flatten)]
    pub attributes: UnitAttributes,
}

impl Unit {
    /// Новая единица с атрибутами по умолчанию. Номер проставит перенумерация.
    pub fn new(floor_number: u32) -> Self {
        Self {
            label: String::new(),
            floor_number,
            attributes: UnitAttributes::default(),
        }
    }

    /// Структурная копия для другого этажа: атрибуты сохраняются, номер сбрасывается
    pub fn clone_for_floor(&self, floor_number: u32) -> Self {
        Self {
            label: String::new(),
            floor_number,
            attributes: self.attributes.clone(),
        }
    }
}

/// Плоская строка для передачи в хранилище: (этаж, атрибуты, номер)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRow {
    pub floor_number: u32,
    pub label: String,
    #[serde(flatten)]
    pub attributes: UnitAttributes,
}

impl From<Unit> for UnitRow {
    fn from(unit: Unit) -> Self {
        Self {
            floor_number: unit.floor_number,
            label: unit.label,
            attributes: unit.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unit_is_available() {
        let unit = Unit::new(2);
        assert_eq!(unit.floor_number, 2);
        assert!(unit.label.is_empty());
        assert_eq!(unit.attributes.status, UnitStatus::Available);
        assert_eq!(unit.attributes.entrances, 1);
    }

    #[test]
    fn test_clone_for_floor_keeps_attributes_only() {
        let mut unit = Unit::new(1);
        unit.label = "5".into();
        unit.attributes.area = 120.5;
        unit.attributes.unit_type = UnitType::Duplex;

        let copy = unit.clone_for_floor(3);

        assert_eq!(copy.floor_number, 3);
        assert!(copy.label.is_empty());
        assert_eq!(copy.attributes, unit.attributes);
    }

    #[test]
    fn test_unit_json_shape() {
        let mut unit = Unit::new(1);
        unit.label = "1".into();
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["label"], "1");
        assert_eq!(json["floorNumber"], 1);
        assert_eq!(json["type"], "apartment");
        assert_eq!(json["acType"], "split");
        assert_eq!(json["maidRoom"], false);
    }
}
