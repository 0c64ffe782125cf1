use serde::{Deserialize, Serialize};

use super::error::InventoryError;
use super::floor::Floor;
use super::unit::{Unit, UnitAttributes, UnitRow};
use crate::enums::FloorPlan;

/// Количество единиц на этаже для новой сессии
pub const DEFAULT_UNITS_PER_FLOOR: usize = 4;

/// Инвентарь этажей и единиц одного черновика здания.
///
/// После каждой публичной операции выполняется:
/// - `floors[i].number == i + 1`;
/// - этажей не меньше одного;
/// - номера единиц образуют ряд "1".."N" в порядке этаж, затем позиция на этаже.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawInventoryModel")]
pub struct InventoryModel {
    pub(crate) floors: Vec<Floor>,
    pub(crate) target_total_floors: usize,
    pub(crate) target_units_per_floor: usize,
}

/// Модель в том виде, в каком она приходит от клиента
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInventoryModel {
    floors: Vec<Floor>,
    #[serde(default)]
    target_total_floors: Option<usize>,
    #[serde(default)]
    target_units_per_floor: Option<usize>,
}

impl TryFrom<RawInventoryModel> for InventoryModel {
    type Error = String;

    /// Восстанавливает нумерацию этажей, но не трогает номера единиц:
    /// их проверяет `validate`.
    fn try_from(raw: RawInventoryModel) -> Result<Self, Self::Error> {
        let first_floor_units = match raw.floors.first() {
            Some(floor) => floor.units.len(),
            None => return Err("inventory must contain at least one floor".into()),
        };
        let target_total_floors = raw.target_total_floors.unwrap_or(raw.floors.len());
        let target_units_per_floor = raw.target_units_per_floor.unwrap_or(first_floor_units);

        let mut model = Self {
            floors: raw.floors,
            target_total_floors: target_total_floors.max(1),
            target_units_per_floor: target_units_per_floor.max(1),
        };
        model.reindex_floors();
        Ok(model)
    }
}

/// Снимок этажа только для чтения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorSnapshot {
    pub number: u32,
    pub floor_plan: FloorPlan,
    pub units_per_floor: usize,
    pub units: Vec<Unit>,
}

/// Снимок всего инвентаря для UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub floors: Vec<FloorSnapshot>,
    pub total_unit_count: usize,
}

impl InventoryModel {
    /// Новая модель для сессии черновика
    pub fn new(total_floors: usize, units_per_floor: usize) -> Self {
        let mut model = Self {
            floors: vec![Floor::with_default_units(1, units_per_floor)],
            target_total_floors: 1,
            target_units_per_floor: units_per_floor,
        };
        model.resize(total_floors, units_per_floor);
        model
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, floor_number: u32) -> Result<&Floor, InventoryError> {
        let index = self.floor_index(floor_number)?;
        Ok(&self.floors[index])
    }

    pub fn target_total_floors(&self) -> usize {
        self.target_total_floors
    }

    pub fn target_units_per_floor(&self) -> usize {
        self.target_units_per_floor
    }

    pub fn total_unit_count(&self) -> usize {
        self.floors.iter().map(Floor::units_per_floor).sum()
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            floors: self
                .floors
                .iter()
                .map(|floor| FloorSnapshot {
                    number: floor.number,
                    floor_plan: floor.floor_plan,
                    units_per_floor: floor.units_per_floor(),
                    units: floor.units.clone(),
                })
                .collect(),
            total_unit_count: self.total_unit_count(),
        }
    }

    /// Доступ на запись к атрибутам единицы (редактирование карточки в UI).
    /// Номер и этаж единицы через него изменить нельзя.
    pub fn unit_attributes_mut(
        &mut self,
        floor_number: u32,
        index: usize,
    ) -> Result<&mut UnitAttributes, InventoryError> {
        let floor_index = self.floor_index(floor_number)?;
        self.floors[floor_index]
            .units
            .get_mut(index)
            .map(|unit| &mut unit.attributes)
            .ok_or(InventoryError::UnitNotFound {
                floor_number,
                index,
            })
    }

    /// Передать черновик в хранилище. Модель поглощается: после передачи
    /// она больше не редактируется.
    pub fn into_unit_rows(self) -> Vec<UnitRow> {
        self.floors
            .into_iter()
            .flat_map(|floor| floor.units.into_iter().map(UnitRow::from))
            .collect()
    }

    pub(crate) fn floor_index(&self, floor_number: u32) -> Result<usize, InventoryError> {
        (floor_number as usize)
            .checked_sub(1)
            .filter(|i| *i < self.floors.len())
            .ok_or(InventoryError::FloorNotFound { floor_number })
    }

    /// Количество единиц для нового этажа: как на первом этаже,
    /// а если он пуст, то из настроек черновика
    pub(crate) fn units_for_new_floor(&self) -> usize {
        match self.floors.first().map(Floor::units_per_floor) {
            Some(count) if count > 0 => count,
            _ => self.target_units_per_floor,
        }
    }

    /// Сделать номера этажей сплошными, начиная с 1
    pub(crate) fn reindex_floors(&mut self) {
        for (i, floor) in self.floors.iter_mut().enumerate() {
            floor.set_number(i as u32 + 1);
        }
    }
}

impl Default for InventoryModel {
    fn default() -> Self {
        Self::new(1, DEFAULT_UNITS_PER_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let model = InventoryModel::default();
        assert_eq!(model.floors().len(), 1);
        assert_eq!(model.total_unit_count(), DEFAULT_UNITS_PER_FLOOR);
        let labels: Vec<&str> = model.floors()[0]
            .units()
            .iter()
            .map(|u| u.label.as_str())
            .collect();
        assert_eq!(labels, vec!["1", "2", "3", "4"]);
        assert_eq!(model.floors()[0].floor_plan(), FloorPlan::FourUnits);
    }

    #[test]
    fn test_snapshot_counts() {
        let model = InventoryModel::new(3, 2);
        let snapshot = model.snapshot();
        assert_eq!(snapshot.total_unit_count, 6);
        assert_eq!(snapshot.floors.len(), 3);
        assert!(snapshot.floors.iter().all(|f| f.units_per_floor == 2));
        assert_eq!(snapshot.floors[2].number, 3);
    }

    #[test]
    fn test_floor_lookup_out_of_range() {
        let model = InventoryModel::new(2, 2);
        assert!(model.floor(1).is_ok());
        assert_eq!(
            model.floor(0).unwrap_err(),
            InventoryError::FloorNotFound { floor_number: 0 }
        );
        assert_eq!(
            model.floor(3).unwrap_err(),
            InventoryError::FloorNotFound { floor_number: 3 }
        );
    }

    #[test]
    fn test_unit_attributes_mut() {
        let mut model = InventoryModel::new(2, 2);
        model.unit_attributes_mut(2, 1).unwrap().area = 140.0;
        assert_eq!(model.floors()[1].units()[1].attributes.area, 140.0);
        assert_eq!(model.floors()[1].units()[1].label, "4");

        let err = model.unit_attributes_mut(2, 5).unwrap_err();
        assert_eq!(
            err,
            InventoryError::UnitNotFound {
                floor_number: 2,
                index: 5
            }
        );
    }

    #[test]
    fn test_into_unit_rows_is_floor_major() {
        let model = InventoryModel::new(2, 3);
        let rows = model.into_unit_rows();
        assert_eq!(rows.len(), 6);
        let pairs: Vec<(u32, &str)> = rows
            .iter()
            .map(|r| (r.floor_number, r.label.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![(1, "1"), (1, "2"), (1, "3"), (2, "4"), (2, "5"), (2, "6")]
        );
    }

    #[test]
    fn test_deserialize_repairs_floor_numbers_only() {
        let mut model = InventoryModel::new(2, 1);
        model.floors[1].units[0].label = "1".into();
        let mut json = serde_json::to_value(&model).unwrap();
        json["floors"][0]["number"] = serde_json::json!(7);
        json["floors"][1]["number"] = serde_json::json!(9);

        let parsed: InventoryModel = serde_json::from_value(json).unwrap();

        assert_eq!(parsed.floors()[0].number(), 1);
        assert_eq!(parsed.floors()[1].number(), 2);
        assert_eq!(parsed.floors()[1].units()[0].floor_number, 2);
        assert_eq!(parsed.floors()[1].units()[0].label, "1");
    }

    #[test]
    fn test_deserialize_rejects_empty_floors() {
        let json = serde_json::json!({ "floors": [] });
        let parsed: Result<InventoryModel, _> = serde_json::from_value(json);
        assert!(parsed.is_err());
    }
}
