use super::error::InventoryError;
use super::floor::Floor;
use super::model::InventoryModel;
use super::unit::Unit;
use crate::enums::FloorPlan;

impl InventoryModel {
    /// Добавить этаж в конец здания
    pub fn add_floor(&mut self) {
        let number = self.floors.len() as u32 + 1;
        let count = self.units_for_new_floor();
        self.floors.push(Floor::with_default_units(number, count));
        self.target_total_floors = self.floors.len();
        self.renumber();

        tracing::debug!("Floor {} added with {} units", number, count);
    }

    /// Удалить этаж. Оставшиеся этажи сдвигаются вниз вместе со своими единицами.
    pub fn remove_floor(&mut self, floor_number: u32) -> Result<(), InventoryError> {
        if self.floors.len() == 1 {
            tracing::warn!("Refused to remove the only floor");
            return Err(InventoryError::CannotRemoveLastFloor);
        }
        let index = self.floor_index(floor_number)?;

        self.floors.remove(index);
        self.reindex_floors();
        self.target_total_floors = self.floors.len();
        self.renumber();

        tracing::debug!(
            "Floor {} removed, {} floors left",
            floor_number,
            self.floors.len()
        );
        Ok(())
    }

    /// Сменить шаблон планировки этажа.
    ///
    /// Все единицы этажа заменяются новыми в количестве из настроек черновика,
    /// прежние данные этажа теряются.
    pub fn update_floor_plan(
        &mut self,
        floor_number: u32,
        floor_plan: FloorPlan,
    ) -> Result<(), InventoryError> {
        let index = self.floor_index(floor_number)?;
        let count = self.target_units_per_floor;

        let floor = &mut self.floors[index];
        floor.units = (0..count).map(|_| Unit::new(floor_number)).collect();
        floor.floor_plan = floor_plan;
        self.renumber();

        tracing::debug!(
            "Floor {} reset to plan {} with {} units",
            floor_number,
            floor_plan,
            count
        );
        Ok(())
    }

    /// Добавить единицу в конец этажа
    pub fn add_unit(&mut self, floor_number: u32) -> Result<(), InventoryError> {
        let index = self.floor_index(floor_number)?;
        self.floors[index].units.push(Unit::new(floor_number));
        self.renumber();
        Ok(())
    }

    /// Удалить единицу этажа по позиции. Этаж может остаться без единиц.
    pub fn remove_unit(&mut self, floor_number: u32, index: usize) -> Result<(), InventoryError> {
        let floor_index = self.floor_index(floor_number)?;
        let units = &mut self.floors[floor_index].units;
        if index >= units.len() {
            return Err(InventoryError::UnitNotFound {
                floor_number,
                index,
            });
        }
        units.remove(index);
        self.renumber();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a001_building::inventory::{InventoryError, InventoryModel};
    use crate::enums::FloorPlan;

    fn labels(model: &InventoryModel) -> Vec<String> {
        model
            .floors()
            .iter()
            .flat_map(|f| f.units().iter().map(|u| u.label.clone()))
            .collect()
    }

    #[test]
    fn test_add_floor_uses_first_floor_size() {
        let mut model = InventoryModel::new(2, 3);
        model.add_unit(1).unwrap();

        model.add_floor();

        assert_eq!(model.floors().len(), 3);
        assert_eq!(model.floors()[2].number(), 3);
        assert_eq!(model.floors()[2].units_per_floor(), 4);
        assert_eq!(model.floors()[2].floor_plan(), FloorPlan::FourUnits);
        assert_eq!(model.total_unit_count(), 11);
        assert_eq!(labels(&model).last().map(String::as_str), Some("11"));
    }

    #[test]
    fn test_add_floor_falls_back_to_target_when_first_floor_empty() {
        let mut model = InventoryModel::new(1, 2);
        model.remove_unit(1, 0).unwrap();
        model.remove_unit(1, 0).unwrap();

        model.add_floor();

        assert_eq!(model.floors()[1].units_per_floor(), 2);
    }

    #[test]
    fn test_remove_floor_shifts_content_down() {
        let mut model = InventoryModel::new(5, 2);
        for floor_number in 1..=5u32 {
            for index in 0..2 {
                model.unit_attributes_mut(floor_number, index).unwrap().area =
                    floor_number as f64 * 10.0 + 7.0;
            }
        }
        model.unit_attributes_mut(3, 0).unwrap().area = 77.0;

        model.remove_floor(3).unwrap();

        assert_eq!(model.floors().len(), 4);
        let numbers: Vec<u32> = model.floors().iter().map(|f| f.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(model.floors()[2].units()[0].attributes.area, 47.0);
        assert_eq!(model.floors()[3].units()[0].attributes.area, 57.0);
        assert!(model.floors()[2].units().iter().all(|u| u.floor_number == 3));
        assert!(model
            .floors()
            .iter()
            .flat_map(|f| f.units())
            .all(|u| u.attributes.area != 77.0));
        assert_eq!(labels(&model), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert_eq!(model.target_total_floors(), 4);
    }

    #[test]
    fn test_remove_last_remaining_floor_is_rejected() {
        let mut model = InventoryModel::new(1, 3);
        let before = model.clone();

        let err = model.remove_floor(1).unwrap_err();

        assert_eq!(err, InventoryError::CannotRemoveLastFloor);
        assert_eq!(model, before);
    }

    #[test]
    fn test_remove_unknown_floor_is_rejected() {
        let mut model = InventoryModel::new(2, 1);
        let before = model.clone();
        assert_eq!(
            model.remove_floor(5).unwrap_err(),
            InventoryError::FloorNotFound { floor_number: 5 }
        );
        assert_eq!(model, before);
    }

    #[test]
    fn test_update_floor_plan_resets_floor() {
        let mut model = InventoryModel::new(2, 3);
        model.add_unit(2).unwrap();
        model.unit_attributes_mut(2, 0).unwrap().area = 150.0;

        model.update_floor_plan(2, FloorPlan::Custom).unwrap();

        let floor = &model.floors()[1];
        assert_eq!(floor.floor_plan(), FloorPlan::Custom);
        assert_eq!(floor.units_per_floor(), 3);
        assert!(floor.units().iter().all(|u| u.attributes.area == 0.0));
        assert_eq!(labels(&model), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_add_and_remove_unit_renumber() {
        let mut model = InventoryModel::new(2, 2);
        model.add_unit(1).unwrap();
        assert_eq!(model.floors()[0].units_per_floor(), 3);
        assert_eq!(model.floors()[1].units()[0].label, "4");

        model.unit_attributes_mut(1, 2).unwrap().area = 33.0;
        model.remove_unit(1, 0).unwrap();
        assert_eq!(model.floors()[0].units()[1].attributes.area, 33.0);
        assert_eq!(model.floors()[0].units()[1].label, "2");
        assert_eq!(labels(&model), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_remove_unit_may_empty_a_floor() {
        let mut model = InventoryModel::new(2, 1);
        model.remove_unit(1, 0).unwrap();
        assert_eq!(model.floors()[0].units_per_floor(), 0);
        assert_eq!(model.floors()[1].units()[0].label, "1");
    }

    #[test]
    fn test_remove_unit_out_of_range() {
        let mut model = InventoryModel::new(1, 2);
        let before = model.clone();
        assert_eq!(
            model.remove_unit(1, 2).unwrap_err(),
            InventoryError::UnitNotFound {
                floor_number: 1,
                index: 2
            }
        );
        assert_eq!(model, before);
    }
}
