use super::error::InventoryError;
use super::model::InventoryModel;

impl InventoryModel {
    /// Скопировать единицы этажа-источника на все остальные этажи.
    ///
    /// Операция разрушающая: прежние единицы остальных этажей заменяются.
    /// Подтверждение пользователя остаётся на стороне вызывающего кода.
    /// Возвращает количество перезаписанных этажей.
    pub fn copy_floor_to_all(&mut self, source_floor: u32) -> Result<usize, InventoryError> {
        let source_index = self.floor_index(source_floor)?;
        let source = &self.floors[source_index];
        if source.units.is_empty() {
            tracing::warn!("Refused to copy empty floor {}", source_floor);
            return Err(InventoryError::EmptySourceFloor {
                floor_number: source_floor,
            });
        }
        let template = source.units.clone();
        let floor_plan = source.floor_plan;

        let mut affected = 0;
        for (i, floor) in self.floors.iter_mut().enumerate() {
            if i != source_index {
                floor.adopt_template(&template, floor_plan);
                affected += 1;
            }
        }
        self.renumber();

        tracing::debug!(
            "Floor {} copied to {} floors ({} units each)",
            source_floor,
            affected,
            template.len()
        );
        Ok(affected)
    }

    /// Применить первый этаж к повторяющимся этажам: всем, что строго между
    /// первым и последним. Первый и последний этажи не меняются.
    ///
    /// Возвращает количество перезаписанных этажей.
    pub fn apply_first_floor_to_repeater(&mut self) -> Result<usize, InventoryError> {
        let floors = self.floors.len();
        if floors < 3 {
            tracing::warn!("Repeater band is empty for {} floors", floors);
            return Err(InventoryError::InsufficientFloorsForRepeater { floors });
        }
        let first = &self.floors[0];
        if first.units.is_empty() {
            tracing::warn!("Refused to repeat empty first floor");
            return Err(InventoryError::EmptySourceFloor { floor_number: 1 });
        }
        let template = first.units.clone();
        let floor_plan = first.floor_plan;

        let band = &mut self.floors[1..floors - 1];
        for floor in band.iter_mut() {
            floor.adopt_template(&template, floor_plan);
        }
        let affected = band.len();
        self.renumber();

        tracing::debug!("First floor applied to {} repeater floors", affected);
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a001_building::inventory::{
        Floor, InventoryError, InventoryModel, UnitAttributes,
    };
    use crate::enums::{AcType, FloorPlan, UnitFacing, UnitType};

    fn attributes(model: &InventoryModel, floor_index: usize) -> Vec<UnitAttributes> {
        model.floors()[floor_index]
            .units()
            .iter()
            .map(|u| u.attributes.clone())
            .collect()
    }

    fn attributes_of(floor: &Floor) -> Vec<UnitAttributes> {
        floor.units().iter().map(|u| u.attributes.clone()).collect()
    }

    fn labels(model: &InventoryModel) -> Vec<String> {
        model
            .floors()
            .iter()
            .flat_map(|f| f.units().iter().map(|u| u.label.clone()))
            .collect()
    }

    fn expected_labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_copy_floor_to_all() {
        let mut model = InventoryModel::new(4, 2);
        model.add_unit(2).unwrap();
        {
            let a = model.unit_attributes_mut(2, 0).unwrap();
            a.unit_type = UnitType::Penthouse;
            a.area = 210.0;
        }
        {
            let b = model.unit_attributes_mut(2, 1).unwrap();
            b.facing = UnitFacing::Corner;
            b.maid_room = true;
        }
        {
            let c = model.unit_attributes_mut(2, 2).unwrap();
            c.ac_type = AcType::Central;
            c.price = Some(850_000.0);
        }
        let source = attributes(&model, 1);
        let source_plan = model.floors()[1].floor_plan();

        let affected = model.copy_floor_to_all(2).unwrap();

        assert_eq!(affected, 3);
        for (i, floor) in model.floors().iter().enumerate() {
            assert_eq!(floor.units_per_floor(), 3);
            assert_eq!(floor.floor_plan(), source_plan);
            assert_eq!(attributes(&model, i), source);
            assert!(floor.units().iter().all(|u| u.floor_number == floor.number()));
        }
        assert_eq!(model.total_unit_count(), 12);
        assert_eq!(labels(&model), expected_labels(12));
    }

    #[test]
    fn test_copy_empty_floor_is_rejected() {
        let mut model = InventoryModel::new(3, 1);
        model.remove_unit(2, 0).unwrap();
        let before = model.clone();

        let err = model.copy_floor_to_all(2).unwrap_err();

        assert_eq!(err, InventoryError::EmptySourceFloor { floor_number: 2 });
        assert_eq!(model, before);
    }

    #[test]
    fn test_apply_first_floor_to_repeater() {
        let mut model = InventoryModel::new(5, 2);
        model.update_floor_plan(1, FloorPlan::Custom).unwrap();
        model.add_unit(1).unwrap();
        model.unit_attributes_mut(1, 2).unwrap().area = 64.0;
        model.unit_attributes_mut(5, 0).unwrap().area = 300.0;
        model.remove_unit(5, 1).unwrap();
        let first = model.floors()[0].clone();
        let last = model.floors()[4].clone();

        let affected = model.apply_first_floor_to_repeater().unwrap();

        assert_eq!(affected, 3);
        assert_eq!(model.floors()[0].units().len(), first.units().len());
        assert_eq!(attributes(&model, 0), attributes_of(&first));
        assert_eq!(model.floors()[0].floor_plan(), FloorPlan::Custom);
        for i in 1..4 {
            assert_eq!(attributes(&model, i), attributes_of(&first));
            assert_eq!(model.floors()[i].floor_plan(), FloorPlan::Custom);
        }
        assert_eq!(attributes(&model, 4), attributes_of(&last));
        assert_eq!(model.floors()[4].floor_plan(), last.floor_plan());
        assert_eq!(model.total_unit_count(), 13);
        assert_eq!(labels(&model), expected_labels(13));
    }

    #[test]
    fn test_repeater_needs_three_floors() {
        let mut model = InventoryModel::new(2, 2);
        let before = model.clone();

        let err = model.apply_first_floor_to_repeater().unwrap_err();

        assert_eq!(err, InventoryError::InsufficientFloorsForRepeater { floors: 2 });
        assert_eq!(model, before);
    }

    #[test]
    fn test_repeater_rejects_empty_first_floor() {
        let mut model = InventoryModel::new(3, 1);
        model.remove_unit(1, 0).unwrap();
        let before = model.clone();

        let err = model.apply_first_floor_to_repeater().unwrap_err();

        assert_eq!(err, InventoryError::EmptySourceFloor { floor_number: 1 });
        assert_eq!(model, before);
    }
}
