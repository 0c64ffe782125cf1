use serde::{Deserialize, Serialize};

use super::unit::Unit;
use crate::enums::FloorPlan;

/// Этаж черновика: упорядоченный список единиц и справочный шаблон планировки.
///
/// Количество единиц на этаже не хранится отдельно, а всегда вычисляется
/// из `units`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    #[serde(default)]
    pub(crate) number: u32,
    pub(crate) floor_plan: FloorPlan,
    pub(crate) units: Vec<Unit>,
}

impl Floor {
    /// Этаж с `count` новыми единицами, шаблон выводится из количества
    pub fn with_default_units(number: u32, count: usize) -> Self {
        Self {
            number,
            floor_plan: FloorPlan::from_units_per_floor(count),
            units: (0..count).map(|_| Unit::new(number)).collect(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn floor_plan(&self) -> FloorPlan {
        self.floor_plan
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn units_per_floor(&self) -> usize {
        self.units.len()
    }

    /// Подогнать количество единиц: дописать новые в конец или обрезать хвост.
    /// Данные сохранившихся позиций не меняются.
    pub(crate) fn fit_units(&mut self, count: usize) {
        let number = self.number;
        if self.units.len() > count {
            self.units.truncate(count);
        } else {
            self.units
                .extend((self.units.len()..count).map(|_| Unit::new(number)));
        }
    }

    /// Заменить все единицы структурной копией шаблона
    pub(crate) fn adopt_template(&mut self, template: &[Unit], floor_plan: FloorPlan) {
        let number = self.number;
        self.units = template.iter().map(|u| u.clone_for_floor(number)).collect();
        self.floor_plan = floor_plan;
    }

    /// Сменить номер этажа вместе с номером этажа у каждой единицы
    pub(crate) fn set_number(&mut self, number: u32) {
        self.number = number;
        for unit in &mut self.units {
            unit.floor_number = number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_units_grows_and_shrinks_tail() {
        let mut floor = Floor::with_default_units(1, 2);
        floor.units[0].attributes.area = 90.0;

        floor.fit_units(4);
        assert_eq!(floor.units_per_floor(), 4);
        assert_eq!(floor.units[0].attributes.area, 90.0);
        assert_eq!(floor.units[3].attributes.area, 0.0);

        floor.fit_units(1);
        assert_eq!(floor.units_per_floor(), 1);
        assert_eq!(floor.units[0].attributes.area, 90.0);
    }

    #[test]
    fn test_set_number_updates_units() {
        let mut floor = Floor::with_default_units(5, 3);
        floor.set_number(2);
        assert_eq!(floor.number(), 2);
        assert!(floor.units().iter().all(|u| u.floor_number == 2));
    }
}
