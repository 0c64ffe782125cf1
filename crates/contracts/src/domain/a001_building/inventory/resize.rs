use super::floor::Floor;
use super::model::InventoryModel;
use crate::enums::FloorPlan;

impl InventoryModel {
    /// Привести структуру к заданному числу этажей и единиц на этаже.
    ///
    /// Недостающие этажи и единицы добавляются с атрибутами по умолчанию,
    /// лишние обрезаются с конца. Данные сохранившихся позиций не меняются.
    /// Шаблон планировки каждого этажа выводится заново из `units_per_floor`.
    pub fn resize(&mut self, total_floors: usize, units_per_floor: usize) {
        let total_floors = total_floors.max(1);

        if self.floors.len() > total_floors {
            self.floors.truncate(total_floors);
        }
        while self.floors.len() < total_floors {
            let number = self.floors.len() as u32 + 1;
            self.floors
                .push(Floor::with_default_units(number, units_per_floor));
        }

        let floor_plan = FloorPlan::from_units_per_floor(units_per_floor);
        for floor in &mut self.floors {
            floor.fit_units(units_per_floor);
            floor.floor_plan = floor_plan;
        }

        self.target_total_floors = total_floors;
        self.target_units_per_floor = units_per_floor;
        self.renumber();

        tracing::debug!(
            "Inventory resized to {} floors x {} units",
            total_floors,
            units_per_floor
        );
    }
}
