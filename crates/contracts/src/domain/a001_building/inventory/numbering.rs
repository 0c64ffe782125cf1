use super::model::InventoryModel;

impl InventoryModel {
    /// Полная перенумерация единиц: этажи по порядку, внутри этажа по позиции.
    ///
    /// Меняются только номера, порядок этажей и единиц сохраняется.
    /// Вызывается в конце каждой изменяющей операции.
    pub(crate) fn renumber(&mut self) {
        let mut next = 1usize;
        for floor in &mut self.floors {
            for unit in &mut floor.units {
                unit.label = next.to_string();
                next += 1;
            }
        }
        tracing::debug!(
            "Inventory renumbered: {} floors, {} units",
            self.floors.len(),
            next - 1
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a001_building::inventory::InventoryModel;

    #[test]
    fn test_renumber_overwrites_stale_labels() {
        let mut model = InventoryModel::new(2, 2);
        model.floors[0].units[0].label = "42".into();
        model.floors[1].units[1].label = String::new();
        model.floors[1].units.swap(0, 1);

        model.renumber();

        let labels: Vec<String> = model
            .floors()
            .iter()
            .flat_map(|f| f.units().iter().map(|u| u.label.clone()))
            .collect();
        assert_eq!(labels, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_renumber_skips_empty_floors() {
        let mut model = InventoryModel::new(3, 1);
        model.floors[1].units.clear();

        model.renumber();

        assert_eq!(model.floors()[0].units()[0].label, "1");
        assert_eq!(model.floors()[2].units()[0].label, "2");
    }
}
