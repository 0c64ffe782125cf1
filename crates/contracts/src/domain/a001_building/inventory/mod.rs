//! Конструктор этажей и единиц для черновика нового здания.
//!
//! Каждая изменяющая операция заканчивается полной перенумерацией единиц,
//! поэтому номера всегда идут сплошным рядом "1".."N" по этажам.

pub mod error;
pub mod floor;
pub mod model;
pub mod numbering;
pub mod resize;
pub mod structure;
pub mod template;
pub mod unit;
pub mod validation;

pub use error::{DraftValidationError, InventoryError};
pub use floor::Floor;
pub use model::{FloorSnapshot, InventoryModel, InventorySnapshot, DEFAULT_UNITS_PER_FLOOR};
pub use unit::{Unit, UnitAttributes, UnitRow};
pub use validation::RequiredField;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::FloorPlan;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_invariants(model: &InventoryModel) {
        assert!(!model.floors().is_empty());
        let mut expected = 1usize;
        for (i, floor) in model.floors().iter().enumerate() {
            assert_eq!(floor.number() as usize, i + 1);
            assert_eq!(floor.units_per_floor(), floor.units().len());
            for unit in floor.units() {
                assert_eq!(unit.floor_number, floor.number());
                assert_eq!(unit.label, expected.to_string());
                expected += 1;
            }
        }
        assert_eq!(model.total_unit_count(), expected - 1);
        assert!(model.validate(&[]).is_ok());
    }

    fn random_step(model: &mut InventoryModel, rng: &mut StdRng) {
        let floors = model.floors().len() as u32;
        let floor_number = rng.gen_range(1..=floors + 1);
        let before = model.clone();
        let result = match rng.gen_range(0..8) {
            0 => {
                model.resize(rng.gen_range(1..=6), rng.gen_range(1..=5));
                Ok(())
            }
            1 => {
                model.add_floor();
                Ok(())
            }
            2 => model.remove_floor(floor_number),
            3 => model.update_floor_plan(floor_number, FloorPlan::Custom),
            4 => model.add_unit(floor_number),
            5 => {
                let index = rng.gen_range(0..5);
                model.remove_unit(floor_number, index)
            }
            6 => model.copy_floor_to_all(floor_number).map(|_| ()),
            _ => model.apply_first_floor_to_repeater().map(|_| ()),
        };
        if result.is_err() {
            assert_eq!(*model, before);
        }
    }

    #[test]
    fn test_invariants_hold_for_random_sequences() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut model = InventoryModel::default();
            assert_invariants(&model);
            for _ in 0..200 {
                random_step(&mut model, &mut rng);
                assert_invariants(&model);
            }
        }
    }
}
