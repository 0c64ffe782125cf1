use std::collections::HashMap;

use super::error::DraftValidationError;
use super::model::InventoryModel;

/// Обязательное поле карточки здания: имя поля и введённое значение
#[derive(Debug, Clone, Copy)]
pub struct RequiredField<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> RequiredField<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

impl InventoryModel {
    /// Проверка черновика перед передачей в хранилище.
    ///
    /// Собирает все нарушения сразу, не останавливаясь на первом.
    pub fn validate(&self, required: &[RequiredField<'_>]) -> Result<(), Vec<DraftValidationError>> {
        let mut errors = Vec::new();

        // Номера единиц
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for floor in &self.floors {
            for unit in &floor.units {
                let label = unit.label.trim();
                if label.is_empty() {
                    errors.push(DraftValidationError::EmptyUnitNumber {
                        floor_number: floor.number,
                    });
                    continue;
                }
                let count = counts.entry(label).or_insert(0);
                if *count == 0 {
                    order.push(label);
                }
                *count += 1;
            }
        }
        let duplicates: Vec<String> = order
            .into_iter()
            .filter(|label| counts.get(label).copied().unwrap_or(0) > 1)
            .map(str::to_string)
            .collect();
        if !duplicates.is_empty() {
            errors.push(DraftValidationError::DuplicateUnitNumbers { labels: duplicates });
        }

        // Пропуски и чужие номера: только когда нет пустых и повторов
        if errors.is_empty() {
            if let Some(violation) = self.first_out_of_sequence() {
                errors.push(violation);
            }
        }

        // Диапазоны атрибутов
        for unit in self.floors.iter().flat_map(|f| f.units.iter()) {
            let attrs = &unit.attributes;
            let mut invalid = |field: &str| {
                errors.push(DraftValidationError::InvalidUnitAttribute {
                    label: unit.label.clone(),
                    field: field.to_string(),
                })
            };
            if attrs.area.is_nan() || attrs.area < 0.0 {
                invalid("area");
            }
            if attrs.entrances == 0 {
                invalid("entrances");
            }
            if matches!(attrs.price, Some(price) if price.is_nan() || price < 0.0) {
                invalid("price");
            }
        }

        // Обязательные поля здания
        for field in required {
            if field.value.trim().is_empty() {
                errors.push(DraftValidationError::MissingRequiredField {
                    field: field.name.to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::warn!("Draft validation found {} problems", errors.len());
            Err(errors)
        }
    }

    /// Первая единица, чей номер расходится со сквозным порядком "1".."N"
    fn first_out_of_sequence(&self) -> Option<DraftValidationError> {
        self.floors
            .iter()
            .flat_map(|floor| floor.units.iter().map(move |unit| (floor.number, unit)))
            .zip(1usize..)
            .find(|((_, unit), expected)| unit.label != expected.to_string())
            .map(
                |((floor_number, unit), expected)| DraftValidationError::UnitNumberOutOfSequence {
                    floor_number,
                    expected: expected.to_string(),
                    found: unit.label.clone(),
                },
            )
    }
}
