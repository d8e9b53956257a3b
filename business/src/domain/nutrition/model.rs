use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::domain::food::model::FoodItem;

/// Aggregated nutrition and cost values, derived on demand from
/// (food template, servings) pairs. A `None` field means no constituent
/// carried a value for it; that is reported as absent, never as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    pub calories: Option<BigDecimal>,
    pub protein_g: Option<BigDecimal>,
    pub carbs_g: Option<BigDecimal>,
    pub fat_g: Option<BigDecimal>,
    pub cost: Option<BigDecimal>,
}

impl NutritionTotals {
    /// Totals for a single consumed item: per-serving value times the
    /// number of servings, with absent values propagated.
    pub fn for_item(food_item: &FoodItem, servings: &BigDecimal) -> Self {
        let scaled = |value: &Option<BigDecimal>| value.as_ref().map(|v| v * servings);
        Self {
            calories: scaled(&food_item.nutrients.calories),
            protein_g: scaled(&food_item.nutrients.protein_g),
            carbs_g: scaled(&food_item.nutrients.carbs_g),
            fat_g: scaled(&food_item.nutrients.fat_g),
            cost: scaled(&food_item.cost_per_serving),
        }
    }

    /// Sums per-item totals field by field. Only items that carry a value
    /// contribute; a field no item provided stays absent.
    pub fn sum<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a NutritionTotals>,
    {
        items.into_iter().fold(Self::default(), |acc, item| Self {
            calories: add_present(acc.calories, &item.calories),
            protein_g: add_present(acc.protein_g, &item.protein_g),
            carbs_g: add_present(acc.carbs_g, &item.carbs_g),
            fat_g: add_present(acc.fat_g, &item.fat_g),
            cost: add_present(acc.cost, &item.cost),
        })
    }
}

fn add_present(acc: Option<BigDecimal>, value: &Option<BigDecimal>) -> Option<BigDecimal> {
    match (acc, value) {
        (Some(acc), Some(value)) => Some(acc + value),
        (None, Some(value)) => Some(value.clone()),
        (acc, None) => acc,
    }
}
