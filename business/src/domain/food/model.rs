use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::FoodItemError;
use crate::domain::shared::value_objects::UserId;

/// Per-serving nutrient values of a food template. Every field is
/// optional: `None` means the label did not state the value, which is
/// not the same as a confirmed zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: Option<BigDecimal>,
    pub protein_g: Option<BigDecimal>,
    pub carbs_g: Option<BigDecimal>,
    pub fat_g: Option<BigDecimal>,
    pub saturated_fat_g: Option<BigDecimal>,
    pub sodium_mg: Option<BigDecimal>,
    pub fiber_g: Option<BigDecimal>,
    pub sugar_g: Option<BigDecimal>,
}

impl NutrientProfile {
    fn validate(&self) -> Result<(), FoodItemError> {
        let fields = [
            &self.calories,
            &self.protein_g,
            &self.carbs_g,
            &self.fat_g,
            &self.saturated_fat_g,
            &self.sodium_mg,
            &self.fiber_g,
            &self.sugar_g,
        ];
        for field in fields {
            if let Some(value) = field
                && *value < BigDecimal::zero()
            {
                return Err(FoodItemError::NutrientNegative);
            }
        }
        Ok(())
    }
}

/// A reusable nutritional and cost profile for a kind of food, owned by a
/// user. Referenced by pantry items, logged items and recipe ingredients,
/// never embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: BigDecimal,
    pub serving_unit: String,
    pub nutrients: NutrientProfile,
    pub cost_per_serving: Option<BigDecimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewFoodItemProps {
    pub user_id: UserId,
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: BigDecimal,
    pub serving_unit: String,
    pub nutrients: NutrientProfile,
    pub cost_per_serving: Option<BigDecimal>,
}

impl FoodItem {
    pub fn new(props: NewFoodItemProps) -> Result<Self, FoodItemError> {
        if props.name.trim().is_empty() {
            return Err(FoodItemError::NameEmpty);
        }
        if props.serving_size <= BigDecimal::zero() {
            return Err(FoodItemError::ServingSizeNotPositive);
        }
        props.nutrients.validate()?;
        if let Some(cost) = &props.cost_per_serving
            && *cost < BigDecimal::zero()
        {
            return Err(FoodItemError::NutrientNegative);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name: props.name,
            brand: props.brand,
            serving_size: props.serving_size,
            serving_unit: props.serving_unit,
            nutrients: props.nutrients,
            cost_per_serving: props.cost_per_serving,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        brand: Option<String>,
        serving_size: BigDecimal,
        serving_unit: String,
        nutrients: NutrientProfile,
        cost_per_serving: Option<BigDecimal>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            brand,
            serving_size,
            serving_unit,
            nutrients,
            cost_per_serving,
            created_at,
            updated_at,
        }
    }
}
