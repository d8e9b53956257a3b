use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::food::model::{FoodItem, NutrientProfile};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct FoodItemEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub serving_size: BigDecimal,
    pub serving_unit: String,
    pub calories: Option<BigDecimal>,
    pub protein_g: Option<BigDecimal>,
    pub carbs_g: Option<BigDecimal>,
    pub fat_g: Option<BigDecimal>,
    pub saturated_fat_g: Option<BigDecimal>,
    pub sodium_mg: Option<BigDecimal>,
    pub fiber_g: Option<BigDecimal>,
    pub sugar_g: Option<BigDecimal>,
    pub cost_per_serving: Option<BigDecimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FoodItemEntity {
    pub fn into_domain(self) -> FoodItem {
        FoodItem::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            self.brand,
            self.serving_size,
            self.serving_unit,
            NutrientProfile {
                calories: self.calories,
                protein_g: self.protein_g,
                carbs_g: self.carbs_g,
                fat_g: self.fat_g,
                saturated_fat_g: self.saturated_fat_g,
                sodium_mg: self.sodium_mg,
                fiber_g: self.fiber_g,
                sugar_g: self.sugar_g,
            },
            self.cost_per_serving,
            self.created_at,
            self.updated_at,
        )
    }
}
