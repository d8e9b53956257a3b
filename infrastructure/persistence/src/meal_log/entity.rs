use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::food::model::{FoodItem, NutrientProfile};
use business::domain::meal::model::{LoggedItem, MealLog};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct MealLogEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_name: Option<String>,
    pub meal_type: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealLogEntity {
    pub fn into_domain(self) -> MealLog {
        MealLog::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.meal_name,
            self.meal_type.and_then(|t| t.parse().ok()),
            self.logged_at,
            self.notes,
            self.created_at,
            self.updated_at,
        )
    }
}

/// A logged item joined with its food template; the template columns
/// carry a `food_` prefix in the query.
#[derive(Debug, FromRow)]
pub struct LoggedItemRowEntity {
    pub id: Uuid,
    pub meal_log_id: Uuid,
    pub food_item_id: Uuid,
    pub servings: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub food_user_id: Uuid,
    pub food_name: String,
    pub food_brand: Option<String>,
    pub food_serving_size: BigDecimal,
    pub food_serving_unit: String,
    pub food_calories: Option<BigDecimal>,
    pub food_protein_g: Option<BigDecimal>,
    pub food_carbs_g: Option<BigDecimal>,
    pub food_fat_g: Option<BigDecimal>,
    pub food_saturated_fat_g: Option<BigDecimal>,
    pub food_sodium_mg: Option<BigDecimal>,
    pub food_fiber_g: Option<BigDecimal>,
    pub food_sugar_g: Option<BigDecimal>,
    pub food_cost_per_serving: Option<BigDecimal>,
    pub food_created_at: DateTime<Utc>,
    pub food_updated_at: DateTime<Utc>,
}

impl LoggedItemRowEntity {
    pub fn into_domain(self) -> (LoggedItem, FoodItem) {
        let food_item = FoodItem::from_repository(
            self.food_item_id,
            UserId::new(self.food_user_id),
            self.food_name,
            self.food_brand,
            self.food_serving_size,
            self.food_serving_unit,
            NutrientProfile {
                calories: self.food_calories,
                protein_g: self.food_protein_g,
                carbs_g: self.food_carbs_g,
                fat_g: self.food_fat_g,
                saturated_fat_g: self.food_saturated_fat_g,
                sodium_mg: self.food_sodium_mg,
                fiber_g: self.food_fiber_g,
                sugar_g: self.food_sugar_g,
            },
            self.food_cost_per_serving,
            self.food_created_at,
            self.food_updated_at,
        );
        let item = LoggedItem::from_repository(
            self.id,
            self.meal_log_id,
            self.food_item_id,
            self.servings,
            self.created_at,
        );
        (item, food_item)
    }
}
