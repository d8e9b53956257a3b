use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::food::model::{FoodItem, NutrientProfile};
use business::domain::pantry::model::{PantryEntry, PantryItem};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct PantryItemEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_item_id: Uuid,
    pub quantity: BigDecimal,
    pub unit: String,
    pub expiration_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PantryItemEntity {
    pub fn into_domain(self) -> PantryItem {
        PantryItem::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.food_item_id,
            self.quantity,
            self.unit,
            self.expiration_date,
            self.location,
            self.created_at,
            self.updated_at,
        )
    }
}

/// A pantry row joined with the food template it stocks; the template
/// columns carry a `food_` prefix in the query.
#[derive(Debug, FromRow)]
pub struct PantryEntryEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_item_id: Uuid,
    pub quantity: BigDecimal,
    pub unit: String,
    pub expiration_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
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

impl PantryEntryEntity {
    pub fn into_domain(self) -> PantryEntry {
        let user_id = UserId::new(self.user_id);
        let food_item = FoodItem::from_repository(
            self.food_item_id,
            user_id,
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
        PantryEntry {
            item: PantryItem::from_repository(
                self.id,
                user_id,
                self.food_item_id,
                self.quantity,
                self.unit,
                self.expiration_date,
                self.location,
                self.created_at,
                self.updated_at,
            ),
            food_item,
        }
    }
}
