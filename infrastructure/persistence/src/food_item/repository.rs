use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::food::model::FoodItem;
use business::domain::food::repository::FoodItemRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::FoodItemEntity;
use crate::db::map_sqlx_error;

const FOOD_ITEM_COLUMNS: &str = "id, user_id, name, brand, serving_size, serving_unit, \
     calories, protein_g, carbs_g, fat_g, saturated_fat_g, sodium_mg, fiber_g, sugar_g, \
     cost_per_serving, created_at, updated_at";

pub struct FoodItemRepositoryPostgres {
    pool: PgPool,
}

impl FoodItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodItemRepository for FoodItemRepositoryPostgres {
    async fn get_by_id(&self, user_id: &UserId, id: Uuid) -> Result<FoodItem, RepositoryError> {
        let entity = sqlx::query_as::<_, FoodItemEntity>(&format!(
            "SELECT {FOOD_ITEM_COLUMNS} FROM food_items WHERE user_id = $1 AND id = $2",
        ))
        .bind(user_id.as_uuid())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
