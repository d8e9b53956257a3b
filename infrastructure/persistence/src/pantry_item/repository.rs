use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::pantry::model::{PantryEntry, PantryItem};
use business::domain::pantry::repository::PantryRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{PantryEntryEntity, PantryItemEntity};
use crate::db::map_sqlx_error;

const ENTRY_COLUMNS: &str = "p.id, p.user_id, p.food_item_id, p.quantity, p.unit, \
     p.expiration_date, p.location, p.created_at, p.updated_at, \
     f.name AS food_name, f.brand AS food_brand, \
     f.serving_size AS food_serving_size, f.serving_unit AS food_serving_unit, \
     f.calories AS food_calories, f.protein_g AS food_protein_g, \
     f.carbs_g AS food_carbs_g, f.fat_g AS food_fat_g, \
     f.saturated_fat_g AS food_saturated_fat_g, f.sodium_mg AS food_sodium_mg, \
     f.fiber_g AS food_fiber_g, f.sugar_g AS food_sugar_g, \
     f.cost_per_serving AS food_cost_per_serving, \
     f.created_at AS food_created_at, f.updated_at AS food_updated_at";

pub struct PantryRepositoryPostgres {
    pool: PgPool,
}

impl PantryRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PantryRepository for PantryRepositoryPostgres {
    async fn add(&self, item: &PantryItem) -> Result<PantryItem, RepositoryError> {
        // The upsert is the merge: quantities add up, the earlier expiration
        // date wins (LEAST ignores NULL) and a location is adopted only when
        // the stored row had none.
        let entity = sqlx::query_as::<_, PantryItemEntity>(
            r#"INSERT INTO pantry_items
                (id, user_id, food_item_id, quantity, unit, expiration_date, location, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id, food_item_id) DO UPDATE SET
                quantity = pantry_items.quantity + EXCLUDED.quantity,
                expiration_date = LEAST(pantry_items.expiration_date, EXCLUDED.expiration_date),
                location = COALESCE(pantry_items.location, EXCLUDED.location),
                updated_at = EXCLUDED.updated_at
            RETURNING id, user_id, food_item_id, quantity, unit, expiration_date, location, created_at, updated_at"#,
        )
        .bind(item.id)
        .bind(item.user_id.as_uuid())
        .bind(item.food_item_id)
        .bind(&item.quantity)
        .bind(&item.unit)
        .bind(item.expiration_date)
        .bind(&item.location)
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn get_all(&self, user_id: &UserId) -> Result<Vec<PantryEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, PantryEntryEntity>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM pantry_items p \
             JOIN food_items f ON f.id = p.food_item_id \
             WHERE p.user_id = $1 \
             ORDER BY p.expiration_date ASC NULLS LAST, p.created_at ASC",
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn expiring_within(
        &self,
        user_id: &UserId,
        days: i32,
    ) -> Result<Vec<PantryEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, PantryEntryEntity>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM pantry_items p \
             JOIN food_items f ON f.id = p.food_item_id \
             WHERE p.user_id = $1 \
               AND p.expiration_date IS NOT NULL \
               AND p.expiration_date <= CURRENT_DATE + $2 \
             ORDER BY p.expiration_date ASC",
        ))
        .bind(user_id.as_uuid())
        .bind(days)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn delete(&self, user_id: &UserId, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM pantry_items WHERE user_id = $1 AND id = $2")
            .bind(user_id.as_uuid())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
