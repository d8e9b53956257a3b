use std::collections::HashMap;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::food::model::FoodItem;
use business::domain::meal::model::{LoggedItem, MealLog, MealLogFilter};
use business::domain::meal::repository::MealLogRepository;
use business::domain::pantry::model::{DeductionOutcome, PantryDeduction};
use business::domain::shared::value_objects::UserId;

use super::entity::{LoggedItemRowEntity, MealLogEntity};
use crate::db::map_sqlx_error;

const MEAL_LOG_COLUMNS: &str =
    "id, user_id, meal_name, meal_type, logged_at, notes, created_at, updated_at";

const ITEM_ROW_COLUMNS: &str = "li.id, li.meal_log_id, li.food_item_id, li.servings, li.created_at, \
     f.user_id AS food_user_id, f.name AS food_name, f.brand AS food_brand, \
     f.serving_size AS food_serving_size, f.serving_unit AS food_serving_unit, \
     f.calories AS food_calories, f.protein_g AS food_protein_g, \
     f.carbs_g AS food_carbs_g, f.fat_g AS food_fat_g, \
     f.saturated_fat_g AS food_saturated_fat_g, f.sodium_mg AS food_sodium_mg, \
     f.fiber_g AS food_fiber_g, f.sugar_g AS food_sugar_g, \
     f.cost_per_serving AS food_cost_per_serving, \
     f.created_at AS food_created_at, f.updated_at AS food_updated_at";

/// Serialization failures under concurrent deductions are retried this
/// many times before `Conflict` reaches the caller.
const MAX_CONFLICT_RETRIES: u32 = 3;

pub struct MealLogRepositoryPostgres {
    pool: PgPool,
}

impl MealLogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn try_log(
        &self,
        meal: &MealLog,
        items: &[LoggedItem],
    ) -> Result<Vec<PantryDeduction>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            "INSERT INTO meal_logs (id, user_id, meal_name, meal_type, logged_at, notes, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(meal.id)
        .bind(meal.user_id.as_uuid())
        .bind(&meal.meal_name)
        .bind(meal.meal_type.as_ref().map(|t| t.to_string()))
        .bind(meal.logged_at)
        .bind(&meal.notes)
        .bind(meal.created_at)
        .bind(meal.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let mut deductions = Vec::with_capacity(items.len());
        for item in items {
            sqlx::query(
                "INSERT INTO logged_items (id, meal_log_id, food_item_id, servings, created_at) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(item.id)
            .bind(item.meal_log_id)
            .bind(item.food_item_id)
            .bind(&item.servings)
            .bind(item.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

            // Locks the row, clamps the new quantity at zero and hands back
            // what the row held before, all in one statement.
            let before: Option<(BigDecimal,)> = sqlx::query_as(
                r#"WITH current AS (
                       SELECT id, quantity FROM pantry_items
                       WHERE user_id = $1 AND food_item_id = $2
                       FOR UPDATE
                   )
                   UPDATE pantry_items
                   SET quantity = GREATEST(pantry_items.quantity - $3, 0),
                       updated_at = NOW()
                   FROM current
                   WHERE pantry_items.id = current.id
                   RETURNING current.quantity"#,
            )
            .bind(meal.user_id.as_uuid())
            .bind(item.food_item_id)
            .bind(&item.servings)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

            deductions.push(PantryDeduction {
                food_item_id: item.food_item_id,
                outcome: DeductionOutcome::classify(before.map(|(q,)| q), &item.servings),
            });
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(deductions)
    }

    async fn items_for(
        &self,
        meal_log_ids: &[Uuid],
    ) -> Result<Vec<LoggedItemRowEntity>, RepositoryError> {
        sqlx::query_as::<_, LoggedItemRowEntity>(&format!(
            "SELECT {ITEM_ROW_COLUMNS} FROM logged_items li \
             JOIN food_items f ON f.id = li.food_item_id \
             WHERE li.meal_log_id = ANY($1) \
             ORDER BY li.created_at ASC",
        ))
        .bind(meal_log_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl MealLogRepository for MealLogRepositoryPostgres {
    async fn log(
        &self,
        meal: &MealLog,
        items: &[LoggedItem],
    ) -> Result<Vec<PantryDeduction>, RepositoryError> {
        let mut attempt = 0;
        loop {
            match self.try_log(meal, items).await {
                Err(RepositoryError::Conflict) if attempt < MAX_CONFLICT_RETRIES => {
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    async fn get_with_items(
        &self,
        user_id: &UserId,
        meal_log_id: Uuid,
    ) -> Result<(MealLog, Vec<(LoggedItem, FoodItem)>), RepositoryError> {
        let meal = sqlx::query_as::<_, MealLogEntity>(&format!(
            "SELECT {MEAL_LOG_COLUMNS} FROM meal_logs WHERE user_id = $1 AND id = $2",
        ))
        .bind(user_id.as_uuid())
        .bind(meal_log_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        let rows = self.items_for(&[meal_log_id]).await?;
        Ok((
            meal.into_domain(),
            rows.into_iter().map(|r| r.into_domain()).collect(),
        ))
    }

    async fn list(
        &self,
        user_id: &UserId,
        filter: &MealLogFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<(MealLog, Vec<(LoggedItem, FoodItem)>)>, u64), RepositoryError> {
        let meal_type = filter.meal_type.as_ref().map(|t| t.to_string());

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM meal_logs \
             WHERE user_id = $1 \
               AND ($2::timestamptz IS NULL OR logged_at >= $2) \
               AND ($3::timestamptz IS NULL OR logged_at <= $3) \
               AND ($4::text IS NULL OR meal_type = $4)",
        )
        .bind(user_id.as_uuid())
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(&meal_type)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let meals = sqlx::query_as::<_, MealLogEntity>(&format!(
            "SELECT {MEAL_LOG_COLUMNS} FROM meal_logs \
             WHERE user_id = $1 \
               AND ($2::timestamptz IS NULL OR logged_at >= $2) \
               AND ($3::timestamptz IS NULL OR logged_at <= $3) \
               AND ($4::text IS NULL OR meal_type = $4) \
             ORDER BY logged_at DESC \
             OFFSET $5 LIMIT $6",
        ))
        .bind(user_id.as_uuid())
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(&meal_type)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let ids: Vec<Uuid> = meals.iter().map(|m| m.id).collect();
        let mut items_by_meal: HashMap<Uuid, Vec<(LoggedItem, FoodItem)>> = HashMap::new();
        for row in self.items_for(&ids).await? {
            let (item, food_item) = row.into_domain();
            items_by_meal
                .entry(item.meal_log_id)
                .or_default()
                .push((item, food_item));
        }

        let page = meals
            .into_iter()
            .map(|meal| {
                let items = items_by_meal.remove(&meal.id).unwrap_or_default();
                (meal.into_domain(), items)
            })
            .collect();

        Ok((page, u64::try_from(total).unwrap_or(0)))
    }

    async fn update_metadata(&self, meal: &MealLog) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE meal_logs \
             SET meal_name = $3, meal_type = $4, logged_at = $5, notes = $6, updated_at = $7 \
             WHERE user_id = $1 AND id = $2",
        )
        .bind(meal.user_id.as_uuid())
        .bind(meal.id)
        .bind(&meal.meal_name)
        .bind(meal.meal_type.as_ref().map(|t| t.to_string()))
        .bind(meal.logged_at)
        .bind(&meal.notes)
        .bind(meal.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId, meal_log_id: Uuid) -> Result<(), RepositoryError> {
        // logged_items rows go with the meal via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM meal_logs WHERE user_id = $1 AND id = $2")
            .bind(user_id.as_uuid())
            .bind(meal_log_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
