use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::food::model::FoodItem;
use business::domain::recipe::model::{Recipe, RecipeIngredient};
use business::domain::recipe::repository::RecipeRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::{RecipeEntity, RecipeIngredientRowEntity};
use crate::db::map_sqlx_error;

const RECIPE_COLUMNS: &str =
    "id, user_id, name, description, created_from_meal_log_id, created_at, updated_at";

const INGREDIENT_ROW_COLUMNS: &str = "ri.id, ri.recipe_id, ri.food_item_id, ri.servings, ri.created_at, \
     f.user_id AS food_user_id, f.name AS food_name, f.brand AS food_brand, \
     f.serving_size AS food_serving_size, f.serving_unit AS food_serving_unit, \
     f.calories AS food_calories, f.protein_g AS food_protein_g, \
     f.carbs_g AS food_carbs_g, f.fat_g AS food_fat_g, \
     f.saturated_fat_g AS food_saturated_fat_g, f.sodium_mg AS food_sodium_mg, \
     f.fiber_g AS food_fiber_g, f.sugar_g AS food_sugar_g, \
     f.cost_per_serving AS food_cost_per_serving, \
     f.created_at AS food_created_at, f.updated_at AS food_updated_at";

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ingredients_for(
        &self,
        recipe_ids: &[Uuid],
    ) -> Result<Vec<RecipeIngredientRowEntity>, RepositoryError> {
        sqlx::query_as::<_, RecipeIngredientRowEntity>(&format!(
            "SELECT {INGREDIENT_ROW_COLUMNS} FROM recipe_ingredients ri \
             JOIN food_items f ON f.id = ri.food_item_id \
             WHERE ri.recipe_id = ANY($1) \
             ORDER BY ri.created_at ASC",
        ))
        .bind(recipe_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn exists_by_name(
        &self,
        user_id: &UserId,
        name: &str,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM recipes WHERE user_id = $1 AND name = $2)",
        )
        .bind(user_id.as_uuid())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn create_with_ingredients(
        &self,
        recipe: &Recipe,
        ingredients: &[RecipeIngredient],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // A concurrent insert of the same name trips the unique index and
        // surfaces as Duplicated via the error mapping.
        sqlx::query(
            "INSERT INTO recipes (id, user_id, name, description, created_from_meal_log_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(recipe.id)
        .bind(recipe.user_id.as_uuid())
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(recipe.created_from_meal_log_id)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        for ingredient in ingredients {
            sqlx::query(
                "INSERT INTO recipe_ingredients (id, recipe_id, food_item_id, servings, created_at) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(ingredient.id)
            .bind(ingredient.recipe_id)
            .bind(ingredient.food_item_id)
            .bind(&ingredient.servings)
            .bind(ingredient.created_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn get_with_ingredients(
        &self,
        user_id: &UserId,
        recipe_id: Uuid,
    ) -> Result<(Recipe, Vec<(RecipeIngredient, FoodItem)>), RepositoryError> {
        let recipe = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE user_id = $1 AND id = $2",
        ))
        .bind(user_id.as_uuid())
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        let rows = self.ingredients_for(&[recipe_id]).await?;
        Ok((
            recipe.into_domain(),
            rows.into_iter().map(|r| r.into_domain()).collect(),
        ))
    }

    async fn list(
        &self,
        user_id: &UserId,
        search: Option<String>,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<(Recipe, Vec<(RecipeIngredient, FoodItem)>)>, u64), RepositoryError> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM recipes \
             WHERE user_id = $1 \
               AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')",
        )
        .bind(user_id.as_uuid())
        .bind(search.clone())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let recipes = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes \
             WHERE user_id = $1 \
               AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%') \
             ORDER BY created_at DESC \
             OFFSET $3 LIMIT $4",
        ))
        .bind(user_id.as_uuid())
        .bind(search)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let ids: Vec<Uuid> = recipes.iter().map(|r| r.id).collect();
        let mut ingredients_by_recipe: HashMap<Uuid, Vec<(RecipeIngredient, FoodItem)>> =
            HashMap::new();
        for row in self.ingredients_for(&ids).await? {
            let (ingredient, food_item) = row.into_domain();
            ingredients_by_recipe
                .entry(ingredient.recipe_id)
                .or_default()
                .push((ingredient, food_item));
        }

        let page = recipes
            .into_iter()
            .map(|recipe| {
                let ingredients = ingredients_by_recipe.remove(&recipe.id).unwrap_or_default();
                (recipe.into_domain(), ingredients)
            })
            .collect();

        Ok((page, u64::try_from(total).unwrap_or(0)))
    }

    async fn update_metadata(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE recipes SET name = $3, description = $4, updated_at = $5 \
             WHERE user_id = $1 AND id = $2",
        )
        .bind(recipe.user_id.as_uuid())
        .bind(recipe.id)
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(recipe.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError> {
        // recipe_ingredients rows go with the recipe via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM recipes WHERE user_id = $1 AND id = $2")
            .bind(user_id.as_uuid())
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
