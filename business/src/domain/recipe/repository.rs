use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::food::model::FoodItem;
use crate::domain::shared::value_objects::UserId;

use super::model::{Recipe, RecipeIngredient};

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Exact, case-sensitive name match within one user's recipes.
    async fn exists_by_name(&self, user_id: &UserId, name: &str)
        -> Result<bool, RepositoryError>;

    /// Persists the header and all ingredient rows in one transaction.
    /// A concurrent duplicate name surfaces as `Duplicated`.
    async fn create_with_ingredients(
        &self,
        recipe: &Recipe,
        ingredients: &[RecipeIngredient],
    ) -> Result<(), RepositoryError>;

    async fn get_with_ingredients(
        &self,
        user_id: &UserId,
        recipe_id: Uuid,
    ) -> Result<(Recipe, Vec<(RecipeIngredient, FoodItem)>), RepositoryError>;

    /// One page of recipes (newest first), optionally filtered by a
    /// case-insensitive name search, plus the total match count.
    #[allow(clippy::type_complexity)]
    async fn list(
        &self,
        user_id: &UserId,
        search: Option<String>,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<(Recipe, Vec<(RecipeIngredient, FoodItem)>)>, u64), RepositoryError>;

    /// Updates name and description only; ingredients are immutable.
    async fn update_metadata(&self, recipe: &Recipe) -> Result<(), RepositoryError>;

    /// Deletes the recipe together with its ingredient rows.
    async fn delete(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError>;
}
