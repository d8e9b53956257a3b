use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeDetails};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};

/// Updates name and description only; the ingredient list is immutable
/// after creation. A field left as `None` keeps its stored value.
pub struct UpdateRecipeUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateRecipeUseCase for UpdateRecipeUseCaseImpl {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<RecipeDetails, RecipeError> {
        self.logger
            .info(&format!("Updating recipe: {}", params.recipe_id));

        let (existing, rows) = self
            .recipe_repository
            .get_with_ingredients(&params.user_id, params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        if let Some(name) = &params.name {
            if name.trim().is_empty() {
                return Err(RecipeError::NameEmpty);
            }
            if *name != existing.name
                && self
                    .recipe_repository
                    .exists_by_name(&params.user_id, name)
                    .await?
            {
                return Err(RecipeError::DuplicateName);
            }
        }

        let updated = Recipe::from_repository(
            existing.id,
            existing.user_id,
            params.name.unwrap_or(existing.name),
            params.description.or(existing.description),
            existing.created_from_meal_log_id,
            existing.created_at,
            Utc::now(),
        );

        self.recipe_repository
            .update_metadata(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => RecipeError::DuplicateName,
                other => RecipeError::Repository(other),
            })?;

        Ok(RecipeDetails::assemble(updated, rows))
    }
}
