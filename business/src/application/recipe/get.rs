use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get::{GetRecipeParams, GetRecipeUseCase};

/// Totals are recomputed from the current food template values on every
/// read, never cached.
pub struct GetRecipeUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeUseCase for GetRecipeUseCaseImpl {
    async fn execute(&self, params: GetRecipeParams) -> Result<RecipeDetails, RecipeError> {
        self.logger
            .debug(&format!("Fetching recipe: {}", params.recipe_id));

        let (recipe, rows) = self
            .recipe_repository
            .get_with_ingredients(&params.user_id, params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        Ok(RecipeDetails::assemble(recipe, rows))
    }
}
