use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::model::FoodItem;
use crate::domain::food::repository::FoodItemRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{NewRecipeProps, Recipe, RecipeDetails, RecipeIngredient};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};

/// Creates a recipe from an explicit ingredient list. An empty list is
/// allowed; ingredients can exist only at creation, so an empty recipe
/// stays a bare named header.
pub struct CreateRecipeUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub food_item_repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeUseCase for CreateRecipeUseCaseImpl {
    async fn execute(&self, params: CreateRecipeParams) -> Result<RecipeDetails, RecipeError> {
        self.logger
            .info(&format!("Creating recipe: {}", params.name));

        let recipe = Recipe::new(NewRecipeProps {
            user_id: params.user_id,
            name: params.name,
            description: params.description,
            created_from_meal_log_id: None,
        })?;

        if self
            .recipe_repository
            .exists_by_name(&params.user_id, &recipe.name)
            .await?
        {
            return Err(RecipeError::DuplicateName);
        }

        let mut rows: Vec<(RecipeIngredient, FoodItem)> =
            Vec::with_capacity(params.ingredients.len());
        for input in &params.ingredients {
            let ingredient =
                RecipeIngredient::new(recipe.id, input.food_item_id, input.servings.clone())?;
            let food_item = self
                .food_item_repository
                .get_by_id(&params.user_id, input.food_item_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => RecipeError::FoodItemNotFound,
                    other => RecipeError::Repository(other),
                })?;
            rows.push((ingredient, food_item));
        }

        let ingredients: Vec<RecipeIngredient> =
            rows.iter().map(|(ingredient, _)| ingredient.clone()).collect();
        self.recipe_repository
            .create_with_ingredients(&recipe, &ingredients)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => RecipeError::DuplicateName,
                other => RecipeError::Repository(other),
            })?;

        Ok(RecipeDetails::assemble(recipe, rows))
    }
}
