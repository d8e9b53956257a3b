use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::shared::value_objects::UserId;

pub struct CreateRecipeFromMealParams {
    pub user_id: UserId,
    pub meal_log_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateRecipeFromMealUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeFromMealParams)
        -> Result<RecipeDetails, RecipeError>;
}
