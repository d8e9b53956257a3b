use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::shared::value_objects::UserId;

pub struct GetRecipeParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait GetRecipeUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeParams) -> Result<RecipeDetails, RecipeError>;
}
