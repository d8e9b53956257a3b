use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::shared::value_objects::UserId;

/// Metadata-only update; ingredient lines are immutable. `None` keeps
/// the stored value.
pub struct UpdateRecipeParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<RecipeDetails, RecipeError>;
}
