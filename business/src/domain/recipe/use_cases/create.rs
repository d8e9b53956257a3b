use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetails;
use crate::domain::shared::value_objects::UserId;

pub struct RecipeIngredientInput {
    pub food_item_id: Uuid,
    pub servings: BigDecimal,
}

pub struct CreateRecipeParams {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Vec<RecipeIngredientInput>,
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeParams) -> Result<RecipeDetails, RecipeError>;
}
