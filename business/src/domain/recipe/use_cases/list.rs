use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeListEntry;
use crate::domain::shared::pagination::Page;
use crate::domain::shared::value_objects::UserId;

pub struct ListRecipesParams {
    pub user_id: UserId,
    pub page: u32,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

#[async_trait]
pub trait ListRecipesUseCase: Send + Sync {
    async fn execute(&self, params: ListRecipesParams)
        -> Result<Page<RecipeListEntry>, RecipeError>;
}
