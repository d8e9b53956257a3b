use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeListEntry;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::list::{ListRecipesParams, ListRecipesUseCase};
use crate::domain::shared::pagination::{Page, PageRequest, PaginationConfig};

pub struct ListRecipesUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub pagination: PaginationConfig,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListRecipesUseCase for ListRecipesUseCaseImpl {
    async fn execute(
        &self,
        params: ListRecipesParams,
    ) -> Result<Page<RecipeListEntry>, RecipeError> {
        self.logger
            .debug(&format!("Listing recipes for user: {}", params.user_id));

        let request = PageRequest::new(params.page, params.per_page, &self.pagination);
        let (rows, total) = self
            .recipe_repository
            .list(
                &params.user_id,
                params.search,
                request.offset(),
                request.limit(),
            )
            .await?;

        let entries = rows
            .into_iter()
            .map(|(recipe, ingredients)| RecipeListEntry::assemble(recipe, ingredients))
            .collect();

        Ok(Page::new(entries, total, &request))
    }
}
