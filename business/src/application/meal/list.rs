use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::model::{MealDetails, MealLogFilter};
use crate::domain::meal::repository::MealLogRepository;
use crate::domain::meal::use_cases::list::{ListMealsParams, ListMealsUseCase};
use crate::domain::shared::pagination::{Page, PageRequest, PaginationConfig};

pub struct ListMealsUseCaseImpl {
    pub meal_log_repository: Arc<dyn MealLogRepository>,
    pub pagination: PaginationConfig,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListMealsUseCase for ListMealsUseCaseImpl {
    async fn execute(&self, params: ListMealsParams) -> Result<Page<MealDetails>, MealLogError> {
        self.logger
            .debug(&format!("Listing meals for user: {}", params.user_id));

        let request = PageRequest::new(params.page, params.per_page, &self.pagination);
        let filter = MealLogFilter {
            start_date: params.start_date,
            end_date: params.end_date,
            meal_type: params.meal_type,
        };

        let (rows, total) = self
            .meal_log_repository
            .list(&params.user_id, &filter, request.offset(), request.limit())
            .await?;

        let meals = rows
            .into_iter()
            .map(|(meal, items)| MealDetails::assemble(meal, items))
            .collect();

        Ok(Page::new(meals, total, &request))
    }
}
