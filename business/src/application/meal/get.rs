use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::model::MealDetails;
use crate::domain::meal::repository::MealLogRepository;
use crate::domain::meal::use_cases::get::{GetMealParams, GetMealUseCase};

/// Totals are recomputed from the current food templates on every read;
/// nothing is cached at log time.
pub struct GetMealUseCaseImpl {
    pub meal_log_repository: Arc<dyn MealLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMealUseCase for GetMealUseCaseImpl {
    async fn execute(&self, params: GetMealParams) -> Result<MealDetails, MealLogError> {
        self.logger
            .debug(&format!("Fetching meal log: {}", params.meal_log_id));

        let (meal, rows) = self
            .meal_log_repository
            .get_with_items(&params.user_id, params.meal_log_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MealLogError::NotFound,
                other => MealLogError::Repository(other),
            })?;

        Ok(MealDetails::assemble(meal, rows))
    }
}
