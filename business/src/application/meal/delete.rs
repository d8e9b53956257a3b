use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::repository::MealLogRepository;
use crate::domain::meal::use_cases::delete::{DeleteMealParams, DeleteMealUseCase};

/// Deleting a meal removes its logged items but never restores pantry
/// quantities; it is a one-way correction for wrong entries.
pub struct DeleteMealUseCaseImpl {
    pub meal_log_repository: Arc<dyn MealLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteMealUseCase for DeleteMealUseCaseImpl {
    async fn execute(&self, params: DeleteMealParams) -> Result<(), MealLogError> {
        self.logger
            .info(&format!("Deleting meal log: {}", params.meal_log_id));

        self.meal_log_repository
            .delete(&params.user_id, params.meal_log_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MealLogError::NotFound,
                other => MealLogError::Repository(other),
            })
    }
}
