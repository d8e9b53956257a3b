use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::model::{MealDetails, MealLog};
use crate::domain::meal::repository::MealLogRepository;
use crate::domain::meal::use_cases::update::{UpdateMealParams, UpdateMealUseCase};

pub struct UpdateMealUseCaseImpl {
    pub meal_log_repository: Arc<dyn MealLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateMealUseCase for UpdateMealUseCaseImpl {
    async fn execute(&self, params: UpdateMealParams) -> Result<MealDetails, MealLogError> {
        self.logger
            .info(&format!("Updating meal log: {}", params.meal_log_id));

        let (existing, rows) = self
            .meal_log_repository
            .get_with_items(&params.user_id, params.meal_log_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MealLogError::NotFound,
                other => MealLogError::Repository(other),
            })?;

        let updated = MealLog::from_repository(
            existing.id,
            existing.user_id,
            params.meal_name.or(existing.meal_name),
            params.meal_type.or(existing.meal_type),
            existing.logged_at,
            params.notes.or(existing.notes),
            existing.created_at,
            chrono::Utc::now(),
        );

        self.meal_log_repository.update_metadata(&updated).await?;

        self.logger
            .info(&format!("Meal log updated: {}", updated.id));
        Ok(MealDetails::assemble(updated, rows))
    }
}
