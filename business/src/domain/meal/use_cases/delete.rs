use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::meal::errors::MealLogError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteMealParams {
    pub user_id: UserId,
    pub meal_log_id: Uuid,
}

#[async_trait]
pub trait DeleteMealUseCase: Send + Sync {
    async fn execute(&self, params: DeleteMealParams) -> Result<(), MealLogError>;
}
