use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::model::MealDetails;
use crate::domain::shared::value_objects::UserId;

pub struct GetMealParams {
    pub user_id: UserId,
    pub meal_log_id: Uuid,
}

#[async_trait]
pub trait GetMealUseCase: Send + Sync {
    async fn execute(&self, params: GetMealParams) -> Result<MealDetails, MealLogError>;
}
