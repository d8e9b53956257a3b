use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::model::MealDetails;
use crate::domain::meal::value_objects::MealType;
use crate::domain::shared::value_objects::UserId;

/// Metadata-only update; the logged item list cannot be changed after
/// the meal is committed. `None` keeps the stored value.
pub struct UpdateMealParams {
    pub user_id: UserId,
    pub meal_log_id: Uuid,
    pub meal_name: Option<String>,
    pub meal_type: Option<MealType>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait UpdateMealUseCase: Send + Sync {
    async fn execute(&self, params: UpdateMealParams) -> Result<MealDetails, MealLogError>;
}
