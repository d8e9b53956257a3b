use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::model::MealDetails;
use crate::domain::meal::value_objects::MealType;
use crate::domain::shared::pagination::Page;
use crate::domain::shared::value_objects::UserId;

pub struct ListMealsParams {
    pub user_id: UserId,
    pub page: u32,
    pub per_page: Option<u32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub meal_type: Option<MealType>,
}

#[async_trait]
pub trait ListMealsUseCase: Send + Sync {
    async fn execute(&self, params: ListMealsParams) -> Result<Page<MealDetails>, MealLogError>;
}
