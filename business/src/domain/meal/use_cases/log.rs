use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::model::MealDetails;
use crate::domain::meal::value_objects::MealType;
use crate::domain::pantry::model::ShortageWarning;
use crate::domain::shared::value_objects::UserId;

pub struct LogMealItem {
    pub food_item_id: Uuid,
    pub servings: BigDecimal,
}

pub struct LogMealParams {
    pub user_id: UserId,
    pub meal_name: Option<String>,
    pub meal_type: Option<MealType>,
    pub logged_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub items: Vec<LogMealItem>,
}

/// The committed meal with its aggregates, plus any shortage warnings
/// collected while deducting from the pantry. Warnings are part of a
/// successful result, never an error; the list is empty when stock
/// covered everything.
#[derive(Debug)]
pub struct LogMealOutcome {
    pub meal: MealDetails,
    pub warnings: Vec<ShortageWarning>,
}

#[async_trait]
pub trait LogMealUseCase: Send + Sync {
    async fn execute(&self, params: LogMealParams) -> Result<LogMealOutcome, MealLogError>;
}
