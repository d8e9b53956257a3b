use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::food::model::FoodItem;
use crate::domain::pantry::model::PantryDeduction;
use crate::domain::shared::value_objects::UserId;

use super::model::{LoggedItem, MealLog, MealLogFilter};

#[async_trait]
pub trait MealLogRepository: Send + Sync {
    /// Persists the meal header and all its items and applies one pantry
    /// deduction per item, all inside a single transaction: either every
    /// row lands or none does. Returns the deductions in item order.
    /// Serialization failures are retried a bounded number of times
    /// before surfacing as `RepositoryError::Conflict`.
    async fn log(
        &self,
        meal: &MealLog,
        items: &[LoggedItem],
    ) -> Result<Vec<PantryDeduction>, RepositoryError>;

    /// The meal with its items and their current food templates, in the
    /// order the items were logged.
    async fn get_with_items(
        &self,
        user_id: &UserId,
        meal_log_id: Uuid,
    ) -> Result<(MealLog, Vec<(LoggedItem, FoodItem)>), RepositoryError>;

    /// One page of meals (newest `logged_at` first) matching the filter,
    /// plus the total number of matching meals.
    #[allow(clippy::type_complexity)]
    async fn list(
        &self,
        user_id: &UserId,
        filter: &MealLogFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<(MealLog, Vec<(LoggedItem, FoodItem)>)>, u64), RepositoryError>;

    /// Updates the metadata fields only; the item list is immutable.
    async fn update_metadata(&self, meal: &MealLog) -> Result<(), RepositoryError>;

    /// Deletes the meal and its items. Pantry quantities are not
    /// restored; deletion is for incorrect logs only.
    async fn delete(&self, user_id: &UserId, meal_log_id: Uuid) -> Result<(), RepositoryError>;
}
