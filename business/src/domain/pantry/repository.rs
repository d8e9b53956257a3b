use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{PantryEntry, PantryItem};

#[async_trait]
pub trait PantryRepository: Send + Sync {
    /// Adds stock for a food template as one atomic read-modify-write.
    /// If a row already exists for (user, food template) the quantities
    /// are merged: amounts add up, the earlier expiration date wins and
    /// a location is adopted only when the row had none. Returns the row
    /// as stored after the merge.
    async fn add(&self, item: &PantryItem) -> Result<PantryItem, RepositoryError>;

    /// All pantry rows of a user with their food templates, items
    /// expiring soonest first and undated items last.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<PantryEntry>, RepositoryError>;

    /// Rows expiring within the next `days` days (today included).
    async fn expiring_within(
        &self,
        user_id: &UserId,
        days: i32,
    ) -> Result<Vec<PantryEntry>, RepositoryError>;

    async fn delete(&self, user_id: &UserId, id: Uuid) -> Result<(), RepositoryError>;
}
