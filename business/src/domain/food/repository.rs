use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::FoodItem;

/// Read-only boundary to the food template store. The template CRUD
/// itself lives in the surrounding service; the core only resolves
/// user-scoped references. A template owned by another user is reported
/// as `NotFound`.
#[async_trait]
pub trait FoodItemRepository: Send + Sync {
    async fn get_by_id(&self, user_id: &UserId, id: Uuid) -> Result<FoodItem, RepositoryError>;
}
