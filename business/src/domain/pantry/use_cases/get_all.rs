use async_trait::async_trait;

use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::PantryEntry;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait GetPantryUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<PantryEntry>, PantryError>;
}
