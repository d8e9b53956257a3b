use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::pantry::errors::PantryError;
use crate::domain::shared::value_objects::UserId;

pub struct DeletePantryItemParams {
    pub user_id: UserId,
    pub id: Uuid,
}

#[async_trait]
pub trait DeletePantryItemUseCase: Send + Sync {
    async fn execute(&self, params: DeletePantryItemParams) -> Result<(), PantryError>;
}
