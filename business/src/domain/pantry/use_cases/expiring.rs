use async_trait::async_trait;

use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::PantryEntry;
use crate::domain::shared::value_objects::UserId;

pub struct GetExpiringItemsParams {
    pub user_id: UserId,
    pub days: i32,
}

#[async_trait]
pub trait GetExpiringItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetExpiringItemsParams) -> Result<Vec<PantryEntry>, PantryError>;
}
