use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::PantryEntry;
use crate::domain::pantry::repository::PantryRepository;
use crate::domain::pantry::use_cases::get_all::GetPantryUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct GetPantryUseCaseImpl {
    pub pantry_repository: Arc<dyn PantryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPantryUseCase for GetPantryUseCaseImpl {
    async fn execute(&self, user_id: UserId) -> Result<Vec<PantryEntry>, PantryError> {
        self.logger
            .debug(&format!("Listing pantry for user: {user_id}"));
        Ok(self.pantry_repository.get_all(&user_id).await?)
    }
}
