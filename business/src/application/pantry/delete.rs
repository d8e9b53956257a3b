use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::repository::PantryRepository;
use crate::domain::pantry::use_cases::delete::{DeletePantryItemParams, DeletePantryItemUseCase};

pub struct DeletePantryItemUseCaseImpl {
    pub pantry_repository: Arc<dyn PantryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeletePantryItemUseCase for DeletePantryItemUseCaseImpl {
    async fn execute(&self, params: DeletePantryItemParams) -> Result<(), PantryError> {
        self.logger
            .info(&format!("Deleting pantry item: {}", params.id));

        self.pantry_repository
            .delete(&params.user_id, params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PantryError::NotFound,
                other => PantryError::Repository(other),
            })
    }
}
