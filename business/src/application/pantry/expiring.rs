use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::PantryEntry;
use crate::domain::pantry::repository::PantryRepository;
use crate::domain::pantry::use_cases::expiring::{GetExpiringItemsParams, GetExpiringItemsUseCase};

pub struct GetExpiringItemsUseCaseImpl {
    pub pantry_repository: Arc<dyn PantryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetExpiringItemsUseCase for GetExpiringItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetExpiringItemsParams,
    ) -> Result<Vec<PantryEntry>, PantryError> {
        self.logger.debug(&format!(
            "Listing pantry items expiring within {} days",
            params.days
        ));

        let days = params.days.max(0);
        Ok(self
            .pantry_repository
            .expiring_within(&params.user_id, days)
            .await?)
    }
}
