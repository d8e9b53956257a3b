use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::repository::FoodItemRepository;
use crate::domain::logger::Logger;
use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::{NewPantryItemProps, PantryItem};
use crate::domain::pantry::repository::PantryRepository;
use crate::domain::pantry::use_cases::add_item::{AddPantryItemParams, AddPantryItemUseCase};

/// Adds stock for a food template. The repository merges concurrent adds
/// for the same (user, food template) pair atomically; this use case
/// only validates the request against the template.
pub struct AddPantryItemUseCaseImpl {
    pub pantry_repository: Arc<dyn PantryRepository>,
    pub food_item_repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddPantryItemUseCase for AddPantryItemUseCaseImpl {
    async fn execute(&self, params: AddPantryItemParams) -> Result<PantryItem, PantryError> {
        self.logger.info(&format!(
            "Adding pantry stock for food item: {}",
            params.food_item_id
        ));

        let food_item = self
            .food_item_repository
            .get_by_id(&params.user_id, params.food_item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PantryError::FoodItemNotFound,
                other => PantryError::Repository(other),
            })?;

        if params.unit != food_item.serving_unit {
            return Err(PantryError::UnitMismatch);
        }

        let item = PantryItem::new(NewPantryItemProps {
            user_id: params.user_id,
            food_item_id: params.food_item_id,
            quantity: params.quantity,
            unit: params.unit,
            expiration_date: params.expiration_date,
            location: params.location,
        })?;

        let stored = self.pantry_repository.add(&item).await?;

        self.logger
            .info(&format!("Pantry stock now at {}", stored.quantity));
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::model::{FoodItem, NutrientProfile};
    use crate::domain::pantry::model::PantryEntry;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub PantryRepo {}

        #[async_trait]
        impl PantryRepository for PantryRepo {
            async fn add(&self, item: &PantryItem) -> Result<PantryItem, RepositoryError>;
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<PantryEntry>, RepositoryError>;
            async fn expiring_within(
                &self,
                user_id: &UserId,
                days: i32,
            ) -> Result<Vec<PantryEntry>, RepositoryError>;
            async fn delete(&self, user_id: &UserId, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub FoodRepo {}

        #[async_trait]
        impl FoodItemRepository for FoodRepo {
            async fn get_by_id(&self, user_id: &UserId, id: Uuid) -> Result<FoodItem, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn dec(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    fn food_repo_with_unit(unit: &'static str) -> Arc<dyn FoodItemRepository> {
        let mut repo = MockFoodRepo::new();
        repo.expect_get_by_id().returning(move |user_id, id| {
            Ok(FoodItem::from_repository(
                id,
                *user_id,
                "Rice".to_string(),
                None,
                dec("45"),
                unit.to_string(),
                NutrientProfile::default(),
                None,
                Utc::now(),
                Utc::now(),
            ))
        });
        Arc::new(repo)
    }

    fn params(user_id: UserId, quantity: &str, unit: &str) -> AddPantryItemParams {
        AddPantryItemParams {
            user_id,
            food_item_id: Uuid::new_v4(),
            quantity: dec(quantity),
            unit: unit.to_string(),
            expiration_date: None,
            location: Some("Pantry".to_string()),
        }
    }

    #[tokio::test]
    async fn should_add_stock_when_request_valid() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut pantry_repo = MockPantryRepo::new();
        pantry_repo
            .expect_add()
            .returning(|item| Ok(item.clone()));

        let use_case = AddPantryItemUseCaseImpl {
            pantry_repository: Arc::new(pantry_repo),
            food_item_repository: food_repo_with_unit("g"),
            logger: mock_logger(),
        };

        let stored = use_case.execute(params(user_id, "3.5", "g")).await.unwrap();
        assert_eq!(stored.quantity, dec("3.5"));
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity() {
        let user_id = UserId::new(Uuid::new_v4());
        let use_case = AddPantryItemUseCaseImpl {
            pantry_repository: Arc::new(MockPantryRepo::new()),
            food_item_repository: food_repo_with_unit("g"),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(user_id, "0", "g")).await;
        assert!(matches!(
            result.unwrap_err(),
            PantryError::QuantityNotPositive
        ));
    }

    #[tokio::test]
    async fn should_reject_unit_mismatch() {
        let user_id = UserId::new(Uuid::new_v4());
        let use_case = AddPantryItemUseCaseImpl {
            pantry_repository: Arc::new(MockPantryRepo::new()),
            food_item_repository: food_repo_with_unit("g"),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(user_id, "2", "ml")).await;
        assert!(matches!(result.unwrap_err(), PantryError::UnitMismatch));
    }

    #[tokio::test]
    async fn should_reject_unknown_food_item() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut food_repo = MockFoodRepo::new();
        food_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = AddPantryItemUseCaseImpl {
            pantry_repository: Arc::new(MockPantryRepo::new()),
            food_item_repository: Arc::new(food_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(user_id, "2", "g")).await;
        assert!(matches!(result.unwrap_err(), PantryError::FoodItemNotFound));
    }
}
