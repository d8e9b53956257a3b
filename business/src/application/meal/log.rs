use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::model::FoodItem;
use crate::domain::food::repository::FoodItemRepository;
use crate::domain::logger::Logger;
use crate::domain::meal::errors::MealLogError;
use crate::domain::meal::model::{LoggedItem, MealDetails, MealLog, NewMealLogProps};
use crate::domain::meal::repository::MealLogRepository;
use crate::domain::meal::use_cases::log::{LogMealOutcome, LogMealParams, LogMealUseCase};
use crate::domain::pantry::model::ShortageWarning;

/// Orchestrates one meal-logging transaction: validate the request,
/// resolve every referenced food template, then hand the whole write to
/// the repository so the meal rows and the pantry deductions commit or
/// roll back together. Shortages never fail the call; they come back as
/// warnings next to the committed meal.
pub struct LogMealUseCaseImpl {
    pub meal_log_repository: Arc<dyn MealLogRepository>,
    pub food_item_repository: Arc<dyn FoodItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogMealUseCase for LogMealUseCaseImpl {
    async fn execute(&self, params: LogMealParams) -> Result<LogMealOutcome, MealLogError> {
        self.logger
            .info(&format!("Logging meal for user: {}", params.user_id));

        if params.items.is_empty() {
            return Err(MealLogError::ItemsEmpty);
        }

        let meal = MealLog::new(NewMealLogProps {
            user_id: params.user_id,
            meal_name: params.meal_name,
            meal_type: params.meal_type,
            logged_at: params.logged_at,
            notes: params.notes,
        })?;

        let mut items = Vec::with_capacity(params.items.len());
        let mut food_items: HashMap<uuid::Uuid, FoodItem> = HashMap::new();
        for requested in &params.items {
            let item =
                LoggedItem::new(meal.id, requested.food_item_id, requested.servings.clone())?;
            if !food_items.contains_key(&requested.food_item_id) {
                let food_item = self
                    .food_item_repository
                    .get_by_id(&params.user_id, requested.food_item_id)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::NotFound => MealLogError::FoodItemNotFound,
                        other => MealLogError::Repository(other),
                    })?;
                food_items.insert(requested.food_item_id, food_item);
            }
            items.push(item);
        }

        let deductions = self.meal_log_repository.log(&meal, &items).await?;

        let warnings: Vec<ShortageWarning> = items
            .iter()
            .zip(deductions.iter())
            .filter_map(|(item, deduction)| {
                let food_item = &food_items[&item.food_item_id];
                ShortageWarning::from_outcome(
                    &deduction.outcome,
                    item.food_item_id,
                    &food_item.name,
                    &item.servings,
                )
            })
            .collect();

        let rows: Vec<(LoggedItem, FoodItem)> = items
            .into_iter()
            .map(|item| {
                let food_item = food_items[&item.food_item_id].clone();
                (item, food_item)
            })
            .collect();

        self.logger.info(&format!(
            "Meal logged: {} ({} items, {} warnings)",
            meal.id,
            rows.len(),
            warnings.len()
        ));

        Ok(LogMealOutcome {
            meal: MealDetails::assemble(meal, rows),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::model::NutrientProfile;
    use crate::domain::meal::model::MealLogFilter;
    use crate::domain::meal::use_cases::log::LogMealItem;
    use crate::domain::pantry::model::{DeductionOutcome, PantryDeduction};
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub MealRepo {}

        #[async_trait]
        impl MealLogRepository for MealRepo {
            async fn log(
                &self,
                meal: &MealLog,
                items: &[LoggedItem],
            ) -> Result<Vec<PantryDeduction>, RepositoryError>;
            async fn get_with_items(
                &self,
                user_id: &UserId,
                meal_log_id: Uuid,
            ) -> Result<(MealLog, Vec<(LoggedItem, FoodItem)>), RepositoryError>;
            async fn list(
                &self,
                user_id: &UserId,
                filter: &MealLogFilter,
                offset: i64,
                limit: i64,
            ) -> Result<(Vec<(MealLog, Vec<(LoggedItem, FoodItem)>)>, u64), RepositoryError>;
            async fn update_metadata(&self, meal: &MealLog) -> Result<(), RepositoryError>;
            async fn delete(&self, user_id: &UserId, meal_log_id: Uuid) -> Result<(), RepositoryError>;
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

    fn rice(id: Uuid, user_id: UserId) -> FoodItem {
        FoodItem::from_repository(
            id,
            user_id,
            "Rice".to_string(),
            None,
            dec("45"),
            "g".to_string(),
            NutrientProfile {
                calories: Some(dec("160")),
                protein_g: Some(dec("3.5")),
                ..Default::default()
            },
            Some(dec("0.40")),
            Utc::now(),
            Utc::now(),
        )
    }

    fn params(user_id: UserId, food_item_id: Uuid, servings: &str) -> LogMealParams {
        LogMealParams {
            user_id,
            meal_name: Some("Dinner".to_string()),
            meal_type: None,
            logged_at: Utc::now() - Duration::minutes(30),
            notes: None,
            items: vec![LogMealItem {
                food_item_id,
                servings: dec(servings),
            }],
        }
    }

    fn food_repo_returning_rice(user_id: UserId) -> Arc<dyn FoodItemRepository> {
        let mut repo = MockFoodRepo::new();
        repo.expect_get_by_id()
            .returning(move |_, id| Ok(rice(id, user_id)));
        Arc::new(repo)
    }

    fn deductions_for(items: &[LoggedItem], outcome: DeductionOutcome) -> Vec<PantryDeduction> {
        items
            .iter()
            .map(|item| PantryDeduction {
                food_item_id: item.food_item_id,
                outcome: outcome.clone(),
            })
            .collect()
    }

    #[tokio::test]
    async fn should_log_meal_without_warnings_when_stock_covers_request() {
        let user_id = UserId::new(Uuid::new_v4());
        let food_item_id = Uuid::new_v4();

        let mut meal_repo = MockMealRepo::new();
        meal_repo.expect_log().returning(|_, items| {
            Ok(deductions_for(
                items,
                DeductionOutcome::Deducted {
                    remaining: "0.5".parse().unwrap(),
                },
            ))
        });

        let use_case = LogMealUseCaseImpl {
            meal_log_repository: Arc::new(meal_repo),
            food_item_repository: food_repo_returning_rice(user_id),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(params(user_id, food_item_id, "1.5"))
            .await
            .unwrap();

        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.meal.items.len(), 1);
        assert_eq!(outcome.meal.totals.calories, Some(dec("240.0")));
        assert_eq!(outcome.meal.totals.cost, Some(dec("0.600")));
    }

    #[tokio::test]
    async fn should_warn_and_accept_meal_when_stock_is_short() {
        let user_id = UserId::new(Uuid::new_v4());
        let food_item_id = Uuid::new_v4();

        let mut meal_repo = MockMealRepo::new();
        meal_repo.expect_log().returning(|_, items| {
            Ok(deductions_for(
                items,
                DeductionOutcome::Clamped {
                    available: "1.0".parse().unwrap(),
                },
            ))
        });

        let use_case = LogMealUseCaseImpl {
            meal_log_repository: Arc::new(meal_repo),
            food_item_repository: food_repo_returning_rice(user_id),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(params(user_id, food_item_id, "3.0"))
            .await
            .unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        let warning = &outcome.warnings[0];
        assert_eq!(warning.food_item_name, "Rice");
        assert_eq!(warning.requested_servings, dec("3.0"));
        assert_eq!(warning.available_servings, Some(dec("1.0")));
    }

    #[tokio::test]
    async fn should_warn_when_food_is_not_tracked_in_pantry() {
        let user_id = UserId::new(Uuid::new_v4());
        let food_item_id = Uuid::new_v4();

        let mut meal_repo = MockMealRepo::new();
        meal_repo
            .expect_log()
            .returning(|_, items| Ok(deductions_for(items, DeductionOutcome::NotTracked)));

        let use_case = LogMealUseCaseImpl {
            meal_log_repository: Arc::new(meal_repo),
            food_item_repository: food_repo_returning_rice(user_id),
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(params(user_id, food_item_id, "2.0"))
            .await
            .unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].available_servings.is_none());
        assert!(outcome.warnings[0].message.contains("not tracked"));
    }

    #[tokio::test]
    async fn should_reject_empty_item_list_before_touching_repositories() {
        let user_id = UserId::new(Uuid::new_v4());
        let use_case = LogMealUseCaseImpl {
            meal_log_repository: Arc::new(MockMealRepo::new()),
            food_item_repository: Arc::new(MockFoodRepo::new()),
            logger: mock_logger(),
        };

        let mut request = params(user_id, Uuid::new_v4(), "1.0");
        request.items.clear();

        let result = use_case.execute(request).await;
        assert!(matches!(result.unwrap_err(), MealLogError::ItemsEmpty));
    }

    #[tokio::test]
    async fn should_reject_meal_logged_in_the_future() {
        let user_id = UserId::new(Uuid::new_v4());
        let use_case = LogMealUseCaseImpl {
            meal_log_repository: Arc::new(MockMealRepo::new()),
            food_item_repository: Arc::new(MockFoodRepo::new()),
            logger: mock_logger(),
        };

        let mut request = params(user_id, Uuid::new_v4(), "1.0");
        request.logged_at = Utc::now() + Duration::hours(2);

        let result = use_case.execute(request).await;
        assert!(matches!(result.unwrap_err(), MealLogError::LoggedAtInFuture));
    }

    #[tokio::test]
    async fn should_reject_non_positive_servings() {
        let user_id = UserId::new(Uuid::new_v4());
        let use_case = LogMealUseCaseImpl {
            meal_log_repository: Arc::new(MockMealRepo::new()),
            food_item_repository: Arc::new(MockFoodRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(user_id, Uuid::new_v4(), "0")).await;
        assert!(matches!(
            result.unwrap_err(),
            MealLogError::ServingsNotPositive
        ));
    }

    #[tokio::test]
    async fn should_abort_without_writes_when_food_item_is_missing() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut food_repo = MockFoodRepo::new();
        food_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        // No expectation on the meal repository: any `log` call would panic.
        let use_case = LogMealUseCaseImpl {
            meal_log_repository: Arc::new(MockMealRepo::new()),
            food_item_repository: Arc::new(food_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(user_id, Uuid::new_v4(), "1.0"))
            .await;
        assert!(matches!(result.unwrap_err(), MealLogError::FoodItemNotFound));
    }

    #[tokio::test]
    async fn should_surface_conflict_when_retries_are_exhausted() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut meal_repo = MockMealRepo::new();
        meal_repo
            .expect_log()
            .returning(|_, _| Err(RepositoryError::Conflict));

        let use_case = LogMealUseCaseImpl {
            meal_log_repository: Arc::new(meal_repo),
            food_item_repository: food_repo_returning_rice(user_id),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(user_id, Uuid::new_v4(), "1.0"))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            MealLogError::Repository(RepositoryError::Conflict)
        ));
    }
}
