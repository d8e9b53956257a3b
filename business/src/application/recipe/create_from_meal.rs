use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::food::model::FoodItem;
use crate::domain::logger::Logger;
use crate::domain::meal::repository::MealLogRepository;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{NewRecipeProps, Recipe, RecipeDetails, RecipeIngredient};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::create_from_meal::{
    CreateRecipeFromMealParams, CreateRecipeFromMealUseCase,
};

/// Clones a logged meal's item list into a recipe. The new recipe keeps a
/// back-reference to the source meal but no data is shared with it; each
/// ingredient points at the same food template with the same servings.
pub struct CreateRecipeFromMealUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub meal_log_repository: Arc<dyn MealLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeFromMealUseCase for CreateRecipeFromMealUseCaseImpl {
    async fn execute(
        &self,
        params: CreateRecipeFromMealParams,
    ) -> Result<RecipeDetails, RecipeError> {
        self.logger.info(&format!(
            "Creating recipe {} from meal log: {}",
            params.name, params.meal_log_id
        ));

        let (_, rows) = self
            .meal_log_repository
            .get_with_items(&params.user_id, params.meal_log_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::MealLogNotFound,
                other => RecipeError::Repository(other),
            })?;

        if rows.is_empty() {
            return Err(RecipeError::MealLogEmpty);
        }

        if self
            .recipe_repository
            .exists_by_name(&params.user_id, &params.name)
            .await?
        {
            return Err(RecipeError::DuplicateName);
        }

        let recipe = Recipe::new(NewRecipeProps {
            user_id: params.user_id,
            name: params.name,
            description: params.description,
            created_from_meal_log_id: Some(params.meal_log_id),
        })?;

        let ingredient_rows: Vec<(RecipeIngredient, FoodItem)> = rows
            .into_iter()
            .map(|(item, food_item)| {
                RecipeIngredient::new(recipe.id, item.food_item_id, item.servings)
                    .map(|ingredient| (ingredient, food_item))
            })
            .collect::<Result<_, _>>()?;

        let ingredients: Vec<RecipeIngredient> = ingredient_rows
            .iter()
            .map(|(ingredient, _)| ingredient.clone())
            .collect();
        self.recipe_repository
            .create_with_ingredients(&recipe, &ingredients)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => RecipeError::DuplicateName,
                other => RecipeError::Repository(other),
            })?;

        Ok(RecipeDetails::assemble(recipe, ingredient_rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food::model::{FoodItem, NutrientProfile};
    use crate::domain::meal::model::{LoggedItem, MealLog, MealLogFilter, NewMealLogProps};
    use crate::domain::pantry::model::PantryDeduction;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn exists_by_name(
                &self,
                user_id: &UserId,
                name: &str,
            ) -> Result<bool, RepositoryError>;
            async fn create_with_ingredients(
                &self,
                recipe: &Recipe,
                ingredients: &[RecipeIngredient],
            ) -> Result<(), RepositoryError>;
            async fn get_with_ingredients(
                &self,
                user_id: &UserId,
                recipe_id: Uuid,
            ) -> Result<(Recipe, Vec<(RecipeIngredient, FoodItem)>), RepositoryError>;
            async fn list(
                &self,
                user_id: &UserId,
                search: Option<String>,
                offset: i64,
                limit: i64,
            ) -> Result<(Vec<(Recipe, Vec<(RecipeIngredient, FoodItem)>)>, u64), RepositoryError>;
            async fn update_metadata(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
            async fn delete(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError>;
        }
    }

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

    fn meal_with_chicken(user_id: UserId) -> (MealLog, Vec<(LoggedItem, FoodItem)>) {
        let meal = MealLog::new(NewMealLogProps {
            user_id,
            meal_name: Some("Sunday roast".to_string()),
            meal_type: None,
            logged_at: Utc::now() - Duration::hours(3),
            notes: None,
        })
        .unwrap();
        let chicken = FoodItem::from_repository(
            Uuid::new_v4(),
            user_id,
            "Chicken thigh".to_string(),
            None,
            dec("150"),
            "g".to_string(),
            NutrientProfile {
                calories: Some(dec("210")),
                protein_g: Some(dec("26")),
                ..Default::default()
            },
            Some(dec("1.10")),
            Utc::now(),
            Utc::now(),
        );
        let item = LoggedItem::new(meal.id, chicken.id, dec("2")).unwrap();
        (meal, vec![(item, chicken)])
    }

    fn params(user_id: UserId, meal_log_id: Uuid) -> CreateRecipeFromMealParams {
        CreateRecipeFromMealParams {
            user_id,
            meal_log_id,
            name: "Roast chicken".to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn should_clone_meal_items_into_recipe() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut meal_repo = MockMealRepo::new();
        meal_repo
            .expect_get_with_items()
            .returning(move |_, _| Ok(meal_with_chicken(user_id)));

        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo.expect_exists_by_name().returning(|_, _| Ok(false));
        recipe_repo
            .expect_create_with_ingredients()
            .withf(|recipe, ingredients| {
                recipe.created_from_meal_log_id.is_some()
                    && ingredients.len() == 1
                    && ingredients[0].servings == "2".parse::<BigDecimal>().unwrap()
            })
            .returning(|_, _| Ok(()));

        let use_case = CreateRecipeFromMealUseCaseImpl {
            recipe_repository: Arc::new(recipe_repo),
            meal_log_repository: Arc::new(meal_repo),
            logger: mock_logger(),
        };

        let details = use_case
            .execute(params(user_id, Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(details.recipe.name, "Roast chicken");
        assert_eq!(details.ingredients.len(), 1);
        assert_eq!(details.totals.calories, Some(dec("420")));
    }

    #[tokio::test]
    async fn should_reject_meal_with_no_items() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut meal_repo = MockMealRepo::new();
        meal_repo.expect_get_with_items().returning(move |_, _| {
            let (meal, _) = meal_with_chicken(user_id);
            Ok((meal, vec![]))
        });

        // No create_with_ingredients expectation: nothing may be written.
        let use_case = CreateRecipeFromMealUseCaseImpl {
            recipe_repository: Arc::new(MockRecipeRepo::new()),
            meal_log_repository: Arc::new(meal_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(user_id, Uuid::new_v4())).await;
        assert!(matches!(result.unwrap_err(), RecipeError::MealLogEmpty));
    }

    #[tokio::test]
    async fn should_reject_duplicate_recipe_name() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut meal_repo = MockMealRepo::new();
        meal_repo
            .expect_get_with_items()
            .returning(move |_, _| Ok(meal_with_chicken(user_id)));

        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo.expect_exists_by_name().returning(|_, _| Ok(true));

        let use_case = CreateRecipeFromMealUseCaseImpl {
            recipe_repository: Arc::new(recipe_repo),
            meal_log_repository: Arc::new(meal_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(user_id, Uuid::new_v4())).await;
        assert!(matches!(result.unwrap_err(), RecipeError::DuplicateName));
    }

    #[tokio::test]
    async fn should_reject_unknown_meal_log() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut meal_repo = MockMealRepo::new();
        meal_repo
            .expect_get_with_items()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = CreateRecipeFromMealUseCaseImpl {
            recipe_repository: Arc::new(MockRecipeRepo::new()),
            meal_log_repository: Arc::new(meal_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(user_id, Uuid::new_v4())).await;
        assert!(matches!(result.unwrap_err(), RecipeError::MealLogNotFound));
    }
}
