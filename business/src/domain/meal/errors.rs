#[derive(Debug, thiserror::Error)]
pub enum MealLogError {
    #[error("meal_log.items_empty")]
    ItemsEmpty,
    #[error("meal_log.servings_not_positive")]
    ServingsNotPositive,
    #[error("meal_log.logged_at_in_future")]
    LoggedAtInFuture,
    #[error("meal_log.invalid_meal_type")]
    InvalidMealType,
    #[error("meal_log.food_item_not_found")]
    FoodItemNotFound,
    #[error("meal_log.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
