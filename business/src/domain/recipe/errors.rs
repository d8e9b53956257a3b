#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.name_empty")]
    NameEmpty,
    #[error("recipe.duplicate_name")]
    DuplicateName,
    #[error("recipe.servings_not_positive")]
    ServingsNotPositive,
    #[error("recipe.meal_log_not_found")]
    MealLogNotFound,
    #[error("recipe.meal_log_empty")]
    MealLogEmpty,
    #[error("recipe.food_item_not_found")]
    FoodItemNotFound,
    #[error("recipe.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
