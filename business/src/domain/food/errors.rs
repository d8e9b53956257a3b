#[derive(Debug, thiserror::Error)]
pub enum FoodItemError {
    #[error("food_item.name_empty")]
    NameEmpty,
    #[error("food_item.serving_size_not_positive")]
    ServingSizeNotPositive,
    #[error("food_item.nutrient_negative")]
    NutrientNegative,
    #[error("food_item.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
