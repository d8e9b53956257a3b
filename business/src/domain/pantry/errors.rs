#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    #[error("pantry.quantity_not_positive")]
    QuantityNotPositive,
    #[error("pantry.unit_mismatch")]
    UnitMismatch,
    #[error("pantry.food_item_not_found")]
    FoodItemNotFound,
    #[error("pantry.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
