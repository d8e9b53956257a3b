use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::PantryItem;
use crate::domain::shared::value_objects::UserId;

pub struct AddPantryItemParams {
    pub user_id: UserId,
    pub food_item_id: Uuid,
    pub quantity: BigDecimal,
    pub unit: String,
    pub expiration_date: Option<NaiveDate>,
    pub location: Option<String>,
}

#[async_trait]
pub trait AddPantryItemUseCase: Send + Sync {
    async fn execute(&self, params: AddPantryItemParams) -> Result<PantryItem, PantryError>;
}
