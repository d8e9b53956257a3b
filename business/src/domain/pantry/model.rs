use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::PantryError;
use crate::domain::food::model::FoodItem;
use crate::domain::shared::value_objects::UserId;

/// Current on-hand stock of a food template for a user. At most one row
/// exists per (user, food template) pair and its quantity never goes
/// negative, whatever gets deducted from it.
#[derive(Debug, Clone)]
pub struct PantryItem {
    pub id: Uuid,
    pub user_id: UserId,
    pub food_item_id: Uuid,
    pub quantity: BigDecimal,
    pub unit: String,
    pub expiration_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewPantryItemProps {
    pub user_id: UserId,
    pub food_item_id: Uuid,
    pub quantity: BigDecimal,
    pub unit: String,
    pub expiration_date: Option<NaiveDate>,
    pub location: Option<String>,
}

impl PantryItem {
    pub fn new(props: NewPantryItemProps) -> Result<Self, PantryError> {
        if props.quantity <= BigDecimal::zero() {
            return Err(PantryError::QuantityNotPositive);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            food_item_id: props.food_item_id,
            quantity: props.quantity,
            unit: props.unit,
            expiration_date: props.expiration_date,
            location: props.location,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        food_item_id: Uuid,
        quantity: BigDecimal,
        unit: String,
        expiration_date: Option<NaiveDate>,
        location: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            food_item_id,
            quantity,
            unit,
            expiration_date,
            location,
            created_at,
            updated_at,
        }
    }
}

/// A pantry row joined with the food template it stocks.
#[derive(Debug, Clone)]
pub struct PantryEntry {
    pub item: PantryItem,
    pub food_item: FoodItem,
}

/// What happened to one pantry row when a consumption was applied to it.
/// All three outcomes are non-fatal: logged consumption is accepted even
/// when it cannot be reconciled against stock.
#[derive(Debug, Clone, PartialEq)]
pub enum DeductionOutcome {
    /// No pantry row exists for the food; nothing was deducted.
    NotTracked,
    /// Stock covered the request; `remaining` is what is left.
    Deducted { remaining: BigDecimal },
    /// Stock was short; the row was set to exactly zero and `available`
    /// is what it held before the update.
    Clamped { available: BigDecimal },
}

impl DeductionOutcome {
    /// Classifies a deduction from the quantity the row held before the
    /// conditional update ran. `None` means no row existed.
    pub fn classify(before: Option<BigDecimal>, requested: &BigDecimal) -> Self {
        match before {
            None => Self::NotTracked,
            Some(quantity) if quantity >= *requested => Self::Deducted {
                remaining: quantity - requested,
            },
            Some(quantity) => Self::Clamped {
                available: quantity,
            },
        }
    }
}

/// Deduction outcome for one logged item, keyed by its food template.
#[derive(Debug, Clone)]
pub struct PantryDeduction {
    pub food_item_id: Uuid,
    pub outcome: DeductionOutcome,
}

/// Non-fatal notice that a logged consumption exceeded tracked stock.
/// `available_servings` is `None` when the food was not tracked at all.
#[derive(Debug, Clone, Serialize)]
pub struct ShortageWarning {
    pub food_item_id: Uuid,
    pub food_item_name: String,
    pub requested_servings: BigDecimal,
    pub available_servings: Option<BigDecimal>,
    pub message: String,
}

impl ShortageWarning {
    pub fn from_outcome(
        outcome: &DeductionOutcome,
        food_item_id: Uuid,
        food_item_name: &str,
        requested: &BigDecimal,
    ) -> Option<Self> {
        match outcome {
            DeductionOutcome::Deducted { .. } => None,
            DeductionOutcome::NotTracked => Some(Self {
                food_item_id,
                food_item_name: food_item_name.to_string(),
                requested_servings: requested.clone(),
                available_servings: None,
                message: format!("{food_item_name} is not tracked in the pantry, nothing was deducted"),
            }),
            DeductionOutcome::Clamped { available } => Some(Self {
                food_item_id,
                food_item_name: food_item_name.to_string(),
                requested_servings: requested.clone(),
                available_servings: Some(available.clone()),
                message: format!(
                    "only {available} of {requested} servings of {food_item_name} were in the pantry, quantity set to 0"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    fn new_props(quantity: &str) -> NewPantryItemProps {
        NewPantryItemProps {
            user_id: UserId::new(Uuid::new_v4()),
            food_item_id: Uuid::new_v4(),
            quantity: dec(quantity),
            unit: "g".to_string(),
            expiration_date: None,
            location: Some("Pantry".to_string()),
        }
    }

    #[test]
    fn should_create_pantry_item_when_quantity_positive() {
        assert!(PantryItem::new(new_props("2.5")).is_ok());
    }

    #[test]
    fn should_reject_zero_quantity() {
        assert!(matches!(
            PantryItem::new(new_props("0")).unwrap_err(),
            PantryError::QuantityNotPositive
        ));
    }

    #[test]
    fn should_deduct_when_stock_covers_request() {
        let outcome = DeductionOutcome::classify(Some(dec("2.0")), &dec("1.5"));
        assert_eq!(
            outcome,
            DeductionOutcome::Deducted {
                remaining: dec("0.5")
            }
        );
    }

    #[test]
    fn should_clamp_when_stock_is_short() {
        let outcome = DeductionOutcome::classify(Some(dec("1.0")), &dec("3.0"));
        assert_eq!(
            outcome,
            DeductionOutcome::Clamped {
                available: dec("1.0")
            }
        );
    }

    #[test]
    fn should_report_not_tracked_when_row_missing() {
        let outcome = DeductionOutcome::classify(None, &dec("1.0"));
        assert_eq!(outcome, DeductionOutcome::NotTracked);
    }

    #[test]
    fn should_emit_no_warning_for_covered_deduction() {
        let outcome = DeductionOutcome::classify(Some(dec("2.0")), &dec("1.5"));
        let warning =
            ShortageWarning::from_outcome(&outcome, Uuid::new_v4(), "Rice", &dec("1.5"));
        assert!(warning.is_none());
    }

    #[test]
    fn should_describe_shortage_with_requested_and_available() {
        let outcome = DeductionOutcome::classify(Some(dec("1.0")), &dec("3.0"));
        let warning =
            ShortageWarning::from_outcome(&outcome, Uuid::new_v4(), "Rice", &dec("3.0")).unwrap();
        assert_eq!(warning.food_item_name, "Rice");
        assert_eq!(warning.requested_servings, dec("3.0"));
        assert_eq!(warning.available_servings, Some(dec("1.0")));
    }

    #[test]
    fn should_describe_untracked_food_without_available_quantity() {
        let warning = ShortageWarning::from_outcome(
            &DeductionOutcome::NotTracked,
            Uuid::new_v4(),
            "Rice",
            &dec("1.0"),
        )
        .unwrap();
        assert!(warning.available_servings.is_none());
        assert!(warning.message.contains("not tracked"));
    }

    proptest! {
        #[test]
        fn resulting_quantity_is_never_negative(before in 0u32..1_000, requested in 1u32..1_000) {
            let outcome = DeductionOutcome::classify(
                Some(BigDecimal::from(before)),
                &BigDecimal::from(requested),
            );
            match outcome {
                DeductionOutcome::Deducted { remaining } => {
                    prop_assert!(before >= requested);
                    prop_assert_eq!(remaining, BigDecimal::from(before - requested));
                }
                DeductionOutcome::Clamped { available } => {
                    prop_assert!(requested > before);
                    prop_assert_eq!(available, BigDecimal::from(before));
                }
                DeductionOutcome::NotTracked => prop_assert!(false, "row was present"),
            }
        }
    }
}
