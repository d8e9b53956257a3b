use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::MealLogError;
use super::value_objects::MealType;
use crate::domain::food::model::FoodItem;
use crate::domain::nutrition::model::NutritionTotals;
use crate::domain::shared::value_objects::UserId;

/// One meal event. The item list is created atomically with the header
/// and is immutable afterwards; only the metadata fields can be edited.
#[derive(Debug, Clone)]
pub struct MealLog {
    pub id: Uuid,
    pub user_id: UserId,
    pub meal_name: Option<String>,
    pub meal_type: Option<MealType>,
    pub logged_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewMealLogProps {
    pub user_id: UserId,
    pub meal_name: Option<String>,
    pub meal_type: Option<MealType>,
    pub logged_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl MealLog {
    pub fn new(props: NewMealLogProps) -> Result<Self, MealLogError> {
        let now = Utc::now();
        if props.logged_at > now {
            return Err(MealLogError::LoggedAtInFuture);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            meal_name: props.meal_name,
            meal_type: props.meal_type,
            logged_at: props.logged_at,
            notes: props.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        meal_name: Option<String>,
        meal_type: Option<MealType>,
        logged_at: DateTime<Utc>,
        notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            meal_name,
            meal_type,
            logged_at,
            notes,
            created_at,
            updated_at,
        }
    }
}

/// A consumed quantity of a food template inside one meal log.
#[derive(Debug, Clone)]
pub struct LoggedItem {
    pub id: Uuid,
    pub meal_log_id: Uuid,
    pub food_item_id: Uuid,
    pub servings: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl LoggedItem {
    pub fn new(
        meal_log_id: Uuid,
        food_item_id: Uuid,
        servings: BigDecimal,
    ) -> Result<Self, MealLogError> {
        if servings <= BigDecimal::zero() {
            return Err(MealLogError::ServingsNotPositive);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            meal_log_id,
            food_item_id,
            servings,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        meal_log_id: Uuid,
        food_item_id: Uuid,
        servings: BigDecimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            meal_log_id,
            food_item_id,
            servings,
            created_at,
        }
    }
}

/// A logged item joined with its food template and the totals derived
/// from it.
#[derive(Debug, Clone)]
pub struct LoggedItemDetail {
    pub item: LoggedItem,
    pub food_item: FoodItem,
    pub totals: NutritionTotals,
}

/// A meal log with its items and aggregated totals. Totals are always
/// recomputed from the current template values, never read from a cache,
/// so template edits show up in past meals too.
#[derive(Debug, Clone)]
pub struct MealDetails {
    pub meal: MealLog,
    pub items: Vec<LoggedItemDetail>,
    pub totals: NutritionTotals,
}

impl MealDetails {
    pub fn assemble(meal: MealLog, rows: Vec<(LoggedItem, FoodItem)>) -> Self {
        let items: Vec<LoggedItemDetail> = rows
            .into_iter()
            .map(|(item, food_item)| {
                let totals = NutritionTotals::for_item(&food_item, &item.servings);
                LoggedItemDetail {
                    item,
                    food_item,
                    totals,
                }
            })
            .collect();
        let totals = NutritionTotals::sum(items.iter().map(|detail| &detail.totals));
        Self {
            meal,
            items,
            totals,
        }
    }
}

/// Conjunction of optional meal history filters; every supplied
/// predicate must match.
#[derive(Debug, Clone, Default)]
pub struct MealLogFilter {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub meal_type: Option<MealType>,
}
