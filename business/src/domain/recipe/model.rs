use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::RecipeError;
use crate::domain::food::model::FoodItem;
use crate::domain::nutrition::model::NutritionTotals;
use crate::domain::shared::value_objects::UserId;

/// A named, reusable list of (food template, servings) pairs. The name is
/// unique per user (exact, case-sensitive). A recipe cloned from a meal
/// keeps a back-reference to it; that reference is cleared when the meal
/// is deleted and the recipe stays valid.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub created_from_meal_log_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewRecipeProps {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub created_from_meal_log_id: Option<Uuid>,
}

impl Recipe {
    pub fn new(props: NewRecipeProps) -> Result<Self, RecipeError> {
        if props.name.trim().is_empty() {
            return Err(RecipeError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name: props.name,
            description: props.description,
            created_from_meal_log_id: props.created_from_meal_log_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        description: Option<String>,
        created_from_meal_log_id: Option<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            created_from_meal_log_id,
            created_at,
            updated_at,
        }
    }
}

/// One ingredient line of a recipe; the same (food template, servings)
/// shape as a logged item. Snapshot by reference: the template is
/// pointed at, not frozen, so template edits flow into the recipe's
/// computed totals.
#[derive(Debug, Clone)]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub food_item_id: Uuid,
    pub servings: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl RecipeIngredient {
    pub fn new(
        recipe_id: Uuid,
        food_item_id: Uuid,
        servings: BigDecimal,
    ) -> Result<Self, RecipeError> {
        if servings <= BigDecimal::zero() {
            return Err(RecipeError::ServingsNotPositive);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            recipe_id,
            food_item_id,
            servings,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        recipe_id: Uuid,
        food_item_id: Uuid,
        servings: BigDecimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            recipe_id,
            food_item_id,
            servings,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecipeIngredientDetail {
    pub ingredient: RecipeIngredient,
    pub food_item: FoodItem,
    pub totals: NutritionTotals,
}

/// A recipe with its ingredient lines and totals computed on demand from
/// the current template values.
#[derive(Debug, Clone)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub ingredients: Vec<RecipeIngredientDetail>,
    pub totals: NutritionTotals,
}

impl RecipeDetails {
    pub fn assemble(recipe: Recipe, rows: Vec<(RecipeIngredient, FoodItem)>) -> Self {
        let ingredients: Vec<RecipeIngredientDetail> = rows
            .into_iter()
            .map(|(ingredient, food_item)| {
                let totals = NutritionTotals::for_item(&food_item, &ingredient.servings);
                RecipeIngredientDetail {
                    ingredient,
                    food_item,
                    totals,
                }
            })
            .collect();
        let totals = NutritionTotals::sum(ingredients.iter().map(|detail| &detail.totals));
        Self {
            recipe,
            ingredients,
            totals,
        }
    }
}

/// Listing shape: header plus ingredient count and aggregated totals.
#[derive(Debug, Clone)]
pub struct RecipeListEntry {
    pub recipe: Recipe,
    pub ingredient_count: usize,
    pub totals: NutritionTotals,
}

impl RecipeListEntry {
    pub fn assemble(recipe: Recipe, rows: Vec<(RecipeIngredient, FoodItem)>) -> Self {
        let ingredient_count = rows.len();
        let item_totals: Vec<NutritionTotals> = rows
            .iter()
            .map(|(ingredient, food_item)| NutritionTotals::for_item(food_item, &ingredient.servings))
            .collect();
        Self {
            recipe,
            ingredient_count,
            totals: NutritionTotals::sum(&item_totals),
        }
    }
}
