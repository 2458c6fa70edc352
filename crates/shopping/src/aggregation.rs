use std::collections::HashMap;

use mealplanner_mealplan::WeekPlan;
use mealplanner_shared::{Meal, Unit};

use crate::{GroceryEntry, GroceryList};

/// Ingredient Aggregation Service
///
/// Stateless domain service that folds the ingredients of planned meals into
/// one grocery list.
///
/// - entries are keyed by `(item, department, unit)`, so "Spices" in tbsp and
///   "Spices" in g stay two lines
/// - totals are raw catalog quantities, never serving-scaled
/// - entries come out in first-seen key order
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    pub fn aggregate(plan: &WeekPlan) -> GroceryList {
        let list = Self::aggregate_meals(plan.enumerate().map(|planned| &**planned.meal));

        tracing::debug!(
            meals = plan.len(),
            entries = list.len(),
            "grocery list aggregated"
        );

        list
    }

    pub fn aggregate_meals<'a>(meals: impl IntoIterator<Item = &'a Meal>) -> GroceryList {
        let mut positions: HashMap<(String, String, Unit), usize> = HashMap::new();
        let mut entries: Vec<GroceryEntry> = Vec::new();

        for ingredient in meals.into_iter().flat_map(|meal| &meal.ingredients) {
            let key = (
                ingredient.item.clone(),
                ingredient.department.clone(),
                ingredient.unit.clone(),
            );

            let position = *positions.entry(key).or_insert_with(|| {
                entries.push(GroceryEntry {
                    item: ingredient.item.clone(),
                    department: ingredient.department.clone(),
                    unit: ingredient.unit.clone(),
                    total: 0.0,
                });
                entries.len() - 1
            });

            entries[position].total += ingredient.quantity;
        }

        GroceryList::new(entries)
    }
}

/// Grocery list for everything assigned in `plan`.
pub fn aggregate(plan: &WeekPlan) -> GroceryList {
    IngredientAggregationService::aggregate(plan)
}
