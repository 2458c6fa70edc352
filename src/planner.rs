use std::sync::Arc;

use mealplanner_assistant::{MealQuery, MealSource};
use mealplanner_catalog::{Catalog, MealFilter, MergeReport};
use mealplanner_mealplan::WeekPlan;
use mealplanner_shared::{Error, Meal, MealType, Result, UnitSystem};
use mealplanner_shopping::{DisplayQuantity, GroceryList, aggregate, convert};

pub const EMPTY_FETCH_WARNING: &str = "No meals returned from AI. Try fewer filters.";
pub const MALFORMED_FETCH_WARNING: &str =
    "AI response couldn't be understood. Try again or reduce filter complexity.";

/// How quantities are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub servings: u32,
    pub unit_system: UnitSystem,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            servings: 2,
            unit_system: UnitSystem::Metric,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientPreview {
    pub item: String,
    pub department: String,
    pub quantity: DisplayQuantity,
}

/// A candidate meal with quantities converted for the current preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPreview {
    pub name: String,
    pub meal_type: MealType,
    pub cuisine: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<IngredientPreview>,
}

/// Everything a renderer needs, as plain data.
#[derive(Debug)]
pub struct PlannerView<'a> {
    pub meals: Vec<Arc<Meal>>,
    pub plan: &'a WeekPlan,
    pub grocery: GroceryList,
}

/// Result of asking a [`MealSource`] for more meals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub report: MergeReport,
    pub warning: Option<String>,
}

/// Owns the catalog, the week plan and the display preferences; the single
/// place where user actions change state.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    catalog: Catalog,
    plan: WeekPlan,
    preferences: Preferences,
}

impl Planner {
    pub fn new(catalog: Catalog, preferences: Preferences) -> Self {
        Self {
            catalog,
            plan: WeekPlan::new(),
            preferences,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn available_meals(&self, filter: &MealFilter) -> Vec<Arc<Meal>> {
        self.catalog.filter(filter)
    }

    pub fn preview(&self, meal: &Meal) -> MealPreview {
        let servings = f64::from(self.preferences.servings);

        MealPreview {
            name: meal.name.clone(),
            meal_type: meal.meal_type,
            cuisine: meal.cuisine.clone(),
            tags: meal.dietary_tags.clone(),
            ingredients: meal
                .ingredients
                .iter()
                .map(|ingredient| IngredientPreview {
                    item: ingredient.item.clone(),
                    department: ingredient.department.clone(),
                    quantity: convert(
                        ingredient.quantity,
                        &ingredient.unit,
                        servings,
                        self.preferences.unit_system,
                    ),
                })
                .collect(),
        }
    }

    /// Assigns the catalog meal called `meal_name`.
    pub fn assign(&mut self, day: &str, slot: &str, meal_name: &str) -> Result<()> {
        let meal = self
            .catalog
            .find(meal_name)
            .cloned()
            .ok_or_else(|| Error::MealNotFound(meal_name.to_owned()))?;

        self.assign_meal(day, slot, meal)
    }

    pub fn assign_meal(&mut self, day: &str, slot: &str, meal: Arc<Meal>) -> Result<()> {
        self.plan.assign(day, slot, meal).inspect_err(|err| {
            tracing::warn!(%err, "assignment rejected");
        })
    }

    pub fn clear_plan(&mut self) {
        self.plan.clear();
    }

    pub fn grocery_list(&self) -> GroceryList {
        aggregate(&self.plan)
    }

    pub fn view(&self, filter: &MealFilter) -> PlannerView<'_> {
        PlannerView {
            meals: self.available_meals(filter),
            plan: &self.plan,
            grocery: self.grocery_list(),
        }
    }

    /// Asks `source` for more meals and appends the new ones to the catalog.
    ///
    /// A failed or unparsable fetch leaves the catalog untouched and comes
    /// back as a warning.
    #[tracing::instrument(skip_all)]
    pub async fn fetch_more(&mut self, source: &dyn MealSource, query: &MealQuery) -> FetchOutcome {
        let meals = match source.fetch_meals(query).await {
            Ok(meals) => meals,
            Err(Error::MalformedExternalData(reason)) => {
                tracing::error!(%reason, "discarding assistant meals");

                return FetchOutcome {
                    warning: Some(MALFORMED_FETCH_WARNING.to_owned()),
                    ..Default::default()
                };
            }
            Err(err) => {
                tracing::error!(%err, "assistant fetch failed");

                return FetchOutcome {
                    warning: Some(err.to_string()),
                    ..Default::default()
                };
            }
        };

        if meals.is_empty() {
            return FetchOutcome {
                warning: Some(EMPTY_FETCH_WARNING.to_owned()),
                ..Default::default()
            };
        }

        let report = match self.catalog.merge(meals) {
            Ok(report) => report,
            Err(err) => {
                tracing::error!(%err, "discarding assistant meals");

                return FetchOutcome {
                    warning: Some(MALFORMED_FETCH_WARNING.to_owned()),
                    ..Default::default()
                };
            }
        };

        tracing::info!(
            added = report.added.len(),
            skipped = report.skipped.len(),
            "assistant meals merged"
        );

        FetchOutcome {
            report,
            warning: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplanner_shared::Day;

    #[test]
    fn test_preview_uses_preferences() {
        let planner = Planner::new(
            Catalog::seed(),
            Preferences {
                servings: 4,
                unit_system: UnitSystem::Imperial,
            },
        );
        let carbonara = planner.catalog().find("Spaghetti Carbonara").unwrap();

        let preview = planner.preview(carbonara);

        assert_eq!(preview.ingredients[0].item, "Spaghetti");
        assert_eq!(preview.ingredients[0].quantity.value, "14.1");
        assert_eq!(preview.ingredients[0].quantity.unit, "oz");
        assert_eq!(preview.ingredients[2].quantity.value, "4.0");
        assert_eq!(preview.ingredients[2].quantity.unit, "pcs");
    }

    #[test]
    fn test_assign_unknown_meal_leaves_plan_unchanged() {
        let mut planner = Planner::new(Catalog::seed(), Preferences::default());

        let err = planner.assign("Monday", "dinner", "Pizza").unwrap_err();

        assert!(matches!(err, Error::MealNotFound(name) if name == "Pizza"));
        assert!(planner.plan().is_empty());
    }

    #[test]
    fn test_assign_then_clear() {
        let mut planner = Planner::new(Catalog::seed(), Preferences::default());

        planner
            .assign("Saturday", "lunch", "Chicken Tikka Masala")
            .unwrap();
        assert_eq!(planner.plan().meals(Day::Saturday, MealType::Lunch).len(), 1);
        assert_eq!(planner.grocery_list().len(), 4);

        planner.clear_plan();
        assert!(planner.grocery_list().is_empty());
    }

    #[test]
    fn test_view_bundles_filtered_meals_plan_and_grocery() {
        let mut planner = Planner::new(Catalog::seed(), Preferences::default());
        planner
            .assign("Monday", "dinner", "Spaghetti Carbonara")
            .unwrap();

        let view = planner.view(&MealFilter {
            cuisine: Some("indian".to_owned()),
            ..Default::default()
        });

        assert_eq!(view.meals.len(), 1);
        assert_eq!(view.meals[0].name, "Chicken Tikka Masala");
        assert_eq!(view.plan.len(), 1);
        assert_eq!(view.grocery.len(), 4);
    }
}
