//! Plain-text rendering of planner data.
//!
//! Renderers only read the data the planner exposes; they never touch the
//! catalog or the plan directly.

use askama::Template;
use mealplanner_mealplan::WeekPlan;
use mealplanner_shared::{Day, MealType};
use mealplanner_shopping::GroceryList;
use strum::VariantArray;

use crate::planner::{MealPreview, Preferences};

struct MealCard {
    name: String,
    cuisine: String,
    meal_type: String,
    tags: String,
    ingredients: Vec<IngredientLine>,
}

struct IngredientLine {
    item: String,
    value: String,
    unit: String,
    department: String,
}

#[derive(Template)]
#[template(path = "meals.txt")]
struct MealsTemplate {
    meals: Vec<MealCard>,
}

struct DayView {
    name: String,
    slots: Vec<SlotView>,
}

struct SlotView {
    name: String,
    meals: Vec<String>,
}

#[derive(Template)]
#[template(path = "week_plan.txt")]
struct WeekPlanTemplate {
    days: Vec<DayView>,
}

struct GroceryGroup {
    department: String,
    entries: Vec<GroceryLine>,
}

struct GroceryLine {
    item: String,
    value: String,
    unit: String,
}

#[derive(Template)]
#[template(path = "grocery.txt")]
struct GroceryTemplate {
    groups: Vec<GroceryGroup>,
}

pub fn render_meals(previews: &[MealPreview]) -> askama::Result<String> {
    let meals = previews
        .iter()
        .map(|preview| MealCard {
            name: preview.name.clone(),
            cuisine: preview.cuisine.clone(),
            meal_type: preview.meal_type.to_string(),
            tags: if preview.tags.is_empty() {
                "None".to_owned()
            } else {
                preview.tags.join(", ")
            },
            ingredients: preview
                .ingredients
                .iter()
                .map(|ingredient| IngredientLine {
                    item: ingredient.item.clone(),
                    value: ingredient.quantity.value.clone(),
                    unit: ingredient.quantity.unit.clone(),
                    department: ingredient.department.clone(),
                })
                .collect(),
        })
        .collect();

    MealsTemplate { meals }.render()
}

/// Every day is listed; only slots holding meals are shown.
pub fn render_week_plan(plan: &WeekPlan) -> askama::Result<String> {
    let days = Day::VARIANTS
        .iter()
        .map(|&day| DayView {
            name: day.to_string(),
            slots: MealType::VARIANTS
                .iter()
                .filter(|&&slot| !plan.meals(day, slot).is_empty())
                .map(|&slot| SlotView {
                    name: capitalize(slot.as_ref()),
                    meals: plan
                        .meals(day, slot)
                        .iter()
                        .map(|meal| meal.name.clone())
                        .collect(),
                })
                .collect(),
        })
        .collect();

    WeekPlanTemplate { days }.render()
}

/// Grocery list grouped by department, quantities converted with
/// `preferences`.
pub fn render_grocery(list: &GroceryList, preferences: Preferences) -> askama::Result<String> {
    let servings = f64::from(preferences.servings);

    let groups = list
        .by_department()
        .into_iter()
        .map(|group| GroceryGroup {
            department: group.department.clone(),
            entries: GroceryList::new(group.entries)
                .display(servings, preferences.unit_system)
                .into_iter()
                .map(|entry| GroceryLine {
                    item: entry.item,
                    value: entry.quantity.value,
                    unit: entry.quantity.unit,
                })
                .collect(),
        })
        .collect();

    GroceryTemplate { groups }.render()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
