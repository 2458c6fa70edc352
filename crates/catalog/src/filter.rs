use std::sync::Arc;

use mealplanner_shared::{Meal, MealType};

/// Literal accepted as "match everything" when a criterion comes from text.
pub const WILDCARD: &str = "all";

/// Browse criteria. `None` is the wildcard for every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealFilter {
    pub meal_type: Option<MealType>,
    pub cuisine: Option<String>,
    pub diet_tag: Option<String>,
}

impl MealFilter {
    /// Builds a filter from raw select values, where `all` or an empty string
    /// means wildcard.
    pub fn from_text(
        meal_type: &str,
        cuisine: &str,
        diet_tag: &str,
    ) -> Result<Self, strum::ParseError> {
        let meal_type = match wildcard(meal_type) {
            Some(value) => Some(value.parse()?),
            None => None,
        };

        Ok(Self {
            meal_type,
            cuisine: wildcard(cuisine).map(str::to_owned),
            diet_tag: wildcard(diet_tag).map(str::to_owned),
        })
    }

    pub fn matches(&self, meal: &Meal) -> bool {
        let matches_type = self.meal_type.is_none_or(|t| meal.meal_type == t);
        let matches_cuisine = self
            .cuisine
            .as_deref()
            .is_none_or(|c| meal.cuisine == c);
        let matches_diet = self.diet_tag.as_deref().is_none_or(|tag| meal.has_tag(tag));

        matches_type && matches_cuisine && matches_diet
    }
}

fn wildcard(value: &str) -> Option<&str> {
    let value = value.trim();

    if value.is_empty() || value.eq_ignore_ascii_case(WILDCARD) {
        None
    } else {
        Some(value)
    }
}

/// Stable filter over a meal list; result keeps the input order.
pub fn filter_meals(meals: &[Arc<Meal>], filter: &MealFilter) -> Vec<Arc<Meal>> {
    meals
        .iter()
        .filter(|meal| filter.matches(meal))
        .cloned()
        .collect()
}
