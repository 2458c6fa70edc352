use mealplanner_shared::MealType;

/// How many meals the assistant is asked for.
pub const MEAL_COUNT: u8 = 8;

/// Checked filter boxes turned into a request for more meals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealQuery {
    pub diets: Vec<String>,
    pub types: Vec<MealType>,
    pub cuisines: Vec<String>,
}

impl MealQuery {
    pub fn prompt(&self) -> String {
        let mut parts = Vec::new();

        if !self.diets.is_empty() {
            parts.push(format!("{} diet", self.diets.join(", ")));
        }

        if !self.cuisines.is_empty() {
            parts.push(format!("{} cuisine", self.cuisines.join(", ")));
        }

        if self.types.is_empty() {
            parts.push("meals".to_owned());
        } else {
            let types = self
                .types
                .iter()
                .map(MealType::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("{types} meals"));
        }

        format!(
            "Give me {MEAL_COUNT} {} suitable for 2 servings. Return as a JSON array. Each meal should include:
- name
- type
- cuisine
- dietaryTags (array)
- ingredients (array with item, quantity [in grams or ml], unit, department).",
            parts.join(" ")
        )
    }
}
