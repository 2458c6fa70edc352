use mealplanner_shared::{Error, Meal, Result};
use validator::Validate;

/// Pulls the meal array out of free-form assistant output.
///
/// Everything from the first `[` to the last `]` is parsed as a JSON array of
/// meals. Any parse or validation failure rejects the whole batch.
pub fn extract_meals(content: &str) -> Result<Vec<Meal>> {
    let (Some(start), Some(end)) = (content.find('['), content.rfind(']')) else {
        return Err(Error::MalformedExternalData(
            "no JSON array in response".to_owned(),
        ));
    };

    if end < start {
        return Err(Error::MalformedExternalData(
            "no JSON array in response".to_owned(),
        ));
    }

    let meals: Vec<Meal> = serde_json::from_str(&content[start..=end])?;

    for meal in &meals {
        meal.validate().map_err(|err| {
            Error::MalformedExternalData(format!("meal `{}`: {err}", meal.name))
        })?;
    }

    Ok(meals)
}
