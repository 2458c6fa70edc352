use anyhow::Context;
use clap::Args;
use mealplanner_catalog::MealFilter;

use super::{CatalogArgs, DisplayArgs};
use crate::{config::Config, render::render_meals};

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// breakfast, lunch, dinner, snack or all
    #[arg(long = "type", default_value = "all")]
    pub meal_type: String,

    /// Exact cuisine name or all
    #[arg(long, default_value = "all")]
    pub cuisine: String,

    /// Dietary tag, case-insensitive, or all
    #[arg(long, default_value = "all")]
    pub diet: String,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            meal_type: "all".to_owned(),
            cuisine: "all".to_owned(),
            diet: "all".to_owned(),
        }
    }
}

/// Filtered catalog with scaled ingredient previews.
pub fn meals(
    config: &Config,
    filter: &FilterArgs,
    catalog: &CatalogArgs,
    display: &DisplayArgs,
) -> anyhow::Result<String> {
    let planner = super::planner(config, catalog, display)?;
    let filter = MealFilter::from_text(&filter.meal_type, &filter.cuisine, &filter.diet)
        .with_context(|| format!("unknown meal type `{}`", filter.meal_type))?;

    let previews = planner
        .available_meals(&filter)
        .iter()
        .map(|meal| planner.preview(meal))
        .collect::<Vec<_>>();

    tracing::debug!(meals = previews.len(), "meals filtered");

    Ok(render_meals(&previews)?)
}
