use clap::Args;
use mealplanner_assistant::{MealQuery, MealSource, OpenRouterClient};
use mealplanner_shared::MealType;

use super::{CatalogArgs, DisplayArgs};
use crate::{Planner, config::Config, render::render_meals};

#[derive(Args, Debug, Clone, Default)]
pub struct FetchArgs {
    /// Dietary preference, repeatable
    #[arg(long = "diet")]
    pub diets: Vec<String>,

    /// Meal type, repeatable
    #[arg(long = "type")]
    pub types: Vec<MealType>,

    /// Cuisine, repeatable
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,
}

impl From<&FetchArgs> for MealQuery {
    fn from(value: &FetchArgs) -> Self {
        Self {
            diets: value.diets.clone(),
            types: value.types.clone(),
            cuisines: value.cuisines.clone(),
        }
    }
}

/// Asks the configured assistant for more meals and shows the ones added.
pub async fn fetch(
    config: &Config,
    args: &FetchArgs,
    catalog: &CatalogArgs,
    display: &DisplayArgs,
) -> anyhow::Result<String> {
    let mut planner = super::planner(config, catalog, display)?;
    let client = OpenRouterClient::new(config.assistant.clone().into());

    fetch_with(&mut planner, &client, args).await
}

pub async fn fetch_with(
    planner: &mut Planner,
    source: &dyn MealSource,
    args: &FetchArgs,
) -> anyhow::Result<String> {
    let outcome = planner.fetch_more(source, &MealQuery::from(args)).await;

    if let Some(warning) = outcome.warning {
        return Ok(format!("Warning: {warning}\n"));
    }

    let previews = outcome
        .report
        .added
        .iter()
        .filter_map(|name| planner.catalog().find(name))
        .map(|meal| planner.preview(meal))
        .collect::<Vec<_>>();

    let mut output = if previews.is_empty() {
        "No new meals added.\n".to_owned()
    } else {
        render_meals(&previews)?
    };

    if !outcome.report.skipped.is_empty() {
        output.push_str(&format!(
            "\nSkipped, already in catalog: {}\n",
            outcome.report.skipped.join(", ")
        ));
    }

    Ok(output)
}
