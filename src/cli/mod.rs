mod fetch;
mod meals;
mod plan;

pub use fetch::*;
pub use meals::*;
pub use plan::*;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use mealplanner_catalog::Catalog;
use mealplanner_shared::UnitSystem;

use crate::{Planner, Preferences, config::Config};

#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Number of servings (overrides config file)
    #[arg(long)]
    pub servings: Option<u32>,

    /// metric or imperial (overrides config file)
    #[arg(long)]
    pub units: Option<UnitSystem>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// JSON catalog to use instead of the built-in meals
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Builds the planner from config, with command line overrides applied.
pub fn planner(config: &Config, catalog: &CatalogArgs, display: &DisplayArgs) -> anyhow::Result<Planner> {
    let servings = display.servings.unwrap_or(config.planner.servings);
    anyhow::ensure!(servings >= 1, "servings must be at least 1");

    let preferences = Preferences {
        servings,
        unit_system: display.units.unwrap_or(config.planner.unit_system),
    };

    let path = catalog
        .catalog
        .clone()
        .or_else(|| config.planner.catalog_path.as_ref().map(PathBuf::from));

    let catalog = match path {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::seed(),
    };

    Ok(Planner::new(catalog, preferences))
}
