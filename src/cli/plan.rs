use anyhow::Context;

use super::{CatalogArgs, DisplayArgs};
use crate::{
    config::Config,
    render::{render_grocery, render_week_plan},
};

/// Splits `DAY:SLOT:MEAL`; the meal name may itself contain colons.
pub fn parse_assignment(value: &str) -> anyhow::Result<(&str, &str, &str)> {
    let mut parts = value.splitn(3, ':');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(slot), Some(meal)) if !meal.trim().is_empty() => {
            Ok((day.trim(), slot.trim(), meal.trim()))
        }
        _ => anyhow::bail!("expected DAY:SLOT:MEAL, got `{value}`"),
    }
}

/// Week plan and grocery list for the given assignments.
pub fn plan(
    config: &Config,
    assignments: &[String],
    catalog: &CatalogArgs,
    display: &DisplayArgs,
) -> anyhow::Result<String> {
    let mut planner = super::planner(config, catalog, display)?;

    for assignment in assignments {
        let (day, slot, meal) = parse_assignment(assignment)?;
        planner
            .assign(day, slot, meal)
            .with_context(|| format!("cannot assign `{assignment}`"))?;
    }

    let week = render_week_plan(planner.plan())?;
    let grocery = render_grocery(&planner.grocery_list(), planner.preferences())?;

    Ok(format!(
        "Week plan\n{}\n\nGrocery list ({} servings)\n{}\n",
        week.trim_end(),
        planner.preferences().servings,
        grocery.trim_end()
    ))
}
