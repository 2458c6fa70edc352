use mealplanner_shared::{Unit, UnitSystem};
use serde::Serialize;

/// Catalog quantities are written for this many servings.
pub const BASE_SERVINGS: f64 = 2.0;

const GRAMS_TO_OUNCES: f64 = 0.0353;
const MILLILITERS_TO_CUPS: f64 = 0.0042;

/// Quantity ready to show: value already formatted with one decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayQuantity {
    pub value: String,
    pub unit: String,
}

/// Scales `quantity` from the two-serving baseline to `servings` and
/// expresses it in `system`.
///
/// In the imperial system grams become ounces and milliliters become cups;
/// every other unit is shown as is. The value is rounded half away from zero
/// to one decimal.
///
/// Servings are not validated: zero yields `0.0` and a negative count yields
/// a negative value.
pub fn convert(quantity: f64, unit: &Unit, servings: f64, system: UnitSystem) -> DisplayQuantity {
    let scaled = quantity * (servings / BASE_SERVINGS);

    let (value, unit) = match (system, unit) {
        (UnitSystem::Imperial, Unit::Gram) => (scaled * GRAMS_TO_OUNCES, "oz".to_owned()),
        (UnitSystem::Imperial, Unit::Milliliter) => {
            (scaled * MILLILITERS_TO_CUPS, Unit::Cup.to_string())
        }
        (_, unit) => (scaled, unit.to_string()),
    };

    DisplayQuantity {
        value: format_one_decimal(value),
        unit,
    }
}

fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;

    // -0.0 prints with a sign
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    format!("{rounded:.1}")
}
