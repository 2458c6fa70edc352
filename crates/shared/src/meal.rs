use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<String> for MealType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

/// Measurement unit of an ingredient, identified by its trimmed text.
///
/// Only the exact canonical spellings map onto a named variant; anything else,
/// `grams` or `G` included, is kept verbatim in [`Unit::Other`]. Two units are
/// equal when their text is equal, so `g` and `grams` stay distinct.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Piece,
    Tablespoon,
    Teaspoon,
    Cup,
    Ounce,
    Other(String),
}

impl Unit {
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Piece => "pcs",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::Cup => "cups",
            Unit::Ounce => "oz",
            Unit::Other(unit) => unit,
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Unit {}

impl std::hash::Hash for Unit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for Unit {
    fn from(value: &str) -> Self {
        match value.trim() {
            "g" => Unit::Gram,
            "kg" => Unit::Kilogram,
            "ml" => Unit::Milliliter,
            "l" => Unit::Liter,
            "pcs" => Unit::Piece,
            "tbsp" => Unit::Tablespoon,
            "tsp" => Unit::Teaspoon,
            "cups" => Unit::Cup,
            "oz" => Unit::Ounce,
            other => Unit::Other(other.to_owned()),
        }
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        Unit::from(value.as_str())
    }
}

impl From<Unit> for String {
    fn from(value: Unit) -> Self {
        match value {
            Unit::Other(unit) => unit,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ingredient {
    #[validate(length(min = 1))]
    pub item: String,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
    pub unit: Unit,
    #[validate(length(min = 1))]
    pub department: String,
}

impl Ingredient {
    pub fn new(
        item: impl Into<String>,
        quantity: f64,
        unit: impl Into<Unit>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            quantity,
            unit: unit.into(),
            department: department.into(),
        }
    }
}

/// A plannable meal. Quantities are written for two servings.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub cuisine: String,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
}

impl Meal {
    /// Case-insensitive lookup in the dietary tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();

        self.dietary_tags
            .iter()
            .any(|t| t.trim().to_lowercase() == tag)
    }
}
