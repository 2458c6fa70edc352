use std::{collections::HashSet, path::Path, sync::Arc};

use mealplanner_shared::{Error, Meal, Result};
use validator::Validate;

use crate::{MealFilter, filter_meals, seed_meals};

/// In-memory list of known meals, unique by name.
///
/// Meals are shared behind [`Arc`] so the week plan references catalog
/// entries instead of copying them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    meals: Vec<Arc<Meal>>,
}

/// Outcome of [`Catalog::merge`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
}

impl Catalog {
    /// Validates every meal and rejects duplicate names.
    pub fn new(meals: Vec<Meal>) -> Result<Self> {
        let mut names = HashSet::new();
        let mut catalog = Vec::with_capacity(meals.len());

        for meal in meals {
            meal.validate()?;

            if !names.insert(meal.name.clone()) {
                return Err(Error::DuplicateMeal(meal.name));
            }

            catalog.push(Arc::new(meal));
        }

        Ok(Self { meals: catalog })
    }

    pub fn seed() -> Self {
        Self {
            meals: seed_meals().into_iter().map(Arc::new).collect(),
        }
    }

    /// Parses a JSON array of meals.
    pub fn from_json(text: &str) -> Result<Self> {
        let meals: Vec<Meal> = serde_json::from_str(text)?;

        Self::new(meals)
    }

    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&text)?;

        tracing::info!(meals = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    pub fn meals(&self) -> &[Arc<Meal>] {
        &self.meals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Meal>> {
        self.meals.iter()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Meal>> {
        self.meals.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&Arc<Meal>> {
        self.meals.iter().find(|meal| meal.name == name)
    }

    pub fn filter(&self, filter: &MealFilter) -> Vec<Arc<Meal>> {
        filter_meals(&self.meals, filter)
    }

    /// Appends meals after the existing ones. A name already present, in the
    /// catalog or earlier in `meals`, is skipped.
    ///
    /// Every meal is validated first; one invalid meal rejects the batch and
    /// leaves the catalog as it was.
    pub fn merge(&mut self, meals: Vec<Meal>) -> Result<MergeReport> {
        for meal in &meals {
            meal.validate()?;
        }

        let mut names = self
            .meals
            .iter()
            .map(|meal| meal.name.clone())
            .collect::<HashSet<_>>();
        let mut report = MergeReport::default();

        for meal in meals {
            if names.insert(meal.name.clone()) {
                report.added.push(meal.name.clone());
                self.meals.push(Arc::new(meal));
            } else {
                tracing::debug!(name = %meal.name, "skipping duplicate meal");
                report.skipped.push(meal.name);
            }
        }

        Ok(report)
    }
}
