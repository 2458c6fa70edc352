use mealplanner_shared::{Unit, UnitSystem};
use serde::Serialize;

use crate::{DisplayQuantity, convert};

/// Summed quantity of one `(item, department, unit)` across the week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryEntry {
    pub item: String,
    pub department: String,
    pub unit: Unit,
    pub total: f64,
}

/// Grocery entry converted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayGroceryEntry {
    pub item: String,
    pub department: String,
    pub quantity: DisplayQuantity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentGroup {
    pub department: String,
    pub entries: Vec<GroceryEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroceryList {
    entries: Vec<GroceryEntry>,
}

impl GroceryList {
    pub fn new(entries: Vec<GroceryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[GroceryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroceryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, item: &str, department: &str, unit: &Unit) -> Option<&GroceryEntry> {
        self.entries
            .iter()
            .find(|e| e.item == item && e.department == department && &e.unit == unit)
    }

    /// Entries grouped by department. Departments and the entries inside
    /// them keep first-seen order.
    pub fn by_department(&self) -> Vec<DepartmentGroup> {
        let mut groups: Vec<DepartmentGroup> = Vec::new();

        for entry in &self.entries {
            match groups.iter_mut().find(|g| g.department == entry.department) {
                Some(group) => group.entries.push(entry.clone()),
                None => groups.push(DepartmentGroup {
                    department: entry.department.clone(),
                    entries: vec![entry.clone()],
                }),
            }
        }

        groups
    }

    /// Totals scaled to `servings` and converted to `system`, entry by entry.
    pub fn display(&self, servings: f64, system: UnitSystem) -> Vec<DisplayGroceryEntry> {
        self.entries
            .iter()
            .map(|entry| DisplayGroceryEntry {
                item: entry.item.clone(),
                department: entry.department.clone(),
                quantity: convert(entry.total, &entry.unit, servings, system),
            })
            .collect()
    }
}
