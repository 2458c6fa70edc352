pub mod aggregation;
pub mod conversion;
pub mod grocery;

pub use aggregation::{IngredientAggregationService, aggregate};
pub use conversion::{DisplayQuantity, convert};
pub use grocery::{DepartmentGroup, DisplayGroceryEntry, GroceryEntry, GroceryList};
