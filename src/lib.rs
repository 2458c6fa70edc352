pub mod cli;
pub mod config;
pub mod observability;
pub mod planner;
pub mod render;

pub use planner::{FetchOutcome, Planner, PlannerView, Preferences};
