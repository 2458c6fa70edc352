use std::sync::Mutex;

use async_trait::async_trait;
use mealplanner::{
    Planner, Preferences,
    cli::{FetchArgs, fetch_with},
    planner::{EMPTY_FETCH_WARNING, MALFORMED_FETCH_WARNING},
};
use mealplanner_assistant::{MealQuery, MealSource, extract_meals};
use mealplanner_catalog::Catalog;
use mealplanner_shared::{Error, Ingredient, Meal, MealType, Result, Unit};

/// Replays a canned assistant reply.
struct CannedSource {
    reply: String,
    queries: Mutex<Vec<MealQuery>>,
}

impl CannedSource {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_owned(),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MealSource for CannedSource {
    async fn fetch_meals(&self, query: &MealQuery) -> Result<Vec<Meal>> {
        self.queries.lock().unwrap().push(query.clone());
        extract_meals(&self.reply)
    }
}

/// Hands meals over as is, without going through response extraction.
struct RawSource(Vec<Meal>);

#[async_trait]
impl MealSource for RawSource {
    async fn fetch_meals(&self, _query: &MealQuery) -> Result<Vec<Meal>> {
        Ok(self.0.clone())
    }
}

struct FailingSource;

#[async_trait]
impl MealSource for FailingSource {
    async fn fetch_meals(&self, _query: &MealQuery) -> Result<Vec<Meal>> {
        Err(Error::Server("assistant request failed with status 500".to_owned()))
    }
}

const REPLY: &str = r#"Here you go:
[
  {
    "name": "Veggie Curry",
    "type": "dinner",
    "cuisine": "indian",
    "dietaryTags": ["vegan"],
    "ingredients": [
      { "item": "Chickpeas", "quantity": 400, "unit": "g", "department": "Canned Goods" },
      { "item": "Coconut Milk", "quantity": 200, "unit": "ml", "department": "Canned Goods" }
    ]
  },
  {
    "name": "Chicken Tikka Masala",
    "type": "dinner",
    "cuisine": "indian",
    "ingredients": [
      { "item": "Chicken Breast", "quantity": 400, "unit": "g", "department": "Meat" }
    ]
  }
]"#;

#[tokio::test]
async fn test_fetch_merges_new_meals_and_skips_known_names() {
    let mut planner = Planner::new(Catalog::seed(), Preferences::default());
    let source = CannedSource::new(REPLY);
    let query = MealQuery {
        diets: vec!["vegan".to_owned()],
        types: vec![MealType::Dinner],
        cuisines: vec!["indian".to_owned()],
    };

    let outcome = planner.fetch_more(&source, &query).await;

    assert_eq!(outcome.warning, None);
    assert_eq!(outcome.report.added, vec!["Veggie Curry"]);
    assert_eq!(outcome.report.skipped, vec!["Chicken Tikka Masala"]);
    assert_eq!(planner.catalog().len(), 3);
    assert_eq!(source.queries.lock().unwrap()[0], query);

    let tikka = planner.catalog().find("Chicken Tikka Masala").unwrap();
    assert_eq!(tikka.ingredients[0].quantity, 500.0);

    planner
        .assign("Wednesday", "dinner", "Veggie Curry")
        .unwrap();
    let grocery = planner.grocery_list();
    assert_eq!(
        grocery
            .find("Chickpeas", "Canned Goods", &Unit::Gram)
            .map(|e| e.total),
        Some(400.0)
    );
}

#[tokio::test]
async fn test_malformed_reply_leaves_catalog_untouched() {
    let mut planner = Planner::new(Catalog::seed(), Preferences::default());
    let source = CannedSource::new("Sorry, I only speak prose.");

    let outcome = planner.fetch_more(&source, &MealQuery::default()).await;

    assert_eq!(outcome.warning.as_deref(), Some(MALFORMED_FETCH_WARNING));
    assert!(outcome.report.added.is_empty());
    assert_eq!(planner.catalog().len(), 2);
}

#[tokio::test]
async fn test_empty_reply_warns() {
    let mut planner = Planner::new(Catalog::seed(), Preferences::default());
    let source = CannedSource::new("[]");

    let outcome = planner.fetch_more(&source, &MealQuery::default()).await;

    assert_eq!(outcome.warning.as_deref(), Some(EMPTY_FETCH_WARNING));
    assert_eq!(planner.catalog().len(), 2);
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let mut planner = Planner::new(Catalog::seed(), Preferences::default());

    let outcome = planner.fetch_more(&FailingSource, &MealQuery::default()).await;

    assert!(outcome.warning.unwrap().contains("status 500"));
    assert_eq!(planner.catalog().len(), 2);
}

#[tokio::test]
async fn test_fetch_command_output() {
    let mut planner = Planner::new(Catalog::seed(), Preferences::default());
    let source = CannedSource::new(REPLY);

    let output = fetch_with(&mut planner, &source, &FetchArgs::default())
        .await
        .unwrap();

    assert!(output.contains("Veggie Curry (indian)"));
    assert!(output.contains("- Chickpeas: 400.0 g (Canned Goods)"));
    assert!(output.contains("Skipped, already in catalog: Chicken Tikka Masala"));

    let output = fetch_with(&mut planner, &CannedSource::new("[]"), &FetchArgs::default())
        .await
        .unwrap();
    assert_eq!(output, format!("Warning: {EMPTY_FETCH_WARNING}\n"));
}

#[tokio::test]
async fn test_invalid_meal_from_source_rejects_whole_batch() {
    let mut planner = Planner::new(Catalog::seed(), Preferences::default());
    let valid = Meal {
        name: "Fruit Salad".to_owned(),
        meal_type: MealType::Snack,
        cuisine: "any".to_owned(),
        ingredients: vec![Ingredient::new("Apple", 2.0, "pcs", "Produce")],
        dietary_tags: vec![],
    };
    let invalid = Meal {
        name: "Thin Air".to_owned(),
        ingredients: vec![],
        ..valid.clone()
    };

    let outcome = planner
        .fetch_more(&RawSource(vec![valid, invalid]), &MealQuery::default())
        .await;

    assert_eq!(outcome.warning.as_deref(), Some(MALFORMED_FETCH_WARNING));
    assert!(outcome.report.added.is_empty());
    assert_eq!(planner.catalog().len(), 2);
    assert!(planner.catalog().find("Fruit Salad").is_none());
}

#[tokio::test]
async fn test_fetch_command_with_only_known_meals() {
    let mut planner = Planner::new(Catalog::seed(), Preferences::default());
    let known = Catalog::seed()
        .iter()
        .map(|meal| (**meal).clone())
        .collect::<Vec<_>>();

    let output = fetch_with(&mut planner, &RawSource(known), &FetchArgs::default())
        .await
        .unwrap();

    assert!(output.starts_with("No new meals added."));
    assert!(!output.contains("No meals match"));
    assert!(output.contains(
        "Skipped, already in catalog: Spaghetti Carbonara, Chicken Tikka Masala"
    ));
    assert_eq!(planner.catalog().len(), 2);
}
