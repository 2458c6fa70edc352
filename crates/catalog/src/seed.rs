use mealplanner_shared::{Ingredient, Meal, MealType};

/// Built-in meals available before anything is loaded or fetched.
pub fn seed_meals() -> Vec<Meal> {
    vec![
        Meal {
            name: "Spaghetti Carbonara".to_owned(),
            meal_type: MealType::Dinner,
            cuisine: "italian".to_owned(),
            ingredients: vec![
                Ingredient::new("Spaghetti", 200.0, "g", "Pasta"),
                Ingredient::new("Bacon", 100.0, "g", "Meat"),
                Ingredient::new("Egg", 2.0, "pcs", "Dairy"),
                Ingredient::new("Parmesan", 50.0, "g", "Dairy"),
            ],
            dietary_tags: vec!["glutenfree".to_owned()],
        },
        Meal {
            name: "Chicken Tikka Masala".to_owned(),
            meal_type: MealType::Dinner,
            cuisine: "indian".to_owned(),
            ingredients: vec![
                Ingredient::new("Chicken Breast", 500.0, "g", "Meat"),
                Ingredient::new("Tomato Sauce", 250.0, "ml", "Canned Goods"),
                Ingredient::new("Yogurt", 125.0, "ml", "Dairy"),
                Ingredient::new("Spices", 2.0, "tbsp", "Spices"),
            ],
            dietary_tags: vec!["glutenfree".to_owned(), "nutfree".to_owned()],
        },
    ]
}
