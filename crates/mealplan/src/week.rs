use std::sync::Arc;

use mealplanner_shared::{Day, Error, Meal, MealType, Result};
use strum::VariantArray;

/// One assignment yielded by [`WeekPlan::enumerate`].
#[derive(Debug, Clone, Copy)]
pub struct PlannedMeal<'a> {
    pub day: Day,
    pub slot: MealType,
    pub meal: &'a Arc<Meal>,
}

/// Day × slot grid of meal assignments.
///
/// Every one of the 28 cells always exists; a cell holds meals in insertion
/// order and may contain the same meal several times.
#[derive(Debug, Clone, Default)]
pub struct WeekPlan {
    cells: [[Vec<Arc<Meal>>; 4]; 7],
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `meal` to the cell named by `day` and `slot`.
    ///
    /// Both keys are checked before anything is touched, so a rejected
    /// assignment leaves the plan as it was.
    pub fn assign(&mut self, day: &str, slot: &str, meal: Arc<Meal>) -> Result<()> {
        let (Ok(parsed_day), Ok(parsed_slot)) = (day.parse::<Day>(), slot.parse::<MealType>())
        else {
            return Err(Error::invalid_slot(day, slot));
        };

        self.push(parsed_day, parsed_slot, meal);

        Ok(())
    }

    pub fn push(&mut self, day: Day, slot: MealType, meal: Arc<Meal>) {
        tracing::debug!(%day, %slot, meal = %meal.name, "meal assigned");

        self.cells[day.index()][slot.index()].push(meal);
    }

    /// Removes the meal at `index` in a cell.
    pub fn remove(&mut self, day: Day, slot: MealType, index: usize) -> Result<Arc<Meal>> {
        let cell = &mut self.cells[day.index()][slot.index()];

        if index >= cell.len() {
            return Err(Error::invalid_slot(day.to_string(), format!("{slot}#{index}")));
        }

        Ok(cell.remove(index))
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().flatten().for_each(Vec::clear);
    }

    pub fn meals(&self, day: Day, slot: MealType) -> &[Arc<Meal>] {
        &self.cells[day.index()][slot.index()]
    }

    pub fn len(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Vec::is_empty)
    }

    /// Day-then-slot-then-insertion order.
    pub fn enumerate(&self) -> impl Iterator<Item = PlannedMeal<'_>> {
        Day::VARIANTS.iter().zip(&self.cells).flat_map(|(&day, slots)| {
            MealType::VARIANTS
                .iter()
                .zip(slots)
                .flat_map(move |(&slot, meals)| {
                    meals.iter().map(move |meal| PlannedMeal { day, slot, meal })
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplanner_shared::Ingredient;

    fn meal(name: &str) -> Arc<Meal> {
        Arc::new(Meal {
            name: name.to_owned(),
            meal_type: MealType::Dinner,
            cuisine: "french".to_owned(),
            ingredients: vec![Ingredient::new("Butter", 20.0, "g", "Dairy")],
            dietary_tags: vec![],
        })
    }

    #[test]
    fn test_new_plan_is_empty_with_every_cell() {
        let plan = WeekPlan::new();

        assert!(plan.is_empty());
        for day in Day::VARIANTS {
            for slot in MealType::VARIANTS {
                assert!(plan.meals(*day, *slot).is_empty());
            }
        }
    }

    #[test]
    fn test_assign_keeps_duplicates_in_order() {
        let mut plan = WeekPlan::new();
        let soup = meal("Soup");

        plan.assign("Tuesday", "lunch", soup.clone()).unwrap();
        plan.assign("Tuesday", "lunch", meal("Quiche")).unwrap();
        plan.assign("Tuesday", "lunch", soup.clone()).unwrap();

        let names = plan
            .meals(Day::Tuesday, MealType::Lunch)
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Soup", "Quiche", "Soup"]);
        assert!(Arc::ptr_eq(&plan.meals(Day::Tuesday, MealType::Lunch)[0], &soup));
    }

    #[test]
    fn test_invalid_keys_leave_plan_unchanged() {
        let mut plan = WeekPlan::new();
        plan.assign("Monday", "dinner", meal("Stew")).unwrap();

        let err = plan.assign("Funday", "dinner", meal("Stew")).unwrap_err();
        assert!(matches!(err, Error::InvalidSlot { ref day, .. } if day == "Funday"));

        let err = plan.assign("Monday", "brunch", meal("Stew")).unwrap_err();
        assert!(matches!(err, Error::InvalidSlot { ref slot, .. } if slot == "brunch"));

        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_enumerate_order() {
        let mut plan = WeekPlan::new();
        plan.push(Day::Sunday, MealType::Breakfast, meal("Waffles"));
        plan.push(Day::Monday, MealType::Snack, meal("Apple"));
        plan.push(Day::Monday, MealType::Breakfast, meal("Toast"));
        plan.push(Day::Monday, MealType::Snack, meal("Nuts"));

        let order = plan
            .enumerate()
            .map(|p| (p.day, p.slot, p.meal.name.as_str()))
            .collect::<Vec<_>>();

        assert_eq!(
            order,
            vec![
                (Day::Monday, MealType::Breakfast, "Toast"),
                (Day::Monday, MealType::Snack, "Apple"),
                (Day::Monday, MealType::Snack, "Nuts"),
                (Day::Sunday, MealType::Breakfast, "Waffles"),
            ]
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let mut plan = WeekPlan::new();
        plan.push(Day::Friday, MealType::Dinner, meal("Pizza"));
        plan.push(Day::Friday, MealType::Dinner, meal("Salad"));

        let removed = plan.remove(Day::Friday, MealType::Dinner, 0).unwrap();
        assert_eq!(removed.name, "Pizza");
        assert_eq!(plan.meals(Day::Friday, MealType::Dinner).len(), 1);

        assert!(plan.remove(Day::Friday, MealType::Dinner, 5).is_err());

        plan.clear();
        assert!(plan.is_empty());
        assert_eq!(plan.enumerate().count(), 0);
    }
}
