//! Recipe and meal planning
//!
//! In-memory recipe book and meal schedule that supply ingredient records to
//! grocery list generation.

mod error;
mod meal_plan;
mod recipe;

pub use error::{parse_date, PlannerError, PlannerResult};
pub use meal_plan::{MealCreate, MealPlan, MealType, ScheduledMeal};
pub use recipe::{Recipe, RecipeBook, RecipeCreate, RecipeUpdate};

use serde::{Deserialize, Serialize};

/// Recipes and meals loaded together, e.g. from a seed file
///
/// Meal `recipe_id`s refer to the 1-based position of the recipe in
/// `recipes`, which matches the IDs a fresh planner assigns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerSeed {
    #[serde(default)]
    pub recipes: Vec<RecipeCreate>,
    #[serde(default)]
    pub meals: Vec<MealCreate>,
}

/// Recipe book and meal plan kept consistent with each other
#[derive(Debug, Default)]
pub struct Planner {
    pub recipes: RecipeBook,
    pub meals: MealPlan,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a planner from seed data
    pub fn from_seed(seed: PlannerSeed) -> PlannerResult<Self> {
        let mut planner = Self::new();
        for recipe in seed.recipes {
            planner.recipes.create(recipe)?;
        }
        for meal in seed.meals {
            planner.schedule_meal(meal)?;
        }
        Ok(planner)
    }

    pub fn schedule_meal(&mut self, data: MealCreate) -> PlannerResult<ScheduledMeal> {
        self.meals.schedule(&self.recipes, data)
    }

    /// Delete a recipe unless a scheduled meal still uses it
    ///
    /// Returns Ok(false) if the recipe does not exist.
    pub fn delete_recipe(&mut self, id: i64) -> PlannerResult<bool> {
        if self.recipes.get_by_id(id).is_none() {
            return Ok(false);
        }

        let meal_count = self.meals.count_for_recipe(id);
        if meal_count > 0 {
            return Err(PlannerError::RecipeScheduled { recipe_id: id, meal_count });
        }

        Ok(self.recipes.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> PlannerSeed {
        serde_json::from_str(
            r#"{
                "recipes": [
                    {"name": "Chili", "ingredients": [
                        {"item": "beans", "quantity": "400", "unit": "gram", "category": "Canned"}
                    ]},
                    {"name": "Rice", "ingredients": [{"item": "rice", "quantity": "1", "unit": "cup"}]}
                ],
                "meals": [
                    {"date": "2025-05-01", "meal_type": "dinner", "recipe_id": 1},
                    {"date": "2025-05-02", "recipe_id": 2}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_from_seed() {
        let planner = Planner::from_seed(seed()).unwrap();
        assert_eq!(planner.recipes.count(), 2);
        assert_eq!(planner.meals.count(), 2);
        assert_eq!(planner.meals.get_by_id(2).unwrap().meal_type, MealType::Unspecified);
    }

    #[test]
    fn test_from_seed_rejects_dangling_meal() {
        let mut bad = seed();
        bad.meals[0].recipe_id = 5;
        assert_eq!(Planner::from_seed(bad).unwrap_err(), PlannerError::RecipeNotFound(5));
    }

    #[test]
    fn test_delete_recipe_blocked_while_scheduled() {
        let mut planner = Planner::from_seed(seed()).unwrap();
        assert_eq!(
            planner.delete_recipe(1).unwrap_err(),
            PlannerError::RecipeScheduled { recipe_id: 1, meal_count: 1 }
        );

        planner.meals.unschedule(1).unwrap();
        assert!(planner.delete_recipe(1).unwrap());
        assert!(!planner.delete_recipe(1).unwrap());
    }
}
