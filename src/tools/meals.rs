//! Meal plan MCP Tools

use serde::Serialize;

use crate::planner::{parse_date, MealCreate, ScheduledMeal};
use crate::store::Store;

/// Scheduled meal with its recipe name
#[derive(Debug, Serialize)]
pub struct ScheduledMealDetail {
    #[serde(flatten)]
    pub meal: ScheduledMeal,
    pub recipe_name: String,
}

/// Response for list_meals
#[derive(Debug, Serialize)]
pub struct ListMealsResponse {
    pub start: String,
    pub end: String,
    pub meals: Vec<ScheduledMealDetail>,
}

/// Response for unschedule_meal
#[derive(Debug, Serialize)]
pub struct UnscheduleMealResponse {
    pub success: bool,
    pub meal_id: i64,
}

/// Schedule a recipe for a meal on a date
pub fn schedule_meal(store: &Store, data: MealCreate) -> Result<ScheduledMeal, String> {
    store
        .with_state_mut(|state| Ok(state.planner.schedule_meal(data)?))
        .map_err(|e| format!("Failed to schedule meal: {}", e))
}

/// Remove a scheduled meal
pub fn unschedule_meal(store: &Store, id: i64) -> Result<UnscheduleMealResponse, String> {
    store
        .with_state_mut(|state| Ok(state.planner.meals.unschedule(id)?))
        .map_err(|e| format!("Failed to unschedule meal: {}", e))?;

    Ok(UnscheduleMealResponse {
        success: true,
        meal_id: id,
    })
}

/// List meals scheduled between two dates inclusive
pub fn list_meals(store: &Store, start: &str, end: &str) -> Result<ListMealsResponse, String> {
    let start_date = parse_date(start).map_err(|e| e.to_string())?;
    let end_date = parse_date(end).map_err(|e| e.to_string())?;

    let meals = store
        .with_state(|state| {
            let planner = &state.planner;
            let meals: Vec<ScheduledMealDetail> = planner
                .meals
                .list_between(start_date, end_date)?
                .into_iter()
                .map(|meal| ScheduledMealDetail {
                    recipe_name: planner
                        .recipes
                        .get_by_id(meal.recipe_id)
                        .map(|r| r.name.clone())
                        .unwrap_or_default(),
                    meal: meal.clone(),
                })
                .collect();
            Ok(meals)
        })
        .map_err(|e| format!("Failed to list meals: {}", e))?;

    Ok(ListMealsResponse {
        start: start_date.to_string(),
        end: end_date.to_string(),
        meals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{MealType, RecipeCreate};

    fn store_with_recipe() -> Store {
        let store = Store::default();
        store
            .with_state_mut(|state| {
                state.planner.recipes.create(RecipeCreate {
                    name: "Tacos".to_string(),
                    ingredients: vec![],
                    notes: None,
                })?;
                Ok(())
            })
            .unwrap();
        store
    }

    #[test]
    fn test_schedule_and_list() {
        let store = store_with_recipe();
        let meal = schedule_meal(&store, MealCreate {
            date: "2025-07-04".to_string(),
            meal_type: MealType::Dinner,
            recipe_id: 1,
            notes: None,
        })
        .unwrap();
        assert_eq!(meal.id, 1);

        let listed = list_meals(&store, "2025-07-01", "2025-07-07").unwrap();
        assert_eq!(listed.meals.len(), 1);
        assert_eq!(listed.meals[0].recipe_name, "Tacos");

        assert!(unschedule_meal(&store, 1).unwrap().success);
        assert!(unschedule_meal(&store, 1).is_err());
    }

    #[test]
    fn test_list_meals_bad_dates() {
        let store = Store::default();
        assert_eq!(
            list_meals(&store, "07/01/2025", "2025-07-07").unwrap_err(),
            "Invalid date '07/01/2025', expected YYYY-MM-DD"
        );
        assert_eq!(
            list_meals(&store, "2025-07-07", "2025-07-01").unwrap_err(),
            "Failed to list meals: Invalid date range: 2025-07-07 is after 2025-07-01"
        );
    }
}
