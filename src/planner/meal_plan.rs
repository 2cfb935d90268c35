//! Meal plan model
//!
//! Recipes scheduled on calendar dates. The plan only records what is
//! scheduled; it feeds ingredient records to grocery list generation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{parse_date, PlannerError, PlannerResult};
use super::recipe::RecipeBook;
use crate::grocery::Ingredient;

/// Meal type enum
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[default]
    Unspecified,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Unspecified => "unspecified",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" => MealType::Snack,
            _ => MealType::Unspecified,
        }
    }
}

/// A recipe scheduled for a meal on a date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledMeal {
    pub id: i64,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub recipe_id: i64,
    pub notes: Option<String>,
}

/// Data for scheduling a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCreate {
    /// ISO date: "2025-01-09"
    pub date: String,
    #[serde(default)]
    pub meal_type: MealType,
    pub recipe_id: i64,
    pub notes: Option<String>,
}

/// In-memory meal schedule
#[derive(Debug, Default)]
pub struct MealPlan {
    meals: BTreeMap<i64, ScheduledMeal>,
    next_id: i64,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a recipe; the recipe must exist in the book
    pub fn schedule(&mut self, book: &RecipeBook, data: MealCreate) -> PlannerResult<ScheduledMeal> {
        let date = parse_date(&data.date)?;
        if book.get_by_id(data.recipe_id).is_none() {
            return Err(PlannerError::RecipeNotFound(data.recipe_id));
        }

        self.next_id += 1;
        let meal = ScheduledMeal {
            id: self.next_id,
            date,
            meal_type: data.meal_type,
            recipe_id: data.recipe_id,
            notes: data.notes,
        };

        tracing::info!(
            meal_id = meal.id,
            recipe_id = meal.recipe_id,
            date = %meal.date,
            meal_type = meal.meal_type.as_str(),
            "Scheduled meal"
        );
        self.meals.insert(meal.id, meal.clone());
        Ok(meal)
    }

    /// Remove a scheduled meal
    pub fn unschedule(&mut self, id: i64) -> PlannerResult<ScheduledMeal> {
        let meal = self.meals.remove(&id).ok_or(PlannerError::MealNotFound(id))?;
        tracing::info!(meal_id = id, "Unscheduled meal");
        Ok(meal)
    }

    pub fn get_by_id(&self, id: i64) -> Option<&ScheduledMeal> {
        self.meals.get(&id)
    }

    /// Meals between two dates inclusive, ordered by date, meal type, then ID
    pub fn list_between(&self, start: NaiveDate, end: NaiveDate) -> PlannerResult<Vec<&ScheduledMeal>> {
        if start > end {
            return Err(PlannerError::InvalidDateRange { start, end });
        }

        let mut meals: Vec<&ScheduledMeal> = self
            .meals
            .values()
            .filter(|m| m.date >= start && m.date <= end)
            .collect();
        meals.sort_by_key(|m| (m.date, m.meal_type, m.id));
        Ok(meals)
    }

    /// Ingredient records of every meal in the range, in schedule order
    pub fn ingredients_between(
        &self,
        book: &RecipeBook,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PlannerResult<Vec<Ingredient>> {
        let recipe_ids: Vec<i64> = self
            .list_between(start, end)?
            .into_iter()
            .map(|m| m.recipe_id)
            .collect();
        book.ingredients_for(&recipe_ids)
    }

    /// Number of meals referencing a recipe
    pub fn count_for_recipe(&self, recipe_id: i64) -> usize {
        self.meals.values().filter(|m| m.recipe_id == recipe_id).count()
    }

    pub fn count(&self) -> usize {
        self.meals.len()
    }
}
