//! Grocery list
//!
//! Combined ingredient records with a checked-off flag per item.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregator::combine;
use super::ingredient::Ingredient;
use crate::planner::{MealPlan, PlannerResult, RecipeBook};

/// One line of a grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    #[serde(default)]
    pub checked: bool,
}

/// A generated grocery list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroceryList {
    pub items: Vec<GroceryItem>,
    pub generated_at: String,
}

impl GroceryList {
    /// Combine raw ingredient records into an unchecked grocery list
    pub fn from_ingredients(records: &[Ingredient]) -> Self {
        let items: Vec<GroceryItem> = combine(records)
            .into_iter()
            .map(|ingredient| GroceryItem { ingredient, checked: false })
            .collect();

        tracing::debug!(
            records = records.len(),
            items = items.len(),
            "Generated grocery list"
        );

        Self {
            items,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Mark an item checked or unchecked by exact name
    ///
    /// Returns false if no item has that name.
    pub fn set_checked(&mut self, item: &str, checked: bool) -> bool {
        match self.items.iter_mut().find(|i| i.ingredient.item == item) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Items whose quantity could not be determined
    pub fn unresolved(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.iter().filter(|i| i.ingredient.is_unknown())
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|i| !i.checked).count()
    }
}

/// Grocery list for a set of recipes, in the order given
pub fn grocery_list_for_recipes(book: &RecipeBook, recipe_ids: &[i64]) -> PlannerResult<GroceryList> {
    let records = book.ingredients_for(recipe_ids)?;
    Ok(GroceryList::from_ingredients(&records))
}

/// Grocery list for every meal scheduled between two dates inclusive
pub fn grocery_list_for_range(
    book: &RecipeBook,
    plan: &MealPlan,
    start: NaiveDate,
    end: NaiveDate,
) -> PlannerResult<GroceryList> {
    let records = plan.ingredients_between(book, start, end)?;
    Ok(GroceryList::from_ingredients(&records))
}
