//! Grocery list generation
//!
//! Ingredient records, their aggregation, and grocery lists built on top.

pub mod aggregator;
pub mod ingredient;
pub mod list;

pub use aggregator::{combine, format_quantity, round2};
pub use ingredient::{Ingredient, IngredientCreate};
pub use list::{grocery_list_for_range, grocery_list_for_recipes, GroceryItem, GroceryList};
