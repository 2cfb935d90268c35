//! Grocer Tools module
//!
//! MCP tool implementations for recipes, meal plans, and grocery lists.

pub mod conversions;
pub mod grocery_lists;
pub mod meals;
pub mod recipes;
pub mod status;
