//! Grocery list MCP Tools
//!
//! Generates the current grocery list from recipes or scheduled meals and
//! tracks which items have been checked off.

use serde::Serialize;

use crate::grocery::{grocery_list_for_range, grocery_list_for_recipes, GroceryList};
use crate::planner::parse_date;
use crate::store::Store;

/// What the grocery list was generated from
#[derive(Debug, Clone)]
pub enum GrocerySource {
    Recipes(Vec<i64>),
    DateRange { start: String, end: String },
}

/// Response for grocery list tools
#[derive(Debug, Serialize)]
pub struct GroceryListResponse {
    #[serde(flatten)]
    pub list: GroceryList,
    pub item_count: usize,
    pub remaining: usize,
    /// Items shown without a quantity because their units could not be reconciled
    pub unresolved: Vec<String>,
}

impl From<GroceryList> for GroceryListResponse {
    fn from(list: GroceryList) -> Self {
        Self {
            item_count: list.items.len(),
            remaining: list.remaining(),
            unresolved: list.unresolved().map(|i| i.ingredient.item.clone()).collect(),
            list,
        }
    }
}

/// Response for check_grocery_item
#[derive(Debug, Serialize)]
pub struct CheckItemResponse {
    pub item: String,
    pub checked: bool,
    pub remaining: usize,
}

/// Generate a grocery list and make it the current one
pub fn generate_grocery_list(store: &Store, source: GrocerySource) -> Result<GroceryListResponse, String> {
    let list = store
        .with_state_mut(|state| {
            let planner = &state.planner;
            let list = match &source {
                GrocerySource::Recipes(ids) => grocery_list_for_recipes(&planner.recipes, ids)?,
                GrocerySource::DateRange { start, end } => grocery_list_for_range(
                    &planner.recipes,
                    &planner.meals,
                    parse_date(start)?,
                    parse_date(end)?,
                )?,
            };
            state.grocery_list = Some(list.clone());
            Ok(list)
        })
        .map_err(|e| format!("Failed to generate grocery list: {}", e))?;

    tracing::info!(items = list.items.len(), "Generated grocery list");
    Ok(list.into())
}

/// Get the current grocery list
pub fn get_grocery_list(store: &Store) -> Result<Option<GroceryListResponse>, String> {
    store
        .with_state(|state| Ok(state.grocery_list.clone().map(GroceryListResponse::from)))
        .map_err(|e| format!("Failed to get grocery list: {}", e))
}

/// Check or uncheck an item on the current grocery list
pub fn check_grocery_item(store: &Store, item: &str, checked: bool) -> Result<CheckItemResponse, String> {
    let outcome = store
        .with_state_mut(|state| {
            Ok(state.grocery_list.as_mut().map(|list| {
                let found = list.set_checked(item, checked);
                (found, list.remaining())
            }))
        })
        .map_err(|e| format!("Failed to update grocery list: {}", e))?;

    match outcome {
        None => Err("No grocery list has been generated yet".to_string()),
        Some((false, _)) => Err(format!("Item not on grocery list: {}", item)),
        Some((true, remaining)) => Ok(CheckItemResponse {
            item: item.to_string(),
            checked,
            remaining,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{Planner, PlannerSeed};

    fn store() -> Store {
        let seed: PlannerSeed = serde_json::from_str(
            r#"{
                "recipes": [
                    {"name": "Curry", "ingredients": [
                        {"item": "coconut milk", "quantity": "400", "unit": "milliliter"},
                        {"item": "rice", "quantity": "1", "unit": "cup"}
                    ]},
                    {"name": "Rice Pudding", "ingredients": [
                        {"item": "rice", "quantity": "0.5", "unit": "cup"},
                        {"item": "coconut milk", "quantity": "1", "unit": "cup"}
                    ]}
                ],
                "meals": [
                    {"date": "2025-08-01", "meal_type": "dinner", "recipe_id": 1},
                    {"date": "2025-08-02", "meal_type": "snack", "recipe_id": 2}
                ]
            }"#,
        )
        .unwrap();
        Store::new(Planner::from_seed(seed).unwrap())
    }

    #[test]
    fn test_generate_from_date_range() {
        let store = store();
        let response = generate_grocery_list(&store, GrocerySource::DateRange {
            start: "2025-08-01".to_string(),
            end: "2025-08-31".to_string(),
        })
        .unwrap();
        assert_eq!(response.item_count, 2);
        assert_eq!(response.list.items[0].ingredient.quantity, "636.59");
        assert_eq!(response.list.items[1].ingredient.quantity, "1.5");
        assert!(response.unresolved.is_empty());
        assert!(get_grocery_list(&store).unwrap().is_some());
    }

    #[test]
    fn test_generate_from_recipes() {
        let store = store();
        let response = generate_grocery_list(&store, GrocerySource::Recipes(vec![2])).unwrap();
        assert_eq!(response.list.items[0].ingredient.item, "rice");

        let err = generate_grocery_list(&store, GrocerySource::Recipes(vec![9])).unwrap_err();
        assert_eq!(err, "Failed to generate grocery list: Recipe not found: 9");
    }

    #[test]
    fn test_check_item() {
        let store = store();
        assert!(check_grocery_item(&store, "rice", true).is_err());

        generate_grocery_list(&store, GrocerySource::Recipes(vec![1, 2])).unwrap();
        let response = check_grocery_item(&store, "rice", true).unwrap();
        assert_eq!(response.remaining, 1);
        assert_eq!(
            check_grocery_item(&store, "saffron", true).unwrap_err(),
            "Item not on grocery list: saffron"
        );

        let current = get_grocery_list(&store).unwrap().unwrap();
        assert_eq!(current.remaining, 1);
    }
}
