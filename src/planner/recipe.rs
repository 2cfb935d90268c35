//! Recipe model
//!
//! Recipes as named lists of ingredient records, kept in memory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{PlannerError, PlannerResult};
use crate::grocery::{Ingredient, IngredientCreate};

/// A recipe and its ingredient lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating a new recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCreate {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientCreate>,
    pub notes: Option<String>,
}

/// Data for updating a recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    /// Replaces the whole ingredient list when set
    pub ingredients: Option<Vec<IngredientCreate>>,
    pub notes: Option<String>,
}

fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn validate_name(name: &str) -> PlannerResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// In-memory collection of recipes keyed by ID
#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: BTreeMap<i64, Recipe>,
    next_id: i64,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipe
    pub fn create(&mut self, data: RecipeCreate) -> PlannerResult<Recipe> {
        let name = validate_name(&data.name)?;

        self.next_id += 1;
        let timestamp = now();
        let recipe = Recipe {
            id: self.next_id,
            name,
            ingredients: data.ingredients.into_iter().map(Ingredient::from).collect(),
            notes: data.notes,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        };

        tracing::info!(recipe_id = recipe.id, name = %recipe.name, "Created recipe");
        self.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    /// Get a recipe by ID
    pub fn get_by_id(&self, id: i64) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    /// List recipes sorted by name, optionally filtered by a name substring
    pub fn list(&self, query: Option<&str>) -> Vec<&Recipe> {
        let needle = query.map(|q| q.trim().to_lowercase());
        let mut recipes: Vec<&Recipe> = self
            .recipes
            .values()
            .filter(|r| match &needle {
                Some(n) => r.name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .collect();
        recipes.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()).then(a.id.cmp(&b.id)));
        recipes
    }

    /// Update a recipe, returning None if it does not exist
    pub fn update(&mut self, id: i64, data: RecipeUpdate) -> PlannerResult<Option<Recipe>> {
        let name = data.name.as_deref().map(validate_name).transpose()?;

        let Some(recipe) = self.recipes.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = name {
            recipe.name = name;
        }
        if let Some(ingredients) = data.ingredients {
            recipe.ingredients = ingredients.into_iter().map(Ingredient::from).collect();
        }
        if let Some(notes) = data.notes {
            recipe.notes = Some(notes);
        }
        recipe.updated_at = now();

        Ok(Some(recipe.clone()))
    }

    /// Remove a recipe, returning it if it existed
    ///
    /// Callers are responsible for checking scheduled meals first.
    pub(crate) fn remove(&mut self, id: i64) -> Option<Recipe> {
        let removed = self.recipes.remove(&id);
        if removed.is_some() {
            tracing::info!(recipe_id = id, "Deleted recipe");
        }
        removed
    }

    /// Flatten the ingredients of the given recipes, in the order given
    pub fn ingredients_for(&self, recipe_ids: &[i64]) -> PlannerResult<Vec<Ingredient>> {
        let mut ingredients = Vec::new();
        for &id in recipe_ids {
            let recipe = self.get_by_id(id).ok_or(PlannerError::RecipeNotFound(id))?;
            ingredients.extend(recipe.ingredients.iter().cloned());
        }
        Ok(ingredients)
    }

    pub fn count(&self) -> usize {
        self.recipes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item: &str, quantity: &str, unit: &str) -> IngredientCreate {
        IngredientCreate {
            item: item.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            category: String::new(),
            notes: String::new(),
        }
    }

    fn pancakes() -> RecipeCreate {
        RecipeCreate {
            name: "  Pancakes ".to_string(),
            ingredients: vec![line("flour", "2", "cup"), line("milk", "1.5", "cup")],
            notes: None,
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut book = RecipeBook::new();
        let recipe = book.create(pancakes()).unwrap();
        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.ingredients.len(), 2);
        assert!(recipe.ingredients.iter().all(|i| !i.error));
        assert_eq!(book.get_by_id(1).unwrap().name, "Pancakes");
        assert!(book.get_by_id(2).is_none());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let mut book = RecipeBook::new();
        let data = RecipeCreate { name: "   ".to_string(), ingredients: vec![], notes: None };
        assert_eq!(book.create(data).unwrap_err(), PlannerError::EmptyName);
        assert_eq!(book.count(), 0);
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let mut book = RecipeBook::new();
        for name in ["waffles", "Banana Bread", "pancakes"] {
            book.create(RecipeCreate { name: name.to_string(), ingredients: vec![], notes: None })
                .unwrap();
        }
        let names: Vec<&str> = book.list(None).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Banana Bread", "pancakes", "waffles"]);

        let names: Vec<&str> = book.list(Some("CAKE")).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["pancakes"]);
    }

    #[test]
    fn test_update() {
        let mut book = RecipeBook::new();
        book.create(pancakes()).unwrap();

        let updated = book
            .update(1, RecipeUpdate {
                ingredients: Some(vec![line("flour", "3", "cup")]),
                ..Default::default()
            })
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Pancakes");
        assert_eq!(updated.ingredients.len(), 1);

        assert!(book.update(99, RecipeUpdate::default()).unwrap().is_none());
        assert_eq!(
            book.update(1, RecipeUpdate { name: Some("".to_string()), ..Default::default() })
                .unwrap_err(),
            PlannerError::EmptyName
        );
    }

    #[test]
    fn test_ingredients_for_keeps_order() {
        let mut book = RecipeBook::new();
        book.create(pancakes()).unwrap();
        book.create(RecipeCreate {
            name: "Omelette".to_string(),
            ingredients: vec![line("eggs", "3", ""), line("milk", "2", "tablespoon")],
            notes: None,
        })
        .unwrap();

        let items: Vec<String> = book
            .ingredients_for(&[2, 1])
            .unwrap()
            .into_iter()
            .map(|i| i.item)
            .collect();
        assert_eq!(items, vec!["eggs", "milk", "flour", "milk"]);

        assert_eq!(book.ingredients_for(&[1, 7]).unwrap_err(), PlannerError::RecipeNotFound(7));
    }
}
