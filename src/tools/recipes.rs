//! Recipe MCP Tools
//!
//! Tools for managing recipes and their ingredient lists.

use serde::Serialize;

use crate::planner::{Recipe, RecipeCreate, RecipeUpdate};
use crate::store::Store;

/// Response for create_recipe
#[derive(Debug, Serialize)]
pub struct CreateRecipeResponse {
    pub id: i64,
    pub name: String,
    pub ingredient_count: usize,
    pub created_at: String,
}

/// Recipe summary for listing
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    pub ingredient_count: usize,
    pub times_scheduled: usize,
}

/// Response for list_recipes
#[derive(Debug, Serialize)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    pub total: usize,
}

/// Full recipe detail
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub times_scheduled: usize,
}

/// Response for successful delete
#[derive(Debug, Serialize)]
pub struct RecipeDeleteResponse {
    pub success: bool,
    pub deleted_id: i64,
}

// ============================================================================
// Recipe Tools
// ============================================================================

/// Create a new recipe
pub fn create_recipe(store: &Store, data: RecipeCreate) -> Result<CreateRecipeResponse, String> {
    let recipe = store
        .with_state_mut(|state| Ok(state.planner.recipes.create(data)?))
        .map_err(|e| format!("Failed to create recipe: {}", e))?;

    Ok(CreateRecipeResponse {
        id: recipe.id,
        name: recipe.name,
        ingredient_count: recipe.ingredients.len(),
        created_at: recipe.created_at,
    })
}

/// Get a recipe with full details
pub fn get_recipe(store: &Store, id: i64) -> Result<Option<RecipeDetail>, String> {
    store
        .with_state(|state| {
            let planner = &state.planner;
            Ok(planner.recipes.get_by_id(id).map(|recipe| RecipeDetail {
                recipe: recipe.clone(),
                times_scheduled: planner.meals.count_for_recipe(id),
            }))
        })
        .map_err(|e| format!("Failed to get recipe: {}", e))
}

/// List recipes, optionally filtered by name
pub fn list_recipes(store: &Store, query: Option<&str>) -> Result<ListRecipesResponse, String> {
    store
        .with_state(|state| {
            let planner = &state.planner;
            let recipes: Vec<RecipeSummary> = planner
                .recipes
                .list(query)
                .into_iter()
                .map(|r| RecipeSummary {
                    id: r.id,
                    name: r.name.clone(),
                    ingredient_count: r.ingredients.len(),
                    times_scheduled: planner.meals.count_for_recipe(r.id),
                })
                .collect();
            Ok(ListRecipesResponse {
                total: recipes.len(),
                recipes,
            })
        })
        .map_err(|e| format!("Failed to list recipes: {}", e))
}

/// Update a recipe's name, notes, or ingredient list
pub fn update_recipe(store: &Store, id: i64, data: RecipeUpdate) -> Result<Option<Recipe>, String> {
    store
        .with_state_mut(|state| Ok(state.planner.recipes.update(id, data)?))
        .map_err(|e| format!("Failed to update recipe: {}", e))
}

/// Delete a recipe (only if no meal is scheduled with it)
pub fn delete_recipe(store: &Store, id: i64) -> Result<RecipeDeleteResponse, String> {
    let deleted = store
        .with_state_mut(|state| Ok(state.planner.delete_recipe(id)?))
        .map_err(|e| format!("Failed to delete recipe: {}", e))?;

    if !deleted {
        return Err(format!("Recipe not found: {}", id));
    }

    Ok(RecipeDeleteResponse {
        success: true,
        deleted_id: id,
    })
}
