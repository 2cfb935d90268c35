//! Grocer MCP Server Implementation
//!
//! Implements the MCP server with all grocer tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::grocery::{Ingredient, IngredientCreate};
use crate::planner::{MealCreate, MealType, RecipeCreate, RecipeUpdate};
use crate::store::Store;
use crate::tools::conversions;
use crate::tools::grocery_lists::{self, GrocerySource};
use crate::tools::meals;
use crate::tools::recipes;
use crate::tools::status::StatusTracker;

/// Grocer MCP Service
#[derive(Clone)]
pub struct GrocerService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    store: Store,
    tool_router: ToolRouter<GrocerService>,
}

impl GrocerService {
    pub fn new(seed_path: PathBuf, store: Store) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(seed_path))),
            store,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Ingredient Parameter Structs
// ============================================================================

/// One ingredient line
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParam {
    /// Item name; lines with the same name are merged (case-sensitive)
    pub item: String,
    /// Decimal quantity as text, e.g. "1.5". Empty when unknown ("to taste")
    #[serde(default)]
    pub quantity: String,
    /// Unit name from list_units, e.g. "cup". Empty for counts or unknown quantities
    #[serde(default)]
    pub unit: String,
    /// Grocery category, e.g. "Produce"
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

impl From<IngredientParam> for IngredientCreate {
    fn from(p: IngredientParam) -> Self {
        Self {
            item: p.item,
            quantity: p.quantity,
            unit: p.unit,
            category: p.category,
            notes: p.notes,
        }
    }
}

fn ingredient_lines(params: Vec<IngredientParam>) -> Vec<IngredientCreate> {
    params.into_iter().map(IngredientCreate::from).collect()
}

// ============================================================================
// Conversion Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    /// Quantity as decimal text, e.g. "2.5"
    pub quantity: String,
    /// Unit to convert from, e.g. "cup"
    pub from_unit: String,
    /// Unit to convert to, e.g. "milliliter"
    pub to_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CombineIngredientsParams {
    /// Ingredient lines to merge, in order
    pub ingredients: Vec<IngredientParam>,
}

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateRecipeParams {
    /// Name of the recipe
    pub name: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<IngredientParam>,
    /// Optional notes
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetRecipeParams {
    /// Recipe ID
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListRecipesParams {
    /// Search query for recipe name (optional)
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateRecipeParams {
    /// Recipe ID to update
    pub id: i64,
    /// New name (optional)
    pub name: Option<String>,
    /// Replacement ingredient list (optional)
    pub ingredients: Option<Vec<IngredientParam>>,
    /// New notes (optional)
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteRecipeParams {
    /// Recipe ID to delete
    pub id: i64,
}

// ============================================================================
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScheduleMealParams {
    /// Date in YYYY-MM-DD format
    pub date: String,
    /// Meal type: breakfast, lunch, dinner, snack (default unspecified)
    pub meal_type: Option<String>,
    /// Recipe to cook
    pub recipe_id: i64,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UnscheduleMealParams {
    /// Scheduled meal ID
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListMealsParams {
    /// First date (YYYY-MM-DD), inclusive
    pub start: String,
    /// Last date (YYYY-MM-DD), inclusive
    pub end: String,
}

// ============================================================================
// Grocery List Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateGroceryListParams {
    /// Recipes to shop for. Takes precedence over start/end
    pub recipe_ids: Option<Vec<i64>>,
    /// First date (YYYY-MM-DD) of scheduled meals to shop for
    pub start: Option<String>,
    /// Last date (YYYY-MM-DD) of scheduled meals to shop for
    pub end: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckGroceryItemParams {
    /// Exact item name on the grocery list
    pub item: String,
    /// true to check off, false to uncheck (default true)
    #[serde(default = "default_checked")]
    pub checked: bool,
}

fn default_checked() -> bool { true }

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl GrocerService {
    // --- Status ---

    #[tool(description = "Get the current status of the grocer service including build info, state counts, and process information")]
    async fn get_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(&self.store).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&status)
    }

    #[tool(description = "Get instructions for entering recipes and reading grocery lists. Call this when starting a session or when unsure which unit names to use.")]
    fn grocery_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::GROCERY_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(GROCERY_INSTRUCTIONS)]))
    }

    // --- Units ---

    #[tool(description = "List every recognized unit grouped by dimension (mass, volume, length) with its factor to the base unit")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        to_json(&conversions::list_units())
    }

    #[tool(description = "Convert a quantity between two units of the same dimension. Returns converted: null with a reason when not possible.")]
    fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversions::convert_units(&p.quantity, &p.from_unit, &p.to_unit))
    }

    #[tool(description = "Merge ingredient lines by item name, summing quantities across compatible units. Nothing is stored.")]
    fn combine_ingredients(&self, Parameters(p): Parameters<CombineIngredientsParams>) -> Result<CallToolResult, McpError> {
        let records: Vec<Ingredient> = ingredient_lines(p.ingredients).into_iter().map(Ingredient::from).collect();
        to_json(&conversions::combine_ingredients(records))
    }

    // --- Recipes ---

    #[tool(description = "Create a new recipe with its ingredient lines")]
    fn create_recipe(&self, Parameters(p): Parameters<CreateRecipeParams>) -> Result<CallToolResult, McpError> {
        let data = RecipeCreate { name: p.name, ingredients: ingredient_lines(p.ingredients), notes: p.notes };
        let result = recipes::create_recipe(&self.store, data).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get full recipe details with ingredient lines")]
    fn get_recipe(&self, Parameters(p): Parameters<GetRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::get_recipe(&self.store, p.id).map_err(|e| McpError::internal_error(e, None))?;
        match result {
            Some(recipe) => to_json(&recipe),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                r#"{{"error": "Recipe not found", "id": {}}}"#,
                p.id
            ))])),
        }
    }

    #[tool(description = "List recipes sorted by name, optionally filtered by a name search")]
    fn list_recipes(&self, Parameters(p): Parameters<ListRecipesParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::list_recipes(&self.store, p.query.as_deref()).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Update a recipe's name, notes, or replace its ingredient list")]
    fn update_recipe(&self, Parameters(p): Parameters<UpdateRecipeParams>) -> Result<CallToolResult, McpError> {
        let data = RecipeUpdate {
            name: p.name,
            ingredients: p.ingredients.map(ingredient_lines),
            notes: p.notes,
        };
        let result = recipes::update_recipe(&self.store, p.id, data).map_err(|e| McpError::internal_error(e, None))?;
        match result {
            Some(recipe) => to_json(&recipe),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                r#"{{"error": "Recipe not found", "id": {}}}"#,
                p.id
            ))])),
        }
    }

    #[tool(description = "Delete a recipe (only allowed if no meal is scheduled with it)")]
    fn delete_recipe(&self, Parameters(p): Parameters<DeleteRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::delete_recipe(&self.store, p.id).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Meals ---

    #[tool(description = "Schedule a recipe for a meal on a date (YYYY-MM-DD)")]
    fn schedule_meal(&self, Parameters(p): Parameters<ScheduleMealParams>) -> Result<CallToolResult, McpError> {
        let data = MealCreate {
            date: p.date,
            meal_type: p.meal_type.as_deref().map(MealType::from_str).unwrap_or_default(),
            recipe_id: p.recipe_id,
            notes: p.notes,
        };
        let result = meals::schedule_meal(&self.store, data).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Remove a scheduled meal")]
    fn unschedule_meal(&self, Parameters(p): Parameters<UnscheduleMealParams>) -> Result<CallToolResult, McpError> {
        let result = meals::unschedule_meal(&self.store, p.id).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List meals scheduled between two dates inclusive, ordered by date and meal type")]
    fn list_meals(&self, Parameters(p): Parameters<ListMealsParams>) -> Result<CallToolResult, McpError> {
        let result = meals::list_meals(&self.store, &p.start, &p.end).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Grocery Lists ---

    #[tool(description = "Generate the grocery list from recipe_ids or from meals scheduled between start and end. Replaces the current list.")]
    fn generate_grocery_list(&self, Parameters(p): Parameters<GenerateGroceryListParams>) -> Result<CallToolResult, McpError> {
        let source = match (p.recipe_ids, p.start, p.end) {
            (Some(ids), _, _) => GrocerySource::Recipes(ids),
            (None, Some(start), Some(end)) => GrocerySource::DateRange { start, end },
            _ => {
                return Err(McpError::invalid_params(
                    "Provide recipe_ids, or both start and end dates",
                    None,
                ))
            }
        };
        let result = grocery_lists::generate_grocery_list(&self.store, source)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get the current grocery list")]
    fn get_grocery_list(&self) -> Result<CallToolResult, McpError> {
        let result = grocery_lists::get_grocery_list(&self.store).map_err(|e| McpError::internal_error(e, None))?;
        match result {
            Some(list) => to_json(&list),
            None => Ok(CallToolResult::success(vec![Content::text(
                r#"{"error": "No grocery list has been generated yet"}"#,
            )])),
        }
    }

    #[tool(description = "Check off (or uncheck) an item on the current grocery list by exact name")]
    fn check_grocery_item(&self, Parameters(p): Parameters<CheckGroceryItemParams>) -> Result<CallToolResult, McpError> {
        let result = grocery_lists::check_grocery_item(&self.store, &p.item, p.checked)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for GrocerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "grocer".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Grocer".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Grocer - recipes, meal plans, and combined grocery lists. \
                 Call grocery_instructions first for unit names and workflow. \
                 Units: list_units, convert_units, combine_ingredients. \
                 Recipes: create/get/list/update/delete_recipe. \
                 Meals: schedule_meal, unschedule_meal, list_meals. \
                 Grocery: generate_grocery_list, get_grocery_list, check_grocery_item. \
                 Status: get_status."
                    .into(),
            ),
        }
    }
}
