//! Shared in-memory state
//!
//! Holds the planner and the current grocery list behind a mutex so the
//! server's tools can share them.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::grocery::GroceryList;
use crate::planner::{Planner, PlannerError};

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("State lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Planner(#[from] PlannerError),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Everything the server keeps between tool calls
#[derive(Debug, Default)]
pub struct StoreState {
    pub planner: Planner,
    /// Most recently generated grocery list
    pub grocery_list: Option<GroceryList>,
}

/// Shared handle to the state
#[derive(Clone, Default)]
pub struct Store {
    state: Arc<Mutex<StoreState>>,
}

impl Store {
    /// Create a store around an existing planner
    pub fn new(planner: Planner) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                planner,
                grocery_list: None,
            })),
        }
    }

    /// Execute a closure with read access to the state
    pub fn with_state<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&StoreState) -> StoreResult<T>,
    {
        let state = self.state.lock().map_err(|_| StoreError::Poisoned)?;
        f(&state)
    }

    /// Execute a closure with mutable access to the state
    pub fn with_state_mut<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut StoreState) -> StoreResult<T>,
    {
        let mut state = self.state.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::RecipeCreate;

    #[test]
    fn test_clones_share_state() {
        let store = Store::default();
        let other = store.clone();

        other
            .with_state_mut(|state| {
                state.planner.recipes.create(RecipeCreate {
                    name: "Salad".to_string(),
                    ingredients: vec![],
                    notes: None,
                })?;
                Ok(())
            })
            .unwrap();

        let count = store.with_state(|state| Ok(state.planner.recipes.count())).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_planner_errors_convert() {
        let store = Store::default();
        let err = store
            .with_state_mut(|state| {
                state.planner.meals.unschedule(4)?;
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Planner(PlannerError::MealNotFound(4))));
        assert_eq!(err.to_string(), "Scheduled meal not found: 4");
    }
}
