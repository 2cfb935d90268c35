//! Grocer Status Tool
//!
//! Provides runtime status information about the grocer service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::store::Store;

/// Grocery planning instructions for AI assistants
pub const GROCERY_INSTRUCTIONS: &str = r#"
# Grocer Instructions

## Units

Every quantity carries exactly one unit from a fixed list. Call `list_units`
to see them. Use the full lowercase name: `gram`, `tablespoon`, `cup`.
Abbreviations ("g", "tbsp") and plurals ("cups") are not recognized.

| Dimension | Base unit | Units |
|-----------|-----------|-------|
| mass | gram | gram, kilogram, ounce, pound |
| volume | liter | liter, milliliter, teaspoon, tablespoon, cup, pint, quart, gallon |
| length | meter | meter, centimeter, millimeter, inch, foot, yard, mile |

Countable items ("3 eggs") use an empty unit. Amounts like "to taste" use an
empty quantity and an empty unit.

## Workflow

1. `create_recipe` with its ingredient lines (`item`, `quantity`, `unit`,
   `category`, `notes`).
2. `schedule_meal` to put recipes on dates (YYYY-MM-DD).
3. `generate_grocery_list` with either `recipe_ids` or `start`/`end` dates.
4. `check_grocery_item` as items are bought.

## Reading the grocery list

Lines with the same `item` name are merged. The merged quantity uses the unit
of the first line seen for that item, rounded to two decimals.

If an item shows an empty quantity, its lines could not be added up (for
example 1 liter of milk plus 200 grams of milk). When `error` is true, the
most recent line for that item could not be converted. Tell the user to check
those items by hand.
"#;

/// Status information for the service
#[derive(Debug, Serialize)]
pub struct GrocerStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub seed_path: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub recipe_count: usize,
    pub scheduled_meal_count: usize,
    pub grocery_item_count: Option<usize>,
}

/// Tracks service uptime and reports status
pub struct StatusTracker {
    start_time: Instant,
    seed_path: PathBuf,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(seed_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            seed_path,
        }
    }

    /// Get the current status
    pub fn get_status(&self, store: &Store) -> Result<GrocerStatus, String> {
        let build_info = BuildInfo::current();

        let (recipe_count, scheduled_meal_count, grocery_item_count) = store
            .with_state(|state| {
                Ok((
                    state.planner.recipes.count(),
                    state.planner.meals.count(),
                    state.grocery_list.as_ref().map(|list| list.items.len()),
                ))
            })
            .map_err(|e| format!("Failed to read state: {}", e))?;

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        Ok(GrocerStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            seed_path: self.seed_path.display().to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            recipe_count,
            scheduled_meal_count,
            grocery_item_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts() {
        let store = Store::default();
        let tracker = StatusTracker::new(PathBuf::from("data/seed.json"));
        let status = tracker.get_status(&store).unwrap();
        assert_eq!(status.recipe_count, 0);
        assert_eq!(status.scheduled_meal_count, 0);
        assert_eq!(status.grocery_item_count, None);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.seed_path, "data/seed.json");
    }
}
