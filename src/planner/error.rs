//! Planner error types

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while managing recipes and scheduled meals
#[derive(Debug, Error, PartialEq)]
pub enum PlannerError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(i64),

    #[error("Scheduled meal not found: {0}")]
    MealNotFound(i64),

    #[error("Recipe {recipe_id} is scheduled in {meal_count} meal(s); unschedule them first")]
    RecipeScheduled { recipe_id: i64, meal_count: usize },

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Recipe name cannot be empty")]
    EmptyName,
}

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Parse an ISO date such as "2025-01-09"
pub fn parse_date(s: &str) -> PlannerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-09").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()
        );
        assert_eq!(
            parse_date("01/09/2025"),
            Err(PlannerError::InvalidDate("01/09/2025".to_string()))
        );
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = PlannerError::RecipeScheduled { recipe_id: 3, meal_count: 2 };
        assert_eq!(
            err.to_string(),
            "Recipe 3 is scheduled in 2 meal(s); unschedule them first"
        );
    }
}
