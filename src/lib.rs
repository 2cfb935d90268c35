//! Grocer Library
//!
//! Unit conversion, ingredient aggregation, and grocery list planning.

pub mod build_info;
pub mod config;
pub mod grocery;
pub mod mcp;
pub mod planner;
pub mod store;
pub mod tools;
pub mod units;
