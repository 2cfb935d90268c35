//! Unit conversion module
//!
//! Closed table of mass, volume, and length units plus conversion between
//! units of the same dimension.

pub mod converter;
pub mod table;

pub use converter::{are_compatible, convert, convert_value, parse_quantity};
pub use table::{dimension_of, lookup_unit, units_in, Dimension, UnitSpec, UNITS};
