//! Ingredient aggregation
//!
//! Folds ingredient records into one entry per item, summing quantities
//! across units of the same dimension.

use std::collections::HashMap;

use super::ingredient::Ingredient;
use crate::units::convert;

/// Round to two decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid rendering "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Encode a merged quantity as text
pub fn format_quantity(value: f64) -> String {
    round2(value).to_string()
}

/// Merge ingredient records by item name
///
/// Output keeps the order in which each item was first seen. A merged
/// quantity is expressed in the unit of the item's first record. Once an
/// item's quantity is blanked it stays blank; `error` reflects only the most
/// recent merge into it.
pub fn combine(records: &[Ingredient]) -> Vec<Ingredient> {
    let mut combined: Vec<Ingredient> = Vec::with_capacity(records.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());

    for record in records {
        match index.get(record.item.as_str()).copied() {
            Some(position) => {
                let merged = merge(&combined[position], record);
                combined[position] = merged;
            }
            None => {
                index.insert(record.item.as_str(), combined.len());
                combined.push(record.clone());
            }
        }
    }

    combined
}

/// Merge one incoming record into the existing entry for the same item
fn merge(existing: &Ingredient, incoming: &Ingredient) -> Ingredient {
    let converted = convert(&incoming.quantity, &incoming.unit, &existing.unit);

    let total = match (converted, existing.is_unknown()) {
        (Some(amount), false) => existing.quantity_value().map(|current| current + amount),
        _ => None,
    };

    match total {
        Some(total) => {
            tracing::trace!(
                item = %existing.item,
                unit = %existing.unit,
                total,
                "Merged ingredient quantity"
            );
            Ingredient {
                quantity: format_quantity(total),
                ..existing.clone()
            }
        }
        None => {
            // A non-numeric existing quantity counts as a failed merge too
            let error = converted.is_none() || !existing.is_unknown();
            if error {
                tracing::debug!(
                    item = %existing.item,
                    from_unit = %incoming.unit,
                    to_unit = %existing.unit,
                    "Could not reconcile ingredient quantities"
                );
            }
            existing.blanked(error)
        }
    }
}
