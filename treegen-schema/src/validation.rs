//! Shape table validation.
//!
//! Checks that a table can be emitted without producing colliding names:
//! shapes and data types share one namespace, and every field within a
//! type must be unique.

use crate::error::SchemaError;
use crate::types::{ShapeSpec, ShapeTable, is_identifier};
use std::collections::HashSet;

/// Validates a parsed table.
///
/// # Errors
/// Returns `SchemaError` describing the first problem found.
pub fn validate_table(table: &ShapeTable) -> Result<(), SchemaError> {
    if !is_identifier(&table.base_name) {
        return Err(SchemaError::invalid_identifier(
            "base type",
            table.base_name.as_str(),
        ));
    }

    if table.is_empty() {
        return Err(SchemaError::EmptyTable {
            base_name: table.base_name.clone(),
        });
    }

    let mut seen_names = HashSet::new();
    let declared = table
        .iter()
        .map(|shape| ("shape", shape))
        .chain(table.data_types.iter().map(|data| ("data type", data)));

    for (kind, shape) in declared {
        if !is_identifier(&shape.name) {
            return Err(SchemaError::invalid_identifier(kind, shape.name.as_str()));
        }

        if shape.name == table.base_name {
            return Err(SchemaError::ShadowsBaseType {
                name: shape.name.clone(),
            });
        }

        if !seen_names.insert(shape.name.as_str()) {
            return Err(SchemaError::duplicate(kind, shape.name.as_str()));
        }

        validate_fields(shape)?;
    }

    Ok(())
}

/// Validates the fields of one shape.
fn validate_fields(shape: &ShapeSpec) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in &shape.fields {
        if !seen.insert(field.identifier.as_str()) {
            return Err(SchemaError::duplicate(
                "field",
                format!("{}.{}", shape.name, field.identifier),
            ));
        }
    }

    Ok(())
}
