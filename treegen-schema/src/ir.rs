//! Intermediate representation for code generation.
//!
//! Every name an emitter writes is computed here once, so the visitor
//! block and the node definitions cannot disagree about what a dispatch
//! method is called.

use crate::types::{FieldSpec, ShapeSpec, ShapeTable};

/// Resolved view of a shape table for code generation.
#[derive(Debug, Clone)]
pub struct TableIr {
    /// Base type name.
    pub base_name: String,
    /// Name of the parameter each visitor method takes (lowercase base).
    pub visitor_param: String,
    /// Resolved shapes in table order.
    pub shapes: Vec<ShapeIr>,
    /// Resolved data types in table order.
    pub data_types: Vec<DataIr>,
}

impl TableIr {
    /// Creates an intermediate representation from a validated table.
    #[must_use]
    pub fn from_table(table: &ShapeTable) -> Self {
        Self {
            base_name: table.base_name.clone(),
            visitor_param: table.base_name.to_lowercase(),
            shapes: table
                .iter()
                .map(|shape| ShapeIr::from_shape(shape, &table.base_name))
                .collect(),
            data_types: table
                .data_types
                .iter()
                .map(|data| DataIr::from_data_type(data, &table.base_name))
                .collect(),
        }
    }

    /// Gets a resolved shape by name.
    #[must_use]
    pub fn get_shape(&self, name: &str) -> Option<&ShapeIr> {
        self.shapes.iter().find(|s| s.name == name)
    }

    /// Returns all field type expressions, shapes first, in table order.
    pub fn field_types(&self) -> impl Iterator<Item = &str> + '_ {
        let shape_fields = self.shapes.iter().flat_map(|s| s.fields.iter());
        let data_fields = self.data_types.iter().flat_map(|d| d.fields.iter());
        shape_fields
            .chain(data_fields)
            .map(|f| f.type_expr.as_str())
    }
}

/// Resolved shape information.
#[derive(Debug, Clone)]
pub struct ShapeIr {
    /// Shape name.
    pub name: String,
    /// Dispatch method name, `visit<Shape><Base>`.
    pub visit_method: String,
    /// Resolved fields in declaration order.
    pub fields: Vec<FieldIr>,
}

impl ShapeIr {
    /// Creates a resolved shape.
    #[must_use]
    pub fn from_shape(shape: &ShapeSpec, base_name: &str) -> Self {
        Self {
            name: shape.name.clone(),
            visit_method: visit_method_name(&shape.name, base_name),
            fields: shape
                .fields
                .iter()
                .map(|f| FieldIr::from_field(f, base_name))
                .collect(),
        }
    }

    /// Returns the dispatch method name in snake_case (`visit_binary_expr`).
    #[must_use]
    pub fn visit_method_snake(&self) -> String {
        to_snake_case(&self.visit_method)
    }
}

/// Resolved data type: fields only, no dispatch.
#[derive(Debug, Clone)]
pub struct DataIr {
    /// Data type name.
    pub name: String,
    /// Resolved fields in declaration order.
    pub fields: Vec<FieldIr>,
}

impl DataIr {
    /// Creates a resolved data type.
    #[must_use]
    pub fn from_data_type(data: &ShapeSpec, base_name: &str) -> Self {
        Self {
            name: data.name.clone(),
            fields: data
                .fields
                .iter()
                .map(|f| FieldIr::from_field(f, base_name))
                .collect(),
        }
    }
}

/// Resolved field information.
#[derive(Debug, Clone)]
pub struct FieldIr {
    /// Type expression, verbatim.
    pub type_expr: String,
    /// Field identifier.
    pub identifier: String,
    /// Whether the type is exactly the base type.
    pub is_base_ref: bool,
}

impl FieldIr {
    /// Creates a resolved field.
    #[must_use]
    pub fn from_field(field: &FieldSpec, base_name: &str) -> Self {
        Self {
            type_expr: field.type_expr.clone(),
            identifier: field.identifier.clone(),
            is_base_ref: field.type_expr == base_name,
        }
    }
}

/// Returns the dispatch method name for a shape.
#[must_use]
pub fn visit_method_name(shape_name: &str, base_name: &str) -> String {
    format!("visit{shape_name}{base_name}")
}

/// Converts a camelCase or PascalCase string to snake_case.
///
/// Runs of capitals are kept together (`visitASTNode` -> `visit_ast_node`).
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_' && (prev.is_lowercase() || prev.is_ascii_digit() || next_lower) {
                result.push('_');
            }
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}
