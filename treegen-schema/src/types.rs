//! Shape table type definitions.

use std::collections::HashMap;

/// A parsed shape table: a base type, its ordered node shapes and any
/// plain data types nested alongside them.
#[derive(Debug, Clone, Default)]
pub struct ShapeTable {
    /// Root type name shared by every shape (e.g. `Expr`).
    pub base_name: String,
    /// Shapes in declaration order.
    pub shapes: Vec<ShapeSpec>,
    /// Data types in declaration order. They take no part in dispatch.
    pub data_types: Vec<ShapeSpec>,
    /// Lookup map from shape name to index in `shapes`.
    shape_map: HashMap<String, usize>,
}

impl ShapeTable {
    /// Creates a new empty table for the given base type.
    #[must_use]
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            shapes: Vec::new(),
            data_types: Vec::new(),
            shape_map: HashMap::new(),
        }
    }

    /// Adds a shape to the table.
    ///
    /// Duplicate names are kept in `shapes` so validation can report them;
    /// lookups resolve to the first declaration.
    pub fn add_shape(&mut self, shape: ShapeSpec) {
        let index = self.shapes.len();
        self.shape_map.entry(shape.name.clone()).or_insert(index);
        self.shapes.push(shape);
    }

    /// Adds a data type to the table.
    pub fn add_data_type(&mut self, data_type: ShapeSpec) {
        self.data_types.push(data_type);
    }

    /// Looks up a data type by name.
    #[must_use]
    pub fn get_data_type(&self, name: &str) -> Option<&ShapeSpec> {
        self.data_types.iter().find(|d| d.name == name)
    }

    /// Looks up a shape by name.
    #[must_use]
    pub fn get_shape(&self, name: &str) -> Option<&ShapeSpec> {
        self.shape_map.get(name).map(|&idx| &self.shapes[idx])
    }

    /// Returns true if a shape with the given name exists.
    #[must_use]
    pub fn has_shape(&self, name: &str) -> bool {
        self.shape_map.contains_key(name)
    }

    /// Returns the number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the table has no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over shapes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ShapeSpec> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a ShapeTable {
    type Item = &'a ShapeSpec;
    type IntoIter = std::slice::Iter<'a, ShapeSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A named node kind (or data type) with its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSpec {
    /// Shape name (e.g. `Binary`).
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl ShapeSpec {
    /// Creates a new shape.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a field by identifier.
    #[must_use]
    pub fn get_field(&self, identifier: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.identifier == identifier)
    }
}

/// A single typed field of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Type expression, passed through verbatim.
    pub type_expr: String,
    /// Field identifier.
    pub identifier: String,
}

impl FieldSpec {
    /// Creates a new field.
    #[must_use]
    pub fn new(type_expr: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            type_expr: type_expr.into(),
            identifier: identifier.into(),
        }
    }
}

impl std::fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.type_expr, self.identifier)
    }
}

/// Returns true if `s` is a plain identifier (`[A-Za-z_][A-Za-z0-9_]*`).
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let mut table = ShapeTable::new("Expr");
        table.add_shape(ShapeSpec::new(
            "Grouping",
            vec![FieldSpec::new("Expr", "expression")],
        ));
        table.add_shape(ShapeSpec::new("Variable", vec![FieldSpec::new("Token", "name")]));

        assert_eq!(table.len(), 2);
        assert!(table.has_shape("Grouping"));
        assert!(!table.has_shape("Binary"));
        let variable = table.get_shape("Variable").unwrap();
        assert_eq!(variable.get_field("name").unwrap().type_expr, "Token");
    }

    #[test]
    fn test_duplicate_lookup_resolves_first() {
        let mut table = ShapeTable::new("Expr");
        table.add_shape(ShapeSpec::new("This", vec![FieldSpec::new("Token", "keyword")]));
        table.add_shape(ShapeSpec::new("This", vec![]));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get_shape("This").unwrap().fields.len(), 1);
    }

    #[test]
    fn test_data_types_kept_apart() {
        let mut table = ShapeTable::new("Stmt");
        table.add_shape(ShapeSpec::new("Block", vec![FieldSpec::new("List<Stmt>", "statements")]));
        table.add_data_type(ShapeSpec::new("Param", vec![FieldSpec::new("Token", "name")]));

        assert_eq!(table.len(), 1);
        assert!(!table.has_shape("Param"));
        assert_eq!(table.get_data_type("Param").unwrap().fields.len(), 1);
        assert!(table.get_data_type("Block").is_none());
    }

    #[test]
    fn test_field_display() {
        let field = FieldSpec::new("List<Expr>", "arguments");
        assert_eq!(field.to_string(), "List<Expr> arguments");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("left"));
        assert!(is_identifier("_tmp1"));
        assert!(is_identifier("IndexSet"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier(">"));
        assert!(!is_identifier("a-b"));
    }
}
