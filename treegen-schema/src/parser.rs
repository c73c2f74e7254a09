//! Shape declaration parser.
//!
//! A declaration has the form `"<Name> : <Type1> <field1>, <Type2> <field2>"`.
//! The field identifier is always the token after the last whitespace in a
//! field's text; the type is everything before it, so type expressions may
//! themselves contain spaces (`Map<String, Expr> table`).
//!
//! A declaration prefixed with `struct` (`"struct Param : TypeNode type, Token name"`)
//! declares a plain data type instead of a node shape.

use crate::error::{ParseError, SchemaError};
use crate::types::{FieldSpec, ShapeSpec, ShapeTable, is_identifier};
use crate::validation::validate_table;
use std::path::Path;

/// Keyword introducing a data type declaration.
pub const DATA_KEYWORD: &str = "struct";

/// Returns the rest of a data type declaration, or `None` for a shape.
fn strip_data_keyword(declaration: &str) -> Option<&str> {
    let rest = declaration.trim_start().strip_prefix(DATA_KEYWORD)?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}

/// Parses a single shape declaration.
///
/// # Arguments
/// * `declaration` - Declaration text, e.g. `"Unary : Token operator, Expr right"`
///
/// # Errors
/// Returns `ParseError::MalformedShape` if the `:` separator is missing and
/// `ParseError::MalformedField` if a field has no identifier.
pub fn parse_shape(declaration: &str) -> Result<ShapeSpec, ParseError> {
    let (name, field_list) = declaration
        .split_once(':')
        .ok_or_else(|| ParseError::malformed_shape(declaration.trim()))?;
    let name = name.trim();

    let fields = split_fields(field_list)
        .into_iter()
        .map(|text| parse_field(name, text))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ShapeSpec::new(name, fields))
}

/// Splits one field's text into its type expression and identifier.
///
/// # Errors
/// Returns `ParseError::MalformedField` if the text has no whitespace or the
/// final token is not an identifier.
pub fn parse_field(shape: &str, text: &str) -> Result<FieldSpec, ParseError> {
    let trimmed = text.trim();
    let (type_expr, identifier) = trimmed
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| ParseError::malformed_field(shape, trimmed))?;
    let type_expr = type_expr.trim_end();

    if type_expr.is_empty() || !is_identifier(identifier) {
        return Err(ParseError::malformed_field(shape, trimmed));
    }

    Ok(FieldSpec::new(type_expr, identifier))
}

/// Splits a field list on top-level commas.
///
/// Commas inside `<>`, `()` or `[]` belong to the type expression. A blank
/// list yields no fields.
fn split_fields(field_list: &str) -> Vec<&str> {
    if field_list.trim().is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in field_list.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                fields.push(&field_list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&field_list[start..]);

    fields
}

/// Parses and validates an ordered list of declarations.
///
/// # Arguments
/// * `base_name` - Root type name shared by all shapes
/// * `declarations` - Shape and data type declarations in table order
///
/// # Errors
/// Returns `SchemaError` if any declaration is malformed or the resulting
/// table fails validation.
pub fn parse_table<S: AsRef<str>>(
    base_name: &str,
    declarations: &[S],
) -> Result<ShapeTable, SchemaError> {
    let mut table = ShapeTable::new(base_name.trim());
    for declaration in declarations {
        let declaration = declaration.as_ref();
        match strip_data_keyword(declaration) {
            Some(rest) => table.add_data_type(parse_shape(rest)?),
            None => table.add_shape(parse_shape(declaration)?),
        }
    }

    validate_table(&table)?;
    Ok(table)
}

/// Parses a table file body: one declaration per line.
///
/// Blank lines are skipped and `#` starts a comment running to the end of
/// the line.
///
/// # Errors
/// Returns `SchemaError` if any declaration is malformed or the table fails
/// validation.
pub fn parse_table_source(base_name: &str, source: &str) -> Result<ShapeTable, SchemaError> {
    let declarations: Vec<&str> = source
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(code, _)| code).trim())
        .filter(|line| !line.is_empty())
        .collect();

    parse_table(base_name, &declarations)
}

/// Reads and parses a table file.
///
/// # Errors
/// Returns `SchemaError` if the file cannot be read, or parsing or
/// validation fails.
pub fn parse_table_file(base_name: &str, path: &Path) -> Result<ShapeTable, SchemaError> {
    let source = std::fs::read_to_string(path).map_err(ParseError::from)?;
    parse_table_source(base_name, &source)
}
