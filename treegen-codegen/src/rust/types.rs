//! Rust identifier and type rendering.

use crate::error::CodegenError;
use treegen_schema::ir::FieldIr;

/// Keywords that can only be used as identifiers in raw form.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be identifiers at all, not even raw.
const UNRAWABLE: &[&str] = &["crate", "self", "Self", "super", "_"];

/// Type names the generated code refers to: the visitor's result type
/// parameter and the box around base-typed fields.
const TAKEN_TYPE_NAMES: &[&str] = &["R", "Box"];

/// Returns the identifier as it must be written in Rust source.
///
/// # Errors
/// Returns `CodegenError::ReservedIdentifier` for names with no raw form.
pub fn rust_ident(name: &str, kind: &str) -> Result<String, CodegenError> {
    if UNRAWABLE.contains(&name) {
        return Err(CodegenError::reserved(name, kind, "Rust"));
    }
    if KEYWORDS.contains(&name) {
        return Ok(format!("r#{name}"));
    }
    Ok(name.to_string())
}

/// Checks that a name can be declared as a Rust type in the generated file.
///
/// Type names are written bare everywhere (enum variants, paths, visitor
/// signatures), so keywords are rejected rather than made raw.
///
/// # Errors
/// Returns `CodegenError::ReservedIdentifier` for keywords and for names the
/// generated code already uses.
pub fn check_type_name(name: &str, kind: &str) -> Result<(), CodegenError> {
    if KEYWORDS.contains(&name) || UNRAWABLE.contains(&name) || TAKEN_TYPE_NAMES.contains(&name) {
        return Err(CodegenError::reserved(name, kind, "Rust"));
    }
    Ok(())
}

/// Returns the stored type of a field.
///
/// A direct reference to the base type is boxed so the base enum stays
/// finitely sized.
#[must_use]
pub fn field_type(field: &FieldIr, base_name: &str) -> String {
    if field.is_base_ref {
        format!("Box<{base_name}>")
    } else {
        field.type_expr.clone()
    }
}

/// Checks that a field's type expression parses as a Rust type.
///
/// # Errors
/// Returns `CodegenError::InvalidType` if it does not.
pub fn check_field_type(owner: &str, field: &FieldIr) -> Result<(), CodegenError> {
    syn::parse_str::<syn::Type>(&field.type_expr)
        .map(|_| ())
        .map_err(|_| CodegenError::InvalidType {
            shape: owner.to_string(),
            field: field.identifier.clone(),
            type_expr: field.type_expr.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use treegen_schema::parse_table;
    use treegen_schema::ir::TableIr;

    #[test]
    fn test_rust_ident() {
        assert_eq!(rust_ident("left", "field").unwrap(), "left");
        assert_eq!(rust_ident("type", "field").unwrap(), "r#type");
        assert!(matches!(
            rust_ident("self", "field"),
            Err(CodegenError::ReservedIdentifier { .. })
        ));
    }

    #[test]
    fn test_check_type_name() {
        assert!(check_type_name("Binary", "shape").is_ok());
        assert!(check_type_name("Matcher", "shape").is_ok());
        for name in ["match", "type", "Self", "R", "Box"] {
            assert!(matches!(
                check_type_name(name, "shape"),
                Err(CodegenError::ReservedIdentifier { name: ref n, .. }) if n == name
            ));
        }
    }

    #[test]
    fn test_field_type_boxes_base() {
        let table = parse_table("Expr", &["Call : Expr callee, Vec<Expr> arguments"]).unwrap();
        let ir = TableIr::from_table(&table);
        let call = &ir.shapes[0];

        assert_eq!(field_type(&call.fields[0], "Expr"), "Box<Expr>");
        assert_eq!(field_type(&call.fields[1], "Expr"), "Vec<Expr>");
    }

    #[test]
    fn test_check_field_type() {
        let table = parse_table(
            "Expr",
            &["Ok : HashMap<String, Vec<Expr>> entries", "Bad : List<<Expr> items"],
        )
        .unwrap();
        let ir = TableIr::from_table(&table);

        assert!(check_field_type("Ok", &ir.shapes[0].fields[0]).is_ok());
        assert!(matches!(
            check_field_type("Bad", &ir.shapes[1].fields[0]),
            Err(CodegenError::InvalidType { ref type_expr, .. }) if type_expr == "List<<Expr>"
        ));
    }
}
