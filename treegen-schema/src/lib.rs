//! # TreeGen Schema
//!
//! Shape table parsing for AST code generation.
//!
//! This crate provides:
//! - Parsing of compact shape declarations (`"Binary : Expr left, Token operator, Expr right"`)
//! - Plain data types declared alongside shapes (`"struct Param : TypeNode type, Token name"`)
//! - Shape table validation (unique shapes and fields, valid identifiers)
//! - Intermediate representation with the shared dispatch-method naming
//! - Built-in expression and statement tables

pub mod error;
pub mod ir;
pub mod parser;
pub mod tables;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{DataIr, FieldIr, ShapeIr, TableIr};
pub use parser::{parse_field, parse_shape, parse_table, parse_table_file, parse_table_source};
pub use types::{FieldSpec, ShapeSpec, ShapeTable};
pub use validation::validate_table;
