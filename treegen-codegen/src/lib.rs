//! # TreeGen Codegen
//!
//! Generates AST node definitions and a matching visitor from a shape table.
//!
//! This crate provides:
//! - Java generation (abstract base class, nested visitor, double dispatch)
//! - Rust generation (base enum, visitor trait, `match` dispatch)
//! - Fixed-order document assembly
//! - Atomic output writing
//! - Build script integration

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod java;
pub mod output;
pub mod rust;

pub use builder::AstBuilder;
pub use config::{GeneratorConfig, Target};
pub use error::CodegenError;
pub use generator::{Backend, Generator};
pub use output::{write_file_atomic, write_to};

use std::path::Path;
use treegen_schema::{ShapeTable, TableIr};

/// Generates a document from a validated table.
///
/// # Errors
/// Returns `CodegenError` if the table uses names or types the configured
/// target cannot express.
pub fn generate(table: &ShapeTable, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let ir = TableIr::from_table(table);
    Generator::new(&ir, config).generate()
}

/// Generates a document from shape declarations.
///
/// # Arguments
/// * `base_name` - Root type name, e.g. `Expr`
/// * `declarations` - Shape declarations in table order
/// * `config` - Generator configuration
///
/// # Returns
/// Generated source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_declarations<S: AsRef<str>>(
    base_name: &str,
    declarations: &[S],
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let table = treegen_schema::parse_table(base_name, declarations)?;
    generate(&table, config)
}

/// Generates a document from a table file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation fails.
pub fn generate_from_file(
    path: &Path,
    base_name: &str,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let table = treegen_schema::parse_table_file(base_name, path)?;
    generate(&table, config)
}
