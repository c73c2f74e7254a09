//! # TreeGen
//!
//! AST node and visitor generator for tree-walking interpreters.
//!
//! A shape table such as
//!
//! ```text
//! Binary   : Expr left, Token operator, Expr right
//! Call     : Expr callee, Token paren, List<Expr> arguments
//! ```
//!
//! becomes a base type, one node type per shape, and a visitor with one
//! method per shape whose names line up with each node's `accept`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use treegen::prelude::*;
//!
//! let java = generate_from_declarations("Expr", EXPR_SHAPES, &GeneratorConfig::default())?;
//!
//! AstBuilder::new("Stmt")
//!     .shapes(STMT_SHAPES)
//!     .target(Target::Rust)
//!     .out_dir("src/ast")
//!     .run()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Shape declaration parsing, validation and naming
//! - [`codegen`] - Java and Rust emitters, document assembly and output

pub mod prelude;

/// Shape table parsing and validation.
pub mod schema {
    pub use treegen_schema::*;
}

/// Code generation from shape tables.
pub mod codegen {
    pub use treegen_codegen::*;
}

pub use treegen_codegen::{
    AstBuilder, CodegenError, Generator, GeneratorConfig, Target, generate,
    generate_from_declarations, generate_from_file, write_file_atomic,
};
pub use treegen_schema::{ShapeSpec, ShapeTable, parse_table};
