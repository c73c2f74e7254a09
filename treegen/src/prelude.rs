//! Prelude module for convenient imports.
//!
//! ```ignore
//! use treegen::prelude::*;
//! ```

// Schema types
pub use treegen_schema::tables::{EXPR_SHAPES, STMT_SHAPES};
pub use treegen_schema::{
    FieldSpec, ParseError, SchemaError, ShapeSpec, ShapeTable, TableIr, parse_shape, parse_table,
    parse_table_file, parse_table_source,
};

// Codegen types
pub use treegen_codegen::{
    AstBuilder, Backend, CodegenError, Generator, GeneratorConfig, Target, generate,
    generate_from_declarations, generate_from_file, write_file_atomic, write_to,
};
