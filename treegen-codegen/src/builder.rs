//! Build script integration.
//!
//! ```ignore
//! // build.rs
//! use treegen_codegen::{AstBuilder, Target};
//! use treegen_schema::tables::EXPR_SHAPES;
//!
//! let out_dir = std::env::var("OUT_DIR").unwrap();
//! AstBuilder::new("Expr")
//!     .shapes(EXPR_SHAPES)
//!     .target(Target::Rust)
//!     .out_dir(out_dir)
//!     .run()?;
//! ```

use crate::config::{GeneratorConfig, Target};
use crate::error::CodegenError;
use crate::generator::Generator;
use crate::output::write_file_atomic;
use std::path::PathBuf;
use treegen_schema::ir::TableIr;
use treegen_schema::{ShapeTable, parse_table, parse_table_file};

/// Where the table's declarations come from.
#[derive(Debug, Clone)]
enum Source {
    Declarations(Vec<String>),
    File(PathBuf),
}

/// Where the generated document goes.
#[derive(Debug, Clone)]
enum Destination {
    File(PathBuf),
    Dir(PathBuf),
}

/// Builder for configuring and running one generation.
#[derive(Debug, Clone)]
pub struct AstBuilder {
    base_name: String,
    source: Source,
    target: Target,
    indent: Option<String>,
    package: Option<String>,
    imports: Vec<String>,
    header: Option<Option<String>>,
    derives: Option<Vec<String>>,
    destination: Option<Destination>,
}

impl AstBuilder {
    /// Creates a builder for the given base type with no shapes.
    #[must_use]
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            source: Source::Declarations(Vec::new()),
            target: Target::default(),
            indent: None,
            package: None,
            imports: Vec::new(),
            header: None,
            derives: None,
            destination: None,
        }
    }

    /// Appends one shape or `struct` data type declaration.
    #[must_use]
    pub fn shape(mut self, declaration: impl Into<String>) -> Self {
        if let Source::Declarations(declarations) = &mut self.source {
            declarations.push(declaration.into());
        } else {
            self.source = Source::Declarations(vec![declaration.into()]);
        }
        self
    }

    /// Appends several declarations in order.
    #[must_use]
    pub fn shapes<I, S>(self, declarations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        declarations
            .into_iter()
            .fold(self, |builder, declaration| builder.shape(declaration.as_ref()))
    }

    /// Reads declarations from a table file instead.
    #[must_use]
    pub fn table_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Source::File(path.into());
        self
    }

    /// Sets the target language.
    #[must_use]
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Overrides the target's default indentation.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Sets the Java package.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Adds an extra import.
    #[must_use]
    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Sets or clears the header comment.
    #[must_use]
    pub fn header(mut self, header: Option<String>) -> Self {
        self.header = Some(header);
        self
    }

    /// Replaces the Rust derive list.
    #[must_use]
    pub fn derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = Some(derives.into_iter().map(Into::into).collect());
        self
    }

    /// Writes to this exact file.
    #[must_use]
    pub fn out_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(Destination::File(path.into()));
        self
    }

    /// Writes into this directory, named after the base type and target.
    #[must_use]
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination = Some(Destination::Dir(dir.into()));
        self
    }

    /// Returns the generator configuration this builder describes.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.target);
        if let Some(indent) = &self.indent {
            config.indent = indent.clone();
        }
        if let Some(header) = &self.header {
            config.header = header.clone();
        }
        if let Some(derives) = &self.derives {
            config.derives = derives.clone();
        }
        config.package = self.package.clone();
        config.imports = self.imports.clone();
        config
    }

    /// Parses and validates the table.
    ///
    /// # Errors
    /// Returns `CodegenError` if the table cannot be read, parsed or validated.
    pub fn table(&self) -> Result<ShapeTable, CodegenError> {
        let table = match &self.source {
            Source::Declarations(declarations) => {
                parse_table(&self.base_name, declarations.as_slice())?
            }
            Source::File(path) => parse_table_file(&self.base_name, path)?,
        };
        Ok(table)
    }

    /// Generates the document without writing it.
    ///
    /// # Errors
    /// Returns `CodegenError` if parsing, validation or generation fails.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let table = self.table()?;
        let ir = TableIr::from_table(&table);
        let config = self.config();
        Generator::new(&ir, &config).generate()
    }

    /// Returns the path the document will be written to.
    #[must_use]
    pub fn output_path(&self) -> Option<PathBuf> {
        match &self.destination {
            Some(Destination::File(path)) => Some(path.clone()),
            Some(Destination::Dir(dir)) => {
                Some(dir.join(self.target.file_name(&self.base_name)))
            }
            None => None,
        }
    }

    /// Generates the document and writes it atomically.
    ///
    /// Nothing is written unless generation succeeds.
    ///
    /// # Errors
    /// Returns `CodegenError` if no destination was set, or generation or
    /// writing fails.
    pub fn run(&self) -> Result<PathBuf, CodegenError> {
        let path = self
            .output_path()
            .ok_or_else(|| CodegenError::generation("no output destination configured"))?;

        let document = self.generate()?;
        write_file_atomic(&path, &document)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treegen_schema::SchemaError;
    use treegen_schema::tables::EXPR_SHAPES;

    #[test]
    fn test_builder_config() {
        let builder = AstBuilder::new("Expr")
            .target(Target::Rust)
            .derives(["Debug", "PartialEq"])
            .header(None)
            .import("crate::token::Token");
        let config = builder.config();

        assert_eq!(config.target, Target::Rust);
        assert_eq!(config.indent, "    ");
        assert_eq!(config.derives, ["Debug", "PartialEq"]);
        assert!(config.header.is_none());
        assert_eq!(config.imports, ["crate::token::Token"]);
    }

    #[test]
    fn test_builder_run_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = AstBuilder::new("Expr")
            .shapes(EXPR_SHAPES)
            .out_dir(dir.path())
            .run()
            .unwrap();

        assert_eq!(path, dir.path().join("Expr.java"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("R visitCallExpr(Call expr);"));
        assert!(written.contains("final List<Expr> arguments;"));
    }

    #[test]
    fn test_builder_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("stmt.ast");
        std::fs::write(&table, "Block : Vec<Stmt> statements\nWhile : Expr condition, Stmt body\n")
            .unwrap();

        let out = AstBuilder::new("Stmt")
            .table_file(&table)
            .target(Target::Rust)
            .generate()
            .unwrap();

        assert!(out.contains("fn visit_while_stmt(&mut self, stmt: &While) -> R;"));
        assert!(out.contains("    body: Box<Stmt>,\n"));
    }

    #[test]
    fn test_malformed_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let builder = AstBuilder::new("Expr")
            .shape("Binary : Expr left, Token operator, Expr right")
            .shape("Binary : Expr left")
            .out_dir(dir.path());

        let err = builder.run().unwrap_err();
        assert!(matches!(
            err,
            CodegenError::Schema(SchemaError::DuplicateDefinition { .. })
        ));
        assert!(!builder.output_path().unwrap().exists());
    }

    #[test]
    fn test_run_without_destination() {
        let err = AstBuilder::new("Expr")
            .shape("This : Token keyword")
            .run()
            .unwrap_err();
        assert!(matches!(err, CodegenError::Generation { .. }));
    }
}
