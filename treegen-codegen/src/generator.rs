//! Document assembly.
//!
//! A [`Backend`] knows how to render each piece of a document for one target
//! language; the [`Generator`] decides the order those pieces appear in.

use crate::config::{GeneratorConfig, Target};
use crate::error::CodegenError;
use crate::java::JavaBackend;
use crate::rust::RustBackend;
use treegen_schema::ir::{DataIr, ShapeIr, TableIr};

/// Renders the pieces of a generated document for one target language.
pub trait Backend {
    /// Rejects tables that would produce invalid code for this target.
    ///
    /// # Errors
    /// Returns `CodegenError` naming the first offending shape or field.
    fn check(&self, ir: &TableIr) -> Result<(), CodegenError>;

    /// Header comment, package declaration and imports.
    fn preamble(&self, ir: &TableIr) -> String;

    /// Opening of the base type declaration.
    fn open_base(&self, ir: &TableIr) -> String;

    /// Visitor declaration with one method per shape.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name has no form in the target language.
    fn visitor(&self, ir: &TableIr) -> Result<String, CodegenError>;

    /// Definition of a single shape.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name has no form in the target language.
    fn node(&self, ir: &TableIr, shape: &ShapeIr) -> Result<String, CodegenError>;

    /// Definition of a single data type.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name has no form in the target language.
    fn data_type(&self, ir: &TableIr, data: &DataIr) -> Result<String, CodegenError>;

    /// The base type's dispatch declaration.
    fn base_dispatch(&self, ir: &TableIr) -> String;

    /// Closing of the base type declaration.
    fn close_base(&self, ir: &TableIr) -> String;

    /// Name of the target language.
    fn language_name(&self) -> &'static str;
}

/// Renders `text` as line comments, one `marker` per line.
pub(crate) fn comment_block(text: &str, marker: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                format!("{marker}\n")
            } else {
                format!("{marker} {line}\n")
            }
        })
        .collect()
}

/// Main code generator that orchestrates all backend pieces.
pub struct Generator<'a> {
    ir: &'a TableIr,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(ir: &'a TableIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Generates the complete document.
    ///
    /// # Errors
    /// Returns `CodegenError` if the table contains names or types the
    /// configured target cannot express.
    pub fn generate(&self) -> Result<String, CodegenError> {
        match self.config.target {
            Target::Java => self.assemble(&JavaBackend::new(self.config)),
            Target::Rust => self.assemble(&RustBackend::new(self.config)),
        }
    }

    /// Assembles the document in its fixed order.
    fn assemble(&self, backend: &dyn Backend) -> Result<String, CodegenError> {
        backend.check(self.ir)?;

        tracing::debug!(
            "Generating {} {} shapes and {} data types for base type {}",
            self.ir.shapes.len(),
            backend.language_name(),
            self.ir.data_types.len(),
            self.ir.base_name
        );

        let mut output = String::new();
        output.push_str(&backend.preamble(self.ir));
        output.push_str(&backend.open_base(self.ir));
        output.push_str(&backend.visitor(self.ir)?);

        for shape in &self.ir.shapes {
            output.push('\n');
            output.push_str(&backend.node(self.ir, shape)?);
        }

        for data in &self.ir.data_types {
            output.push('\n');
            output.push_str(&backend.data_type(self.ir, data)?);
        }

        output.push('\n');
        output.push_str(&backend.base_dispatch(self.ir));
        output.push_str(&backend.close_base(self.ir));

        Ok(output)
    }
}
