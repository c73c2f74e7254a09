//! Rust visitor trait generation.

use super::types::rust_ident;
use crate::error::CodegenError;
use treegen_schema::ir::TableIr;

/// Returns the visitor trait name for a base type (`ExprVisitor`).
#[must_use]
pub fn visitor_trait_name(base_name: &str) -> String {
    format!("{base_name}Visitor")
}

/// Generator for the `<Base>Visitor<R>` trait.
pub struct VisitorGenerator<'a> {
    ir: &'a TableIr,
    indent: &'a str,
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor generator.
    #[must_use]
    pub fn new(ir: &'a TableIr, indent: &'a str) -> Self {
        Self { ir, indent }
    }

    /// Generates the trait with one method per shape, in table order.
    ///
    /// # Errors
    /// Returns `CodegenError` if the visitor parameter name has no Rust form.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();
        let i1 = self.indent;
        let param = rust_ident(&self.ir.visitor_param, "visitor parameter")?;

        output.push_str(&format!(
            "/// Visitor over every `{}` shape.\n",
            self.ir.base_name
        ));
        output.push_str(&format!(
            "pub trait {}<R> {{\n",
            visitor_trait_name(&self.ir.base_name)
        ));
        for shape in &self.ir.shapes {
            output.push_str(&format!(
                "{i1}fn {}(&mut self, {param}: &{}) -> R;\n",
                shape.visit_method_snake(),
                shape.name
            ));
        }
        output.push_str("}\n");

        Ok(output)
    }
}
