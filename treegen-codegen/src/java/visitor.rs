//! Java visitor interface generation.

use treegen_schema::ir::TableIr;

/// Generator for the nested `Visitor<R>` interface.
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

    /// Generates the interface with one method per shape, in table order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        let i1 = self.indent;
        let i2 = self.indent.repeat(2);

        output.push_str(&format!("{i1}interface Visitor<R> {{\n"));
        for shape in &self.ir.shapes {
            output.push_str(&format!(
                "{i2}R {}({} {});\n",
                shape.visit_method, shape.name, self.ir.visitor_param
            ));
        }
        output.push_str(&format!("{i1}}}\n"));

        output
    }
}
