//! Java node subclass generation.

use treegen_schema::ir::{DataIr, FieldIr, ShapeIr, TableIr};

/// Generator for the `static class` of each shape.
pub struct NodeGenerator<'a> {
    ir: &'a TableIr,
    indent: &'a str,
}

impl<'a> NodeGenerator<'a> {
    /// Creates a new node generator.
    #[must_use]
    pub fn new(ir: &'a TableIr, indent: &'a str) -> Self {
        Self { ir, indent }
    }

    /// Generates one subclass: constructor, accept override, then fields.
    #[must_use]
    pub fn generate(&self, shape: &ShapeIr) -> String {
        let mut output = String::new();
        let i1 = self.indent;

        output.push_str(&format!(
            "{i1}static class {} extends {} {{\n",
            shape.name, self.ir.base_name
        ));
        output.push_str(&self.generate_constructor(&shape.name, &shape.fields));
        output.push('\n');
        output.push_str(&self.generate_accept(shape));

        if !shape.fields.is_empty() {
            output.push('\n');
            output.push_str(&self.generate_fields(&shape.fields));
        }

        output.push_str(&format!("{i1}}}\n"));
        output
    }

    /// Generates a plain nested class: constructor, then fields.
    #[must_use]
    pub fn generate_data_type(&self, data: &DataIr) -> String {
        let mut output = String::new();
        let i1 = self.indent;

        output.push_str(&format!("{i1}static class {} {{\n", data.name));
        output.push_str(&self.generate_constructor(&data.name, &data.fields));

        if !data.fields.is_empty() {
            output.push('\n');
            output.push_str(&self.generate_fields(&data.fields));
        }

        output.push_str(&format!("{i1}}}\n"));
        output
    }

    /// Generates the constructor assigning every field in declared order.
    fn generate_constructor(&self, name: &str, fields: &[FieldIr]) -> String {
        let mut output = String::new();
        let i2 = self.indent.repeat(2);
        let i3 = self.indent.repeat(3);

        let params = fields
            .iter()
            .map(|f| format!("{} {}", f.type_expr, f.identifier))
            .collect::<Vec<_>>()
            .join(", ");

        output.push_str(&format!("{i2}{name}({params}) {{\n"));
        for field in fields {
            output.push_str(&format!(
                "{i3}this.{} = {};\n",
                field.identifier, field.identifier
            ));
        }
        output.push_str(&format!("{i2}}}\n"));

        output
    }

    /// Generates the `accept` override calling this shape's visitor method.
    fn generate_accept(&self, shape: &ShapeIr) -> String {
        let mut output = String::new();
        let i2 = self.indent.repeat(2);
        let i3 = self.indent.repeat(3);

        output.push_str(&format!("{i2}@Override\n"));
        output.push_str(&format!("{i2}<R> R accept(Visitor<R> visitor) {{\n"));
        output.push_str(&format!(
            "{i3}return visitor.{}(this);\n",
            shape.visit_method
        ));
        output.push_str(&format!("{i2}}}\n"));

        output
    }

    /// Generates the `final` field declarations.
    fn generate_fields(&self, fields: &[FieldIr]) -> String {
        let i2 = self.indent.repeat(2);

        fields
            .iter()
            .map(|f| format!("{i2}final {} {};\n", f.type_expr, f.identifier))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treegen_schema::parse_table;

    fn ir(declarations: &[&str]) -> TableIr {
        TableIr::from_table(&parse_table("Expr", declarations).unwrap())
    }

    #[test]
    fn test_binary_node() {
        let ir = ir(&["Binary : Expr left, Token operator, Expr right"]);
        let out = NodeGenerator::new(&ir, "  ").generate(&ir.shapes[0]);

        let expected = "  static class Binary extends Expr {
    Binary(Expr left, Token operator, Expr right) {
      this.left = left;
      this.operator = operator;
      this.right = right;
    }

    @Override
    <R> R accept(Visitor<R> visitor) {
      return visitor.visitBinaryExpr(this);
    }

    final Expr left;
    final Token operator;
    final Expr right;
  }
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_sequence_field() {
        let ir = ir(&["Call : Expr callee, Token paren, List<Expr> arguments"]);
        let out = NodeGenerator::new(&ir, "  ").generate(&ir.shapes[0]);

        assert!(out.contains("Call(Expr callee, Token paren, List<Expr> arguments) {"));
        assert!(out.contains("final List<Expr> arguments;"));
    }

    #[test]
    fn test_node_without_fields() {
        let ir = ir(&["Nil :"]);
        let out = NodeGenerator::new(&ir, "  ").generate(&ir.shapes[0]);

        assert!(out.contains("    Nil() {\n    }\n"));
        assert!(out.contains("return visitor.visitNilExpr(this);"));
        assert!(!out.contains("final"));
    }

    #[test]
    fn test_data_type() {
        let table = parse_table(
            "Stmt",
            &[
                "Block : List<Stmt> statements",
                "struct TypeNode : Token name, boolean isNone, boolean isArray",
            ],
        )
        .unwrap();
        let ir = TableIr::from_table(&table);
        let out = NodeGenerator::new(&ir, "  ").generate_data_type(&ir.data_types[0]);

        let expected = "  static class TypeNode {
    TypeNode(Token name, boolean isNone, boolean isArray) {
      this.name = name;
      this.isNone = isNone;
      this.isArray = isArray;
    }

    final Token name;
    final boolean isNone;
    final boolean isArray;
  }
";
        assert_eq!(out, expected);
    }
}
