//! Rust node struct generation.

use super::types::{field_type, rust_ident};
use super::visitor::visitor_trait_name;
use crate::error::CodegenError;
use treegen_schema::ir::{DataIr, FieldIr, ShapeIr, TableIr};

/// Returns the `#[derive(...)]` line for `derives`, or nothing if empty.
#[must_use]
pub fn derive_attr(derives: &[String]) -> String {
    if derives.is_empty() {
        String::new()
    } else {
        format!("#[derive({})]\n", derives.join(", "))
    }
}

/// Renders every field identifier, raw where needed.
fn field_idents(fields: &[FieldIr]) -> Result<Vec<String>, CodegenError> {
    fields
        .iter()
        .map(|f| rust_ident(&f.identifier, "field"))
        .collect()
}

/// Generator for the struct, constructor and accessors of each shape.
pub struct NodeGenerator<'a> {
    ir: &'a TableIr,
    indent: &'a str,
    derives: &'a [String],
}

impl<'a> NodeGenerator<'a> {
    /// Creates a new node generator.
    #[must_use]
    pub fn new(ir: &'a TableIr, indent: &'a str, derives: &'a [String]) -> Self {
        Self {
            ir,
            indent,
            derives,
        }
    }

    /// Generates the definition of one shape.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field identifier has no Rust form.
    pub fn generate(&self, shape: &ShapeIr) -> Result<String, CodegenError> {
        let idents = field_idents(&shape.fields)?;

        let mut output = String::new();
        output.push_str(&self.generate_struct(
            &format!("`{}` node.", shape.name),
            &shape.name,
            &shape.fields,
            &idents,
        ));
        output.push('\n');
        output.push_str(&format!("impl {} {{\n", shape.name));
        output.push_str(&self.generate_constructor(
            &format!("Creates a new `{}` node.", shape.name),
            &shape.fields,
            &idents,
        ));
        output.push('\n');
        output.push_str(&self.generate_accept(shape));
        output.push_str(&self.generate_accessors(&shape.fields, &idents));
        output.push_str("}\n\n");
        output.push_str(&self.generate_from(shape));

        Ok(output)
    }

    /// Generates a data type: struct, constructor and accessors only.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field identifier has no Rust form.
    pub fn generate_data_type(&self, data: &DataIr) -> Result<String, CodegenError> {
        let idents = field_idents(&data.fields)?;

        let mut output = String::new();
        output.push_str(&self.generate_struct(
            &format!("`{}` data.", data.name),
            &data.name,
            &data.fields,
            &idents,
        ));
        output.push('\n');
        output.push_str(&format!("impl {} {{\n", data.name));
        output.push_str(&self.generate_constructor(
            &format!("Creates a new `{}`.", data.name),
            &data.fields,
            &idents,
        ));
        output.push_str(&self.generate_accessors(&data.fields, &idents));
        output.push_str("}\n");

        Ok(output)
    }

    /// Generates the struct with private fields in declared order.
    fn generate_struct(
        &self,
        doc: &str,
        name: &str,
        fields: &[FieldIr],
        idents: &[String],
    ) -> String {
        let mut output = String::new();
        let i1 = self.indent;

        output.push_str(&format!("/// {doc}\n"));
        output.push_str(&derive_attr(self.derives));
        output.push_str(&format!("pub struct {name} {{\n"));
        for (field, ident) in fields.iter().zip(idents) {
            output.push_str(&format!(
                "{i1}{ident}: {},\n",
                field_type(field, &self.ir.base_name)
            ));
        }
        output.push_str("}\n");

        output
    }

    /// Generates `new`, taking every field in declared order.
    fn generate_constructor(&self, doc: &str, fields: &[FieldIr], idents: &[String]) -> String {
        let mut output = String::new();
        let i1 = self.indent;
        let i2 = self.indent.repeat(2);
        let i3 = self.indent.repeat(3);

        let params = fields
            .iter()
            .zip(idents)
            .map(|(f, ident)| format!("{ident}: {}", f.type_expr))
            .collect::<Vec<_>>()
            .join(", ");

        output.push_str(&format!("{i1}/// {doc}\n"));
        output.push_str(&format!("{i1}pub fn new({params}) -> Self {{\n"));
        output.push_str(&format!("{i2}Self {{\n"));
        for (field, ident) in fields.iter().zip(idents) {
            if field.is_base_ref {
                output.push_str(&format!("{i3}{ident}: Box::new({ident}),\n"));
            } else {
                output.push_str(&format!("{i3}{ident},\n"));
            }
        }
        output.push_str(&format!("{i2}}}\n"));
        output.push_str(&format!("{i1}}}\n"));

        output
    }

    /// Generates `accept`, calling this shape's visitor method.
    fn generate_accept(&self, shape: &ShapeIr) -> String {
        let mut output = String::new();
        let i1 = self.indent;
        let i2 = self.indent.repeat(2);

        output.push_str(&format!(
            "{i1}pub fn accept<R>(&self, visitor: &mut dyn {}<R>) -> R {{\n",
            visitor_trait_name(&self.ir.base_name)
        ));
        output.push_str(&format!(
            "{i2}visitor.{}(self)\n",
            shape.visit_method_snake()
        ));
        output.push_str(&format!("{i1}}}\n"));

        output
    }

    /// Generates one read-only accessor per field.
    fn generate_accessors(&self, fields: &[FieldIr], idents: &[String]) -> String {
        let mut output = String::new();
        let i1 = self.indent;
        let i2 = self.indent.repeat(2);

        for (field, ident) in fields.iter().zip(idents) {
            output.push('\n');
            output.push_str(&format!(
                "{i1}pub fn {ident}(&self) -> &{} {{\n",
                field.type_expr
            ));
            output.push_str(&format!("{i2}&self.{ident}\n"));
            output.push_str(&format!("{i1}}}\n"));
        }

        output
    }

    /// Generates the `From<Shape>` conversion into the base enum.
    fn generate_from(&self, shape: &ShapeIr) -> String {
        let mut output = String::new();
        let i1 = self.indent;
        let i2 = self.indent.repeat(2);
        let base = &self.ir.base_name;

        output.push_str(&format!("impl From<{}> for {base} {{\n", shape.name));
        output.push_str(&format!("{i1}fn from(node: {}) -> Self {{\n", shape.name));
        output.push_str(&format!("{i2}{base}::{}(node)\n", shape.name));
        output.push_str(&format!("{i1}}}\n"));
        output.push_str("}\n");

        output
    }
}
