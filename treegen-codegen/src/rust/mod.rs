//! Rust code generation.
//!
//! The base type becomes an `enum` with one variant per shape. Dispatch is
//! a single `match` in the enum's `accept`; each shape struct also exposes
//! its own `accept` for callers holding a concrete node.

pub mod nodes;
pub mod types;
pub mod visitor;

pub use nodes::NodeGenerator;
pub use visitor::VisitorGenerator;

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::{Backend, comment_block};
use nodes::derive_attr;
use std::collections::HashMap;
use treegen_schema::ir::{DataIr, FieldIr, ShapeIr, TableIr};
use visitor::visitor_trait_name;

/// Method names every node struct already defines.
const NODE_METHODS: &[&str] = &["new", "accept"];

/// Method names every data struct already defines.
const DATA_METHODS: &[&str] = &["new"];

/// Rejects shapes whose snake_case dispatch methods coincide
/// (`ABC` and `Abc` both give `visit_abc_expr`).
fn check_visit_methods(ir: &TableIr) -> Result<(), CodegenError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for shape in &ir.shapes {
        let method = shape.visit_method_snake();
        if let Some(first) = seen.get(&method) {
            return Err(CodegenError::NameCollision {
                name: method,
                first: (*first).to_string(),
                second: shape.name.clone(),
                target: "Rust".to_string(),
            });
        }
        seen.insert(method, &shape.name);
    }

    Ok(())
}

/// Backend emitting Rust source.
pub struct RustBackend<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> RustBackend<'a> {
    /// Creates a new Rust backend.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    fn check_declared_type(
        &self,
        name: &str,
        kind: &str,
        trait_name: &str,
    ) -> Result<(), CodegenError> {
        if name == trait_name {
            return Err(CodegenError::reserved(name, kind, self.language_name()));
        }
        types::check_type_name(name, kind)
    }

    fn check_fields(
        &self,
        owner: &str,
        fields: &[FieldIr],
        methods: &[&str],
    ) -> Result<(), CodegenError> {
        for field in fields {
            if methods.contains(&field.identifier.as_str()) {
                return Err(CodegenError::reserved(
                    field.identifier.as_str(),
                    "field",
                    self.language_name(),
                ));
            }
            types::rust_ident(&field.identifier, "field")?;
            types::check_field_type(owner, field)?;
        }
        Ok(())
    }
}

impl Backend for RustBackend<'_> {
    fn check(&self, ir: &TableIr) -> Result<(), CodegenError> {
        types::check_type_name(&ir.base_name, "base type")?;
        types::rust_ident(&ir.visitor_param, "visitor parameter")?;
        let trait_name = visitor_trait_name(&ir.base_name);

        for shape in &ir.shapes {
            self.check_declared_type(&shape.name, "shape", &trait_name)?;
            self.check_fields(&shape.name, &shape.fields, NODE_METHODS)?;
        }

        for data in &ir.data_types {
            self.check_declared_type(&data.name, "data type", &trait_name)?;
            self.check_fields(&data.name, &data.fields, DATA_METHODS)?;
        }

        check_visit_methods(ir)
    }

    fn preamble(&self, _ir: &TableIr) -> String {
        let mut sections = Vec::new();

        if let Some(header) = &self.config.header {
            sections.push(comment_block(header, "//"));
        }

        if !self.config.imports.is_empty() {
            sections.push(
                self.config
                    .imports
                    .iter()
                    .map(|import| format!("use {import};\n"))
                    .collect(),
            );
        }

        let mut output = sections.join("\n");
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    fn open_base(&self, ir: &TableIr) -> String {
        let mut output = String::new();
        let i1 = &self.config.indent;

        output.push_str(&format!("/// Any `{}` node.\n", ir.base_name));
        output.push_str(&derive_attr(&self.config.derives));
        output.push_str(&format!("pub enum {} {{\n", ir.base_name));
        for shape in &ir.shapes {
            output.push_str(&format!("{i1}{}({}),\n", shape.name, shape.name));
        }
        output.push_str("}\n\n");

        output
    }

    fn visitor(&self, ir: &TableIr) -> Result<String, CodegenError> {
        VisitorGenerator::new(ir, &self.config.indent).generate()
    }

    fn node(&self, ir: &TableIr, shape: &ShapeIr) -> Result<String, CodegenError> {
        NodeGenerator::new(ir, &self.config.indent, &self.config.derives).generate(shape)
    }

    fn data_type(&self, ir: &TableIr, data: &DataIr) -> Result<String, CodegenError> {
        NodeGenerator::new(ir, &self.config.indent, &self.config.derives).generate_data_type(data)
    }

    fn base_dispatch(&self, ir: &TableIr) -> String {
        let mut output = String::new();
        let i1 = &self.config.indent;
        let i2 = i1.repeat(2);
        let i3 = i1.repeat(3);
        let base = &ir.base_name;

        output.push_str(&format!("impl {base} {{\n"));
        output.push_str(&format!(
            "{i1}pub fn accept<R>(&self, visitor: &mut dyn {}<R>) -> R {{\n",
            visitor_trait_name(base)
        ));
        output.push_str(&format!("{i2}match self {{\n"));
        for shape in &ir.shapes {
            output.push_str(&format!(
                "{i3}{base}::{}(node) => visitor.{}(node),\n",
                shape.name,
                shape.visit_method_snake()
            ));
        }
        output.push_str(&format!("{i2}}}\n"));
        output.push_str(&format!("{i1}}}\n"));

        output
    }

    fn close_base(&self, _ir: &TableIr) -> String {
        "}\n".to_string()
    }

    fn language_name(&self) -> &'static str {
        "Rust"
    }
}
