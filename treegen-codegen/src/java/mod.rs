//! Java code generation.
//!
//! Emits one `abstract class` per table with a nested `Visitor<R>`
//! interface; every shape becomes a `static class` whose `accept` override
//! calls back into its own visitor method.

pub mod nodes;
pub mod visitor;

pub use nodes::NodeGenerator;
pub use visitor::VisitorGenerator;

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::generator::{Backend, comment_block};
use std::collections::BTreeSet;
use treegen_schema::ir::{DataIr, FieldIr, ShapeIr, TableIr};

/// Java keywords and literals that cannot be used as identifiers.
const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Type names the generated base class already declares: the nested
/// interface and its type parameter.
const TAKEN_TYPE_NAMES: &[&str] = &["Visitor", "R"];

/// `java.util` types that need an import when they appear in a field type.
const UTIL_TYPES: &[&str] = &[
    "ArrayDeque",
    "ArrayList",
    "Collection",
    "Deque",
    "HashMap",
    "HashSet",
    "Iterator",
    "LinkedHashMap",
    "LinkedHashSet",
    "LinkedList",
    "List",
    "Map",
    "Optional",
    "Set",
    "TreeMap",
    "TreeSet",
];

/// Backend emitting Java source.
pub struct JavaBackend<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> JavaBackend<'a> {
    /// Creates a new Java backend.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the sorted imports needed by the table plus configured extras.
    #[must_use]
    pub fn imports(&self, ir: &TableIr) -> BTreeSet<String> {
        let mut imports: BTreeSet<String> = ir
            .field_types()
            .flat_map(|ty| ty.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.')))
            .filter(|token| UTIL_TYPES.contains(token))
            .map(|token| format!("java.util.{token}"))
            .collect();

        imports.extend(self.config.imports.iter().cloned());
        imports
    }

    fn check_name(&self, name: &str, kind: &str) -> Result<(), CodegenError> {
        if RESERVED.contains(&name) {
            return Err(CodegenError::reserved(name, kind, self.language_name()));
        }
        Ok(())
    }

    /// Nested classes share a scope with `Visitor<R>`.
    fn check_type_name(&self, name: &str, kind: &str) -> Result<(), CodegenError> {
        if TAKEN_TYPE_NAMES.contains(&name) {
            return Err(CodegenError::reserved(name, kind, self.language_name()));
        }
        self.check_name(name, kind)
    }

    fn check_fields(&self, fields: &[FieldIr]) -> Result<(), CodegenError> {
        fields
            .iter()
            .try_for_each(|field| self.check_name(&field.identifier, "field"))
    }
}

impl Backend for JavaBackend<'_> {
    fn check(&self, ir: &TableIr) -> Result<(), CodegenError> {
        self.check_type_name(&ir.base_name, "base type")?;
        self.check_name(&ir.visitor_param, "visitor parameter")?;

        for shape in &ir.shapes {
            self.check_type_name(&shape.name, "shape")?;
            self.check_fields(&shape.fields)?;
        }

        for data in &ir.data_types {
            self.check_type_name(&data.name, "data type")?;
            self.check_fields(&data.fields)?;
        }

        Ok(())
    }

    fn preamble(&self, ir: &TableIr) -> String {
        let mut sections = Vec::new();

        if let Some(header) = &self.config.header {
            sections.push(comment_block(header, "//"));
        }

        if let Some(package) = &self.config.package {
            sections.push(format!("package {package};\n"));
        }

        let imports = self.imports(ir);
        if !imports.is_empty() {
            sections.push(
                imports
                    .iter()
                    .map(|import| format!("import {import};\n"))
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
        format!("abstract class {} {{\n", ir.base_name)
    }

    fn visitor(&self, ir: &TableIr) -> Result<String, CodegenError> {
        Ok(VisitorGenerator::new(ir, &self.config.indent).generate())
    }

    fn node(&self, ir: &TableIr, shape: &ShapeIr) -> Result<String, CodegenError> {
        Ok(NodeGenerator::new(ir, &self.config.indent).generate(shape))
    }

    fn data_type(&self, ir: &TableIr, data: &DataIr) -> Result<String, CodegenError> {
        Ok(NodeGenerator::new(ir, &self.config.indent).generate_data_type(data))
    }

    fn base_dispatch(&self, _ir: &TableIr) -> String {
        format!(
            "{}abstract <R> R accept(Visitor<R> visitor);\n",
            self.config.indent
        )
    }

    fn close_base(&self, _ir: &TableIr) -> String {
        "}\n".to_string()
    }

    fn language_name(&self) -> &'static str {
        "Java"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Target;
    use crate::generator::Generator;
    use treegen_schema::parse_table;
    use treegen_schema::tables::{EXPR_SHAPES, STMT_SHAPES};

    fn generate(base: &str, declarations: &[&str], config: &GeneratorConfig) -> String {
        let ir = TableIr::from_table(&parse_table(base, declarations).unwrap());
        Generator::new(&ir, config).generate().unwrap()
    }

    /// Pulls `visitXxx` names out of lines containing `marker`.
    fn visit_names(out: &str, marker: &str) -> Vec<String> {
        out.lines()
            .filter(|line| line.contains(marker))
            .filter_map(|line| {
                let start = line.find("visit")?;
                let rest = &line[start..];
                let end = rest.find('(')?;
                Some(rest[..end].trim_start_matches("visitor.").to_string())
            })
            .collect()
    }

    #[test]
    fn test_complete_document() {
        let config = GeneratorConfig::new(Target::Java);
        let out = generate("Expr", &["Grouping : Expr expression"], &config);

        let expected = "// Generated by treegen. Do not edit.

abstract class Expr {
  interface Visitor<R> {
    R visitGroupingExpr(Grouping expr);
  }

  static class Grouping extends Expr {
    Grouping(Expr expression) {
      this.expression = expression;
    }

    @Override
    <R> R accept(Visitor<R> visitor) {
      return visitor.visitGroupingExpr(this);
    }

    final Expr expression;
  }

  abstract <R> R accept(Visitor<R> visitor);
}
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_dispatch_names_match_visitor() {
        let config = GeneratorConfig::new(Target::Java);
        let out = generate("Expr", EXPR_SHAPES, &config);

        let declared = visit_names(&out, "R visit");
        let called = visit_names(&out, "return visitor.");

        assert_eq!(declared.len(), EXPR_SHAPES.len());
        assert_eq!(declared, called);
        assert_eq!(
            out.matches(" extends Expr {").count(),
            EXPR_SHAPES.len()
        );
    }

    #[test]
    fn test_field_order_preserved() {
        let config = GeneratorConfig::new(Target::Java);
        let out = generate(
            "Expr",
            &["IndexSet : Expr array, Expr index, Expr value, Token bracket"],
            &config,
        );

        assert!(out.contains("IndexSet(Expr array, Expr index, Expr value, Token bracket) {"));

        let order = ["array", "index", "value", "bracket"];
        let assigns: Vec<_> = order
            .iter()
            .map(|f| out.find(&format!("this.{f} = {f};")).unwrap())
            .collect();
        let decls: Vec<_> = out
            .lines()
            .filter_map(|line| line.trim().strip_prefix("final "))
            .filter_map(|decl| decl.trim_end_matches(';').rsplit(' ').next())
            .collect();

        assert!(assigns.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(decls, order);
    }

    #[test]
    fn test_imports_derived_from_types() {
        let config = GeneratorConfig::new(Target::Java)
            .with_header(None)
            .with_package("rain.ast")
            .with_import("rain.lexer.Token");
        let out = generate(
            "Expr",
            &["Table : Map<String, List<Expr>> entries, Token brace"],
            &config,
        );

        assert!(out.starts_with(
            "package rain.ast;\n\nimport java.util.List;\nimport java.util.Map;\nimport rain.lexer.Token;\n\nabstract class Expr {\n"
        ));
    }

    #[test]
    fn test_no_imports_without_containers() {
        let config = GeneratorConfig::new(Target::Java).with_header(None);
        let out = generate("Expr", &["Variable : Token name"], &config);

        assert!(out.starts_with("abstract class Expr {\n"));
    }

    #[test]
    fn test_stmt_table() {
        let config = GeneratorConfig::new(Target::Java);
        let out = generate("Stmt", STMT_SHAPES, &config);

        assert!(out.contains("R visitVarDeclStmt(VarDecl stmt);"));
        assert!(out.contains("Function(TypeNode returnType, Token name, List<Param> params, List<Stmt> body) {"));
        assert!(out.contains("final Stmt elseBranch;"));

        // The data types its fields refer to are nested in the same class,
        // outside the visitor.
        assert!(out.contains("  static class Param {\n    Param(TypeNode type, Token name) {\n"));
        assert!(out.contains("  static class TypeNode {\n"));
        assert!(out.contains("    final boolean isArray;\n"));
        assert!(!out.contains("visitParamStmt"));
        assert_eq!(out.matches(" extends Stmt {").count(), 11);
    }

    #[test]
    fn test_reserved_field_rejected() {
        let ir = TableIr::from_table(&parse_table("Expr", &["Bad : Expr class"]).unwrap());
        let config = GeneratorConfig::new(Target::Java);
        let err = Generator::new(&ir, &config).generate().unwrap_err();

        assert!(matches!(
            err,
            CodegenError::ReservedIdentifier { ref name, ref kind, .. } if name == "class" && kind == "field"
        ));
    }

    #[test]
    fn test_taken_type_names_rejected() {
        let config = GeneratorConfig::new(Target::Java);
        let cases: [(&str, &[&str], &str); 4] = [
            ("Expr", &["Visitor : Token name"], "Visitor"),
            ("Expr", &["R : Token name"], "R"),
            ("Expr", &["This : Token keyword", "struct R : Token name"], "R"),
            ("R", &["This : Token keyword"], "R"),
        ];

        for (base, declarations, taken) in cases {
            let ir = TableIr::from_table(&parse_table(base, declarations).unwrap());
            let err = Generator::new(&ir, &config).generate().unwrap_err();
            assert!(matches!(
                err,
                CodegenError::ReservedIdentifier { ref name, .. } if name == taken
            ));
        }
    }

    #[test]
    fn test_reserved_data_field_rejected() {
        let ir = TableIr::from_table(
            &parse_table("Stmt", &["Block : List<Stmt> statements", "struct Param : Token class"])
                .unwrap(),
        );
        let config = GeneratorConfig::new(Target::Java);

        assert!(matches!(
            Generator::new(&ir, &config).generate(),
            Err(CodegenError::ReservedIdentifier { ref name, .. }) if name == "class"
        ));
    }
}
