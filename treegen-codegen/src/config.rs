//! Generator configuration.

/// Default header comment written at the top of every document.
pub const DEFAULT_HEADER: &str = "Generated by treegen. Do not edit.";

/// Target language for emitted definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// Abstract base class with a nested visitor interface and static subclasses.
    #[default]
    Java,
    /// Enum over per-shape structs with a visitor trait and `match` dispatch.
    Rust,
}

impl Target {
    /// Parses a target from its name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Some(Self::Java),
            "rust" | "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Returns the conventional indentation unit for the target.
    #[must_use]
    pub const fn default_indent(self) -> &'static str {
        match self {
            Self::Java => "  ",
            Self::Rust => "    ",
        }
    }

    /// Returns the output file name for a base type (`Expr.java`, `expr.rs`).
    #[must_use]
    pub fn file_name(self, base_name: &str) -> String {
        match self {
            Self::Java => format!("{base_name}.java"),
            Self::Rust => format!("{}.rs", base_name.to_lowercase()),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Java => write!(f, "Java"),
            Self::Rust => write!(f, "Rust"),
        }
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Target language.
    pub target: Target,
    /// Indentation unit.
    pub indent: String,
    /// Java package declaration.
    pub package: Option<String>,
    /// Extra imports emitted after the derived ones.
    pub imports: Vec<String>,
    /// Header comment, without comment markers.
    pub header: Option<String>,
    /// Derives applied to every generated Rust type.
    pub derives: Vec<String>,
}

impl GeneratorConfig {
    /// Creates a configuration with the defaults for `target`.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self {
            target,
            indent: target.default_indent().to_string(),
            package: None,
            imports: Vec::new(),
            header: Some(DEFAULT_HEADER.to_string()),
            derives: vec!["Debug".to_string(), "Clone".to_string()],
        }
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the Java package.
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Adds an extra import.
    #[must_use]
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Sets or clears the header comment.
    #[must_use]
    pub fn with_header(mut self, header: Option<String>) -> Self {
        self.header = header;
        self
    }

    /// Replaces the Rust derive list.
    #[must_use]
    pub fn with_derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Target::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parse() {
        assert_eq!(Target::parse("java"), Some(Target::Java));
        assert_eq!(Target::parse("Rust"), Some(Target::Rust));
        assert_eq!(Target::parse("rs"), Some(Target::Rust));
        assert_eq!(Target::parse("python"), None);
    }

    #[test]
    fn test_target_file_name() {
        assert_eq!(Target::Java.file_name("Expr"), "Expr.java");
        assert_eq!(Target::Rust.file_name("Expr"), "expr.rs");
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.target, Target::Java);
        assert_eq!(config.indent, "  ");
        assert_eq!(config.header.as_deref(), Some(DEFAULT_HEADER));

        let config = GeneratorConfig::new(Target::Rust);
        assert_eq!(config.indent, "    ");
        assert_eq!(config.derives, ["Debug", "Clone"]);
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new(Target::Java)
            .with_indent("\t")
            .with_package("rain.ast")
            .with_import("rain.lexer.Token")
            .with_header(None)
            .with_derives(["Debug"]);

        assert_eq!(config.indent, "\t");
        assert_eq!(config.package.as_deref(), Some("rain.ast"));
        assert_eq!(config.imports, ["rain.lexer.Token"]);
        assert!(config.header.is_none());
        assert_eq!(config.derives, ["Debug"]);
    }
}
