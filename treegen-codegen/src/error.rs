//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Shape table validation error.
    #[error("shape table error: {0}")]
    Schema(#[from] treegen_schema::SchemaError),

    /// Output destination could not be opened or written.
    #[error("failed to write output '{}': {source}", path.display())]
    OutputWrite {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Name that cannot be emitted in the target language.
    #[error("'{name}' is reserved in {target} and cannot be used as a {kind} name")]
    ReservedIdentifier {
        /// Offending name.
        name: String,
        /// Kind of name (base type, shape, data type, field, visitor parameter).
        kind: String,
        /// Target language.
        target: String,
    },

    /// Two shapes whose dispatch methods render to the same name.
    #[error("shapes '{first}' and '{second}' both generate the {target} method '{name}'")]
    NameCollision {
        /// Rendered method name.
        name: String,
        /// Shape declared first.
        first: String,
        /// Shape declared second.
        second: String,
        /// Target language.
        target: String,
    },

    /// Field type that is not a valid type expression for the target.
    #[error("invalid type '{type_expr}' for field '{shape}.{field}'")]
    InvalidType {
        /// Shape name.
        shape: String,
        /// Field identifier.
        field: String,
        /// Type expression.
        type_expr: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a reserved identifier error.
    pub fn reserved(
        name: impl Into<String>,
        kind: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::ReservedIdentifier {
            name: name.into(),
            kind: kind.into(),
            target: target.into(),
        }
    }

    /// Creates an output write error for the given destination.
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
