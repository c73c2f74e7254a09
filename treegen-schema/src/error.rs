//! Error types for shape table parsing and validation.

use thiserror::Error;

/// Error type for shape declaration parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Declaration has no `:` between the shape name and its field list.
    #[error("malformed shape declaration '{declaration}': expected '<Name> : <fields>'")]
    MalformedShape {
        /// Offending declaration text.
        declaration: String,
    },

    /// Field entry has no recoverable type/identifier split.
    #[error("malformed field '{field}' in shape '{shape}': expected '<Type> <identifier>'")]
    MalformedField {
        /// Shape the field belongs to.
        shape: String,
        /// Offending field text.
        field: String,
    },

    /// IO error while reading a table file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for shape table validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (shape, data type or field).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Name is not a valid identifier.
    #[error("invalid {kind} name '{name}'")]
    InvalidIdentifier {
        /// Kind of name (base type, shape, data type).
        kind: String,
        /// Invalid name.
        name: String,
    },

    /// Shape or data type reuses the base type name.
    #[error("'{name}' has the same name as its base type")]
    ShadowsBaseType {
        /// Shape or data type name.
        name: String,
    },

    /// Table declares no shapes.
    #[error("shape table for '{base_name}' declares no shapes")]
    EmptyTable {
        /// Base type name.
        base_name: String,
    },
}

impl ParseError {
    /// Creates a malformed shape error.
    pub fn malformed_shape(declaration: impl Into<String>) -> Self {
        Self::MalformedShape {
            declaration: declaration.into(),
        }
    }

    /// Creates a malformed field error.
    pub fn malformed_field(shape: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MalformedField {
            shape: shape.into(),
            field: field.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_field_message() {
        let err = ParseError::malformed_field("Binary", "Expr");
        assert_eq!(
            err.to_string(),
            "malformed field 'Expr' in shape 'Binary': expected '<Type> <identifier>'"
        );
    }

    #[test]
    fn test_duplicate_message() {
        let err = SchemaError::duplicate("shape", "Binary");
        assert_eq!(err.to_string(), "duplicate shape definition: 'Binary'");
    }

    #[test]
    fn test_parse_error_wraps() {
        let err: SchemaError = ParseError::malformed_shape("Binary").into();
        assert!(matches!(err, SchemaError::Parse(ParseError::MalformedShape { .. })));
    }
}
