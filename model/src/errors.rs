//! Error types for schema model resolution.

use thiserror::Error;

/// Errors raised while resolving references within a schema model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A type name was looked up but is not declared in the schema.
    #[error("Type '{name}' is not declared in schema '{schema}'")]
    UnknownType {
        /// The missing type name.
        name: String,
        /// The schema the lookup ran against.
        schema: String,
    },

    /// A complex type names a base that is not declared in the schema.
    #[error("Type '{ty}' extends unknown base type '{base}'")]
    UnknownBase {
        /// The extending type.
        ty: String,
        /// The undeclared base name.
        base: String,
    },

    /// A complex type names an enumeration or primitive as its base.
    ///
    /// Extension bases must themselves be complex types; the vim25 schema
    /// never extends a simple type.
    #[error("Type '{ty}' extends '{base}', which is not a complex type")]
    InvalidBase {
        /// The extending type.
        ty: String,
        /// The non-complex base name.
        base: String,
    },

    /// Following a base chain revisited a type already on the chain.
    #[error("Base chain of type '{ty}' forms a cycle")]
    BaseCycle {
        /// The type whose chain loops.
        ty: String,
    },
}
