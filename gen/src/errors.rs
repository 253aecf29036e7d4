//! Error types for the vimbind generator.

use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to load or parse a schema document
    #[error("Failed to load schema: {0}")]
    Schema(#[from] vimbind_xsd::XsdError),

    /// The schema model is internally inconsistent
    #[error("Schema model error: {0}")]
    Model(#[from] vimbind_model::ModelError),

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Two declarations in the same schema share a type name.
    #[error("Duplicate type name '{name}' in schema '{module}'")]
    DuplicateTypeName {
        /// The colliding type name.
        name: String,
        /// The schema module it appears in.
        module: String,
    },

    /// An enumeration declares no literals.
    ///
    /// An empty enumeration would generate an uninhabited Rust enum whose
    /// `from_value` can never succeed, so it is rejected up front.
    #[error("Enumeration '{name}' declares no literals")]
    EmptyEnum {
        /// The empty enumeration's name.
        name: String,
    },

    /// An enumeration declares the same wire literal twice.
    #[error("Enumeration '{enum_name}' declares literal '{literal}' more than once")]
    DuplicateLiteral {
        /// The enumeration containing the duplicate.
        enum_name: String,
        /// The repeated literal.
        literal: String,
    },

    /// Two distinct wire literals map to the same Rust variant name.
    ///
    /// This occurs when literals differ only in separators or case that the
    /// variant derivation erases (e.g. "powered-off" and "poweredOff" both
    /// become `PoweredOff`).
    #[error(
        "Enumeration '{enum_name}': literals '{first}' and '{second}' both map to variant '{variant}'. Wire literals must stay distinguishable after variant naming"
    )]
    VariantCollision {
        /// The enumeration containing the collision.
        enum_name: String,
        /// The derived variant name both literals map to.
        variant: String,
        /// The literal that claimed the variant first.
        first: String,
        /// The literal that collided with it.
        second: String,
    },

    /// A schema type name is not usable as a Rust identifier.
    #[error("Type name '{name}' in schema '{module}' is not a legal Rust identifier")]
    InvalidTypeName {
        /// The offending type name.
        name: String,
        /// The schema module it appears in.
        module: String,
    },

    /// A literal derives a variant name that is not a legal identifier.
    ///
    /// This occurs when a literal consists only of separators (the derived
    /// name is empty) or carries characters the derivation never touches.
    #[error(
        "Enumeration '{enum_name}': literal '{literal}' derives variant '{variant}', which is not a legal Rust identifier"
    )]
    InvalidVariantName {
        /// The enumeration containing the literal.
        enum_name: String,
        /// The offending wire literal.
        literal: String,
        /// The illegal derived variant name.
        variant: String,
    },

    /// A field name derives an identifier that is not legal Rust.
    #[error(
        "Type '{type_name}' field '{field}' derives identifier '{ident}', which is not a legal Rust identifier"
    )]
    InvalidFieldIdent {
        /// The record containing the field.
        type_name: String,
        /// The offending wire field name.
        field: String,
        /// The illegal derived identifier.
        ident: String,
    },

    /// Two fields of one record map to the same Rust identifier.
    ///
    /// Covers both a field redeclared along the extension chain and two
    /// distinct wire names that differ only in separators the identifier
    /// derivation erases (e.g. "fault-cause" and "fault.cause").
    #[error(
        "Type '{type_name}': fields '{first}' and '{second}' both map to identifier '{ident}'. Field names must stay distinguishable across the extension chain"
    )]
    FieldCollision {
        /// The record containing the collision.
        type_name: String,
        /// The derived identifier both fields map to.
        ident: String,
        /// The field that claimed the identifier first.
        first: String,
        /// The field that collided with it.
        second: String,
    },

    /// A field references a type the schema never declares.
    #[error("Type '{type_name}' field '{field}' references undeclared type '{referenced}'")]
    UnknownTypeRef {
        /// The record containing the field.
        type_name: String,
        /// The field with the dangling reference.
        field: String,
        /// The missing type name.
        referenced: String,
    },

    /// A declared type name collides with a generated fault wrapper name.
    ///
    /// Fault wrappers are named `{fault}Fault`; a schema type carrying that
    /// exact name would produce two items with the same identifier.
    #[error(
        "Fault '{fault}' generates wrapper '{wrapper}', which collides with a declared schema type. Suggestion: rename the declared type '{wrapper}'"
    )]
    FaultWrapperCollision {
        /// The fault whose wrapper collides.
        fault: String,
        /// The generated wrapper name.
        wrapper: String,
    },
}
