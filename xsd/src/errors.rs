//! Error types for the XSD loader.

use thiserror::Error;

/// Errors that can occur while loading or parsing an XSD document.
#[derive(Debug, Error)]
pub enum XsdError {
    /// Failed to read the schema file.
    #[error("Failed to read schema file '{path}': {source}")]
    ReadError {
        /// The file that could not be read.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The XML reader reported a syntax error.
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute was present but could not be decoded.
    #[error("Malformed attribute on <{element}> at position {position}: {message}")]
    MalformedAttribute {
        /// The element carrying the attribute.
        element: String,
        /// Byte offset into the document.
        position: u64,
        /// Decoder message.
        message: String,
    },

    /// A required attribute is missing.
    #[error("Element <{element}> at position {position} is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// The element missing the attribute.
        element: String,
        /// The required attribute name.
        attribute: String,
        /// Byte offset into the document.
        position: u64,
    },

    /// An attribute carried a value outside its legal vocabulary.
    #[error("Invalid value '{value}' for attribute '{attribute}' on <{element}>")]
    InvalidAttribute {
        /// The element carrying the attribute.
        element: String,
        /// The attribute name.
        attribute: String,
        /// The offending value.
        value: String,
    },

    /// The document uses a schema construct the loader does not support.
    ///
    /// The loader never degrades a type's semantics: a declaration either
    /// parses completely or is rejected with the offending construct named.
    #[error("Unsupported schema construct <{construct}> in type '{type_name}' at position {position}")]
    UnsupportedConstruct {
        /// The unsupported element name.
        construct: String,
        /// The type declaration it appeared in ("<top-level>" outside one).
        type_name: String,
        /// Byte offset into the document.
        position: u64,
    },

    /// A simple-type restriction declared no enumeration literals.
    #[error("Enumeration type '{name}' declares no literals")]
    EmptyEnumeration {
        /// The empty enumeration's name.
        name: String,
    },
}
