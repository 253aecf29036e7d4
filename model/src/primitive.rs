//! The xsd primitive vocabulary used by the vim25 schema.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// An xsd built-in simple type.
///
/// Covers the primitive vocabulary the vim25 schema actually uses. The
/// string form (via `strum`) is the unprefixed xsd name, so `"dateTime"`
/// parses to [`Primitive::DateTime`] and `Primitive::Int.to_string()` is
/// `"int"`.
///
/// ## Examples
///
/// Parse from the xsd local name:
///
/// ```
/// use std::str::FromStr;
/// use vimbind_model::Primitive;
///
/// assert_eq!(Primitive::from_str("string").unwrap(), Primitive::String);
/// assert_eq!(Primitive::from_str("dateTime").unwrap(), Primitive::DateTime);
/// assert!(Primitive::from_str("gYearMonth").is_err());
/// ```
///
/// Map to the Rust type used in generated bindings:
///
/// ```
/// use vimbind_model::Primitive;
///
/// assert_eq!(Primitive::Boolean.rust_type(), "bool");
/// assert_eq!(Primitive::Long.rust_type(), "i64");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Primitive {
    /// `xsd:string`
    String,
    /// `xsd:boolean`
    Boolean,
    /// `xsd:byte`
    Byte,
    /// `xsd:short`
    Short,
    /// `xsd:int`
    Int,
    /// `xsd:long`
    Long,
    /// `xsd:float`
    Float,
    /// `xsd:double`
    Double,
    /// `xsd:dateTime` - carried as an ISO-8601 string in generated bindings
    DateTime,
    /// `xsd:base64Binary`
    Base64Binary,
    /// `xsd:anyType` - an opaque XML fragment, carried as a string
    AnyType,
}

impl Primitive {
    /// Returns the Rust type name this primitive maps to in generated code.
    pub fn rust_type(&self) -> &'static str {
        match self {
            Primitive::String => "String",
            Primitive::Boolean => "bool",
            Primitive::Byte => "i8",
            Primitive::Short => "i16",
            Primitive::Int => "i32",
            Primitive::Long => "i64",
            Primitive::Float => "f32",
            Primitive::Double => "f64",
            // No chrono dependency in emitted bindings; dateTime stays textual.
            Primitive::DateTime => "String",
            Primitive::Base64Binary => "Vec<u8>",
            Primitive::AnyType => "String",
        }
    }
}
