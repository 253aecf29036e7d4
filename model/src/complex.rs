//! Complex (record) type definitions.
//!
//! A complex type is a named, ordered collection of typed fields with an
//! optional base type. Schema `extension` maps to the `base` reference;
//! the full field set of a type is resolved by flattening its base chain
//! (see [`crate::SchemaModel::resolved_fields`]).

use std::str::FromStr;

use crate::primitive::Primitive;

/// Field cardinality, derived from `minOccurs`/`maxOccurs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrence {
    /// `minOccurs >= 1`, `maxOccurs = 1` - always present on the wire.
    Required,
    /// `minOccurs = 0`, `maxOccurs = 1` - absence is representable and
    /// distinct from every present value.
    Optional,
    /// `maxOccurs > 1` or `unbounded` - zero or more occurrences.
    Repeated,
}

/// The type of a field: an xsd primitive or a reference to a named
/// schema type (complex or enumeration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// An xsd built-in type.
    Primitive(Primitive),
    /// A reference to another type declared in the schema.
    Named(String),
}

impl FieldType {
    /// Resolves a (possibly prefixed) schema type name.
    ///
    /// Namespace prefixes are stripped; names that match the xsd primitive
    /// vocabulary become [`FieldType::Primitive`], everything else a
    /// [`FieldType::Named`] reference.
    ///
    /// ## Examples
    ///
    /// ```
    /// use vimbind_model::{FieldType, Primitive};
    ///
    /// assert_eq!(FieldType::from_xsd("xsd:string"), FieldType::Primitive(Primitive::String));
    /// assert_eq!(FieldType::from_xsd("boolean"), FieldType::Primitive(Primitive::Boolean));
    /// assert_eq!(
    ///     FieldType::from_xsd("vim25:ManagedObjectReference"),
    ///     FieldType::Named("ManagedObjectReference".to_string())
    /// );
    /// ```
    pub fn from_xsd(name: &str) -> Self {
        let local = match name.split_once(':') {
            Some((_, local)) => local,
            None => name,
        };
        match Primitive::from_str(local) {
            Ok(prim) => FieldType::Primitive(prim),
            Err(_) => FieldType::Named(local.to_string()),
        }
    }
}

/// A single field of a complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The schema element name, exactly as it appears on the wire
    /// (e.g. `"numCPUs"`, `"type"`).
    pub name: String,
    /// The field's type.
    pub ty: FieldType,
    /// Required, optional, or repeated.
    pub occurrence: Occurrence,
    /// Documentation captured from `xsd:annotation`, if any.
    pub doc: Option<String>,
}

impl Field {
    /// Creates a required field (`minOccurs = 1`).
    pub fn required(name: impl Into<String>, ty: &str) -> Self {
        Self::new(name, ty, Occurrence::Required)
    }

    /// Creates an optional field (`minOccurs = 0`).
    pub fn optional(name: impl Into<String>, ty: &str) -> Self {
        Self::new(name, ty, Occurrence::Optional)
    }

    /// Creates a repeated field (`maxOccurs = unbounded`).
    pub fn repeated(name: impl Into<String>, ty: &str) -> Self {
        Self::new(name, ty, Occurrence::Repeated)
    }

    fn new(name: impl Into<String>, ty: &str, occurrence: Occurrence) -> Self {
        Self {
            name: name.into(),
            ty: FieldType::from_xsd(ty),
            occurrence,
            doc: None,
        }
    }

    /// Attaches documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A structured record type declared by the schema.
///
/// ## Examples
///
/// ```
/// use vimbind_model::{ComplexType, Field};
///
/// let spec = ComplexType::new("VirtualMachineConfigSpec")
///     .extends("DynamicData")
///     .with_field(Field::optional("name", "xsd:string"))
///     .with_field(Field::optional("numCPUs", "xsd:int"))
///     .with_field(Field::repeated("deviceChange", "vim25:VirtualDeviceConfigSpec"));
///
/// assert_eq!(spec.base.as_deref(), Some("DynamicData"));
/// assert_eq!(spec.fields.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    /// The schema type name.
    pub name: String,
    /// Documentation captured from `xsd:annotation`, if any.
    pub doc: Option<String>,
    /// The base type this one extends, if any (single inheritance).
    pub base: Option<String>,
    /// Locally declared fields, in schema order. Inherited fields are
    /// resolved separately via the base chain.
    pub fields: Vec<Field>,
}

impl ComplexType {
    /// Creates a complex type with no base and no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            base: None,
            fields: Vec::new(),
        }
    }

    /// Sets the base type (schema `extension`). A namespace prefix on the
    /// base name is stripped.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        let local = match base.split_once(':') {
            Some((_, local)) => local.to_string(),
            None => base,
        };
        self.base = Some(local);
        self
    }

    /// Appends a locally declared field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Attaches documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xsd_strips_any_prefix() {
        assert_eq!(
            FieldType::from_xsd("xs:int"),
            FieldType::Primitive(Primitive::Int)
        );
        assert_eq!(
            FieldType::from_xsd("tns:HostConnectSpec"),
            FieldType::Named("HostConnectSpec".to_string())
        );
    }

    #[test]
    fn from_xsd_primitive_names_are_case_sensitive() {
        // "DateTime" is not the xsd name; it resolves to a named reference.
        assert_eq!(
            FieldType::from_xsd("DateTime"),
            FieldType::Named("DateTime".to_string())
        );
        assert_eq!(
            FieldType::from_xsd("dateTime"),
            FieldType::Primitive(Primitive::DateTime)
        );
    }

    #[test]
    fn extends_strips_prefix() {
        let ty = ComplexType::new("VirtualMachine").extends("vim25:ManagedEntity");
        assert_eq!(ty.base.as_deref(), Some("ManagedEntity"));
    }

    #[test]
    fn field_order_is_preserved() {
        let ty = ComplexType::new("HostConnectSpec")
            .with_field(Field::optional("hostName", "xsd:string"))
            .with_field(Field::optional("port", "xsd:int"))
            .with_field(Field::required("force", "xsd:boolean"));

        let names: Vec<_> = ty.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["hostName", "port", "force"]);
        assert_eq!(ty.fields[2].occurrence, Occurrence::Required);
    }

    #[test]
    fn constructors_set_occurrence() {
        assert_eq!(
            Field::required("a", "xsd:string").occurrence,
            Occurrence::Required
        );
        assert_eq!(
            Field::optional("b", "xsd:string").occurrence,
            Occurrence::Optional
        );
        assert_eq!(
            Field::repeated("c", "xsd:string").occurrence,
            Occurrence::Repeated
        );
    }
}
