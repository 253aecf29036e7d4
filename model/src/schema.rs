//! The top-level schema model and base-chain resolution.

use crate::complex::{ComplexType, Field};
use crate::enums::EnumType;
use crate::errors::ModelError;

/// A single type definition within a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDef {
    /// A closed string enumeration (`xsd:simpleType` restriction).
    Enum(EnumType),
    /// A structured record type (`xsd:complexType`).
    Complex(ComplexType),
}

impl TypeDef {
    /// Returns the declared type name.
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Enum(e) => &e.name,
            TypeDef::Complex(c) => &c.name,
        }
    }
}

/// A complete parsed schema: a module name, a target namespace, and an
/// ordered list of type definitions.
///
/// Definition order is schema insertion order and is preserved through
/// generation.
///
/// ## Examples
///
/// ```
/// use vimbind_model::{ComplexType, Field, SchemaModel, TypeDef};
///
/// let mut schema = SchemaModel::new("vim25", "urn:vim25");
/// schema.push(TypeDef::Complex(
///     ComplexType::new("DynamicData"),
/// ));
/// schema.push(TypeDef::Complex(
///     ComplexType::new("ManagedEntity")
///         .extends("DynamicData")
///         .with_field(Field::required("name", "xsd:string")),
/// ));
///
/// let fields = schema.resolved_fields("ManagedEntity").unwrap();
/// assert_eq!(fields.len(), 1);
/// assert!(!schema.is_fault("ManagedEntity", "MethodFault").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaModel {
    /// Module name for the generated output file (e.g. `"vim25"`).
    pub module: String,
    /// The schema's target namespace (e.g. `"urn:vim25"`).
    pub target_namespace: String,
    /// All type definitions, in schema order.
    pub types: Vec<TypeDef>,
}

impl SchemaModel {
    /// Creates an empty schema model.
    pub fn new(module: impl Into<String>, target_namespace: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            target_namespace: target_namespace.into(),
            types: Vec::new(),
        }
    }

    /// Appends a type definition, preserving insertion order.
    pub fn push(&mut self, def: TypeDef) {
        self.types.push(def);
    }

    /// Looks up a type definition by name.
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// Looks up a complex type by name.
    pub fn get_complex(&self, name: &str) -> Option<&ComplexType> {
        match self.get(name) {
            Some(TypeDef::Complex(c)) => Some(c),
            _ => None,
        }
    }

    /// Returns the base chain of a complex type, outermost base first.
    ///
    /// For `VirtualMachine extends ManagedEntity extends DynamicData` the
    /// chain of `"VirtualMachine"` is `["DynamicData", "ManagedEntity"]`.
    ///
    /// ## Errors
    ///
    /// - [`ModelError::UnknownType`] if `name` is not declared
    /// - [`ModelError::UnknownBase`] if a base reference is not declared
    /// - [`ModelError::InvalidBase`] if a base is not a complex type
    /// - [`ModelError::BaseCycle`] if the chain revisits a type
    pub fn base_chain(&self, name: &str) -> Result<Vec<&ComplexType>, ModelError> {
        let start = match self.get(name) {
            Some(TypeDef::Complex(c)) => c,
            Some(TypeDef::Enum(_)) => return Ok(Vec::new()),
            None => {
                return Err(ModelError::UnknownType {
                    name: name.to_string(),
                    schema: self.module.clone(),
                });
            }
        };

        let mut chain: Vec<&ComplexType> = Vec::new();
        let mut seen: Vec<&str> = vec![name];
        let mut current = start;

        while let Some(base_name) = current.base.as_deref() {
            if seen.contains(&base_name) {
                return Err(ModelError::BaseCycle {
                    ty: name.to_string(),
                });
            }
            let base = match self.get(base_name) {
                Some(TypeDef::Complex(c)) => c,
                Some(TypeDef::Enum(_)) => {
                    return Err(ModelError::InvalidBase {
                        ty: current.name.clone(),
                        base: base_name.to_string(),
                    });
                }
                None => {
                    return Err(ModelError::UnknownBase {
                        ty: current.name.clone(),
                        base: base_name.to_string(),
                    });
                }
            };
            seen.push(base_name);
            chain.push(base);
            current = base;
        }

        chain.reverse();
        Ok(chain)
    }

    /// Resolves the complete field list of a complex type: every field
    /// inherited from the base chain (outermost base first), then the
    /// type's own fields, in declaration order.
    ///
    /// This matches the flat element order of the XML wire form for
    /// schema `extension`, and is the source of truth for the field
    /// completeness of generated records.
    ///
    /// ## Errors
    ///
    /// Propagates the same errors as [`SchemaModel::base_chain`].
    pub fn resolved_fields(&self, name: &str) -> Result<Vec<&Field>, ModelError> {
        let chain = self.base_chain(name)?;
        let own = self.get_complex(name).ok_or_else(|| ModelError::UnknownType {
            name: name.to_string(),
            schema: self.module.clone(),
        })?;

        let mut fields: Vec<&Field> = Vec::new();
        for base in chain {
            fields.extend(base.fields.iter());
        }
        fields.extend(own.fields.iter());
        Ok(fields)
    }

    /// Returns true when the base chain of `name` reaches `fault_root`
    /// (or `name` is the fault root itself).
    ///
    /// ## Errors
    ///
    /// Propagates the same errors as [`SchemaModel::base_chain`].
    pub fn is_fault(&self, name: &str, fault_root: &str) -> Result<bool, ModelError> {
        if self.get_complex(name).is_none() {
            return Ok(false);
        }
        if name == fault_root {
            return Ok(true);
        }
        let chain = self.base_chain(name)?;
        Ok(chain.iter().any(|c| c.name == fault_root))
    }
}
