//! Pre-generation validation for schema models.
//!
//! Catches model-level problems before any tokens are emitted, so the
//! generator fails with one actionable error instead of producing code
//! that does not compile.
//!
//! ## Validation Checks
//!
//! - **Duplicate type names**: each declaration must be unique in its schema
//! - **Identifier legality**: every type name, derived variant name, and
//!   derived field identifier must be a legal, non-empty Rust identifier
//! - **Enumeration shape**: no empty enumerations, no repeated literals, and
//!   no two literals that collapse onto the same Rust variant name
//! - **Field uniqueness**: the resolved field set of each record (own fields
//!   plus the extension chain) must stay duplicate-free after identifier
//!   derivation
//! - **Reference integrity**: every named field type and extension base must
//!   be declared, and extension chains must be acyclic
//! - **Fault wrapper collisions**: no declared type may shadow a generated
//!   `{fault}Fault` wrapper name

use std::collections::HashMap;
use std::collections::HashSet;

use vimbind_model::{FieldType, SchemaModel, TypeDef};

use crate::errors::GeneratorError;
use crate::naming::{field_ident, is_valid_ident, variant_name};

/// Validates a schema model before code generation.
///
/// `fault_root` names the type whose extension chain marks a record as a
/// fault (for vim25, `MethodFault`).
///
/// ## Errors
///
/// Returns the first problem found, as a [`GeneratorError`] naming the
/// offending type. Base-chain problems (unknown or cyclic bases) surface
/// as [`GeneratorError::Model`].
pub fn validate_model(schema: &SchemaModel, fault_root: &str) -> Result<(), GeneratorError> {
    let mut seen = HashSet::new();
    for def in &schema.types {
        if !is_valid_ident(def.name()) {
            return Err(GeneratorError::InvalidTypeName {
                name: def.name().to_string(),
                module: schema.module.clone(),
            });
        }
        if !seen.insert(def.name()) {
            return Err(GeneratorError::DuplicateTypeName {
                name: def.name().to_string(),
                module: schema.module.clone(),
            });
        }
    }

    for def in &schema.types {
        match def {
            TypeDef::Enum(en) => validate_enum(en)?,
            TypeDef::Complex(ty) => {
                // Resolves the full chain, surfacing unknown bases and cycles.
                schema.base_chain(&ty.name)?;

                for field in &ty.fields {
                    if let FieldType::Named(referenced) = &field.ty
                        && schema.get(referenced).is_none()
                    {
                        return Err(GeneratorError::UnknownTypeRef {
                            type_name: ty.name.clone(),
                            field: field.name.clone(),
                            referenced: referenced.clone(),
                        });
                    }
                }

                // The full resolved field set must stay duplicate-free
                // after identifier derivation, or the generated struct
                // would not compile.
                let mut idents: HashMap<String, &str> = HashMap::new();
                for field in schema.resolved_fields(&ty.name)? {
                    let ident = field_ident(&field.name);
                    if !is_valid_ident(&ident) {
                        return Err(GeneratorError::InvalidFieldIdent {
                            type_name: ty.name.clone(),
                            field: field.name.clone(),
                            ident,
                        });
                    }
                    if let Some(first) = idents.insert(ident.clone(), &field.name) {
                        return Err(GeneratorError::FieldCollision {
                            type_name: ty.name.clone(),
                            ident,
                            first: first.to_string(),
                            second: field.name.clone(),
                        });
                    }
                }
            }
        }
    }

    for def in &schema.types {
        if schema.is_fault(def.name(), fault_root)? && def.name() != fault_root {
            let wrapper = format!("{}Fault", def.name());
            if seen.contains(wrapper.as_str()) {
                return Err(GeneratorError::FaultWrapperCollision {
                    fault: def.name().to_string(),
                    wrapper,
                });
            }
        }
    }

    Ok(())
}

fn validate_enum(en: &vimbind_model::EnumType) -> Result<(), GeneratorError> {
    if en.literals.is_empty() {
        return Err(GeneratorError::EmptyEnum {
            name: en.name.clone(),
        });
    }

    let mut literals = HashSet::new();
    let mut variants: HashMap<String, &str> = HashMap::new();
    for lit in &en.literals {
        if !literals.insert(lit.literal.as_str()) {
            return Err(GeneratorError::DuplicateLiteral {
                enum_name: en.name.clone(),
                literal: lit.literal.clone(),
            });
        }

        let variant = variant_name(&lit.literal);
        if !is_valid_ident(&variant) {
            return Err(GeneratorError::InvalidVariantName {
                enum_name: en.name.clone(),
                literal: lit.literal.clone(),
                variant,
            });
        }
        if let Some(first) = variants.insert(variant.clone(), &lit.literal) {
            return Err(GeneratorError::VariantCollision {
                enum_name: en.name.clone(),
                variant,
                first: first.to_string(),
                second: lit.literal.clone(),
            });
        }
    }

    Ok(())
}
