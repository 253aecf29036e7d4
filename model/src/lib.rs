//! Vimbind Schema Model
//!
//! This crate provides the in-memory representation of a parsed XML schema
//! (XSD) as used by the vSphere vim25 API. These models are produced by the
//! `vimbind-xsd` loader and consumed by the `vimbind-gen` binary to generate
//! strongly-typed Rust bindings.
//!
//! ## Core Types
//!
//! - [`SchemaModel`] - A complete schema: target namespace plus an ordered
//!   list of type definitions
//! - [`TypeDef`] - A single definition, either an enumeration or a complex type
//! - [`EnumType`] / [`EnumLiteral`] - Closed string enumerations with their
//!   wire literals
//! - [`ComplexType`] / [`Field`] - Structured record types with an optional
//!   base type (single inheritance, mirroring schema `extension`)
//! - [`FieldType`] / [`Occurrence`] - Field typing and required/optional/
//!   repeated cardinality
//! - [`Primitive`] - The xsd primitive vocabulary and its Rust mapping
//!
//! ## Examples
//!
//! Build a schema by hand (the loader does the same from an XSD document):
//!
//! ```
//! use vimbind_model::{ComplexType, EnumType, Field, SchemaModel, TypeDef};
//!
//! let mut schema = SchemaModel::new("vim25", "urn:vim25");
//! schema.push(TypeDef::Enum(EnumType::new(
//!     "VirtualMachinePowerState",
//!     ["poweredOff", "poweredOn", "suspended"],
//! )));
//! schema.push(TypeDef::Complex(
//!     ComplexType::new("ManagedEntity")
//!         .with_field(Field::required("name", "xsd:string")),
//! ));
//!
//! assert_eq!(schema.types.len(), 2);
//! assert!(schema.get("ManagedEntity").is_some());
//! ```
//!
//! ## Base-Chain Resolution
//!
//! Schema `extension` chains are flattened at generation time: the full field
//! set of a complex type is the union of its own fields and every field
//! inherited from its base chain. [`SchemaModel::resolved_fields`] computes
//! that union (base-first order) and reports unknown bases and cycles as
//! [`ModelError`]s.

pub mod complex;
pub mod enums;
pub mod errors;
pub mod primitive;
pub mod schema;

pub use complex::{ComplexType, Field, FieldType, Occurrence};
pub use enums::{EnumLiteral, EnumType};
pub use errors::ModelError;
pub use primitive::Primitive;
pub use schema::{SchemaModel, TypeDef};
