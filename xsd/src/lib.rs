//! Vimbind XSD Loader
//!
//! Parses XML Schema (XSD) documents of the shape the vSphere vim25 API uses
//! into [`vimbind_model::SchemaModel`] values for code generation.
//!
//! ## Supported Constructs
//!
//! - `xsd:schema` with `targetNamespace`
//! - `xsd:simpleType` string restrictions with `xsd:enumeration` facets
//!   (closed string enumerations)
//! - `xsd:complexType` with `xsd:sequence` element declarations and
//!   `xsd:complexContent`/`xsd:extension` single-inheritance bases
//! - `minOccurs`/`maxOccurs` cardinality on elements
//! - `xsd:annotation`/`xsd:documentation` text, captured as documentation at
//!   type, literal, and field level
//!
//! Constructs outside this vocabulary (unions, lists, attributes, choices,
//! groups, non-string enumeration restrictions) are rejected with a
//! structured [`XsdError`] rather than silently skipped: a type either
//! parses with its full semantics or not at all.
//!
//! ## Examples
//!
//! ```
//! use vimbind_xsd::parse_schema;
//!
//! let xsd = r#"
//! <schema xmlns="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:vim25">
//!   <simpleType name="VirtualMachinePowerState">
//!     <restriction base="xsd:string">
//!       <enumeration value="poweredOff" />
//!       <enumeration value="poweredOn" />
//!       <enumeration value="suspended" />
//!     </restriction>
//!   </simpleType>
//! </schema>"#;
//!
//! let schema = parse_schema(xsd, "vim25").unwrap();
//! assert_eq!(schema.target_namespace, "urn:vim25");
//! assert_eq!(schema.types.len(), 1);
//! ```

pub mod errors;
pub mod loader;
pub mod parser;

pub use errors::XsdError;
pub use loader::load_schema;
pub use parser::parse_schema;
