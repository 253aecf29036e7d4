//! Vimbind code generator library.
//!
//! This crate generates strongly-typed Rust data bindings from parsed
//! vSphere Web Services schemas. The generated code includes:
//!
//! - One fieldless enum per schema enumeration, with a closed
//!   `value()`/`from_value()` literal mapping
//! - One struct per schema complex type, with the extension chain
//!   flattened into the field list
//! - A checked `{name}Fault` error wrapper per fault record
//! - A closed `{root}Kind` sum type over the whole fault family
//! - A shared module with `UnknownEnumValue` and the `VimFault` trait
//!
//! ## Modules
//!
//! - [`codegen`] - Code generation for individual binding forms
//! - [`output`] - Final assembly, validation, and file writing
//! - [`cargo_gen`] - Cargo.toml generation for the output crate
//! - [`naming`] - Wire name to Rust identifier derivation
//! - [`validation`] - Pre-generation model checks
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use vimbind_gen::output::generate_and_write_all;
//! use vimbind_xsd::load_schema;
//!
//! let schema = load_schema(Path::new("schemas/vim25.xsd")).unwrap();
//! let output_dir = Path::new("bindings/src");
//!
//! // Generate code (dry_run=false writes to disk)
//! let code = generate_and_write_all(&[&schema], output_dir, "MethodFault", false).unwrap();
//! println!("{}", code);
//! ```
//!
//! ## Generated Code Structure
//!
//! For a schema declaring `VirtualMachinePowerState`, `VirtualMachine`,
//! and a `NotFound` fault:
//!
//! ```text
//! pub enum VirtualMachinePowerState {
//!     PoweredOff,
//!     PoweredOn,
//!     Suspended,
//! }
//!
//! pub struct VirtualMachine {
//!     pub name: String,                              // inherited
//!     pub power_state: VirtualMachinePowerState,     // own
//! }
//!
//! pub struct NotFound { ... }
//! pub struct NotFoundFault { message: String, fault: NotFound }
//!
//! pub enum MethodFaultKind {
//!     NotFound(NotFound),
//! }
//! ```

pub mod cargo_gen;
pub mod codegen;
pub mod errors;
pub mod naming;
pub mod output;
pub mod validation;

#[cfg(test)]
mod test_utils;
