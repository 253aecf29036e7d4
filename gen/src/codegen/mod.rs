//! Code generation for the individual binding forms.
//!
//! Each submodule emits one of the shapes the bindings crate is built
//! from. All generators return `proc_macro2::TokenStream`; the streams are
//! validated with `syn::parse2` and formatted with `prettyplease` before
//! anything reaches disk.
//!
//! ## Submodules
//!
//! - [`enums`] - Closed string enumerations with `value`/`from_value`
//! - [`records`] - Record structs with extension chains flattened in
//! - [`faults`] - Checked `{name}Fault` wrapper types
//! - [`families`] - The closed fault-family sum type
//! - [`shared`] - Types every module leans on (`UnknownEnumValue`, `VimFault`)
//!
//! See [`crate::output`] for assembly and file writing.

pub mod enums;
pub mod faults;
pub mod families;
pub mod records;
pub mod shared;

use proc_macro2::TokenStream;

use crate::errors::GeneratorError;

pub use enums::generate_enum;
pub use families::generate_fault_family;
pub use faults::generate_fault_wrapper;
pub use records::generate_record;
pub use shared::{generate_unknown_enum_value, generate_vim_fault_trait};

/// Parses a generated token stream as a complete Rust file.
///
/// ## Errors
///
/// Returns [`GeneratorError::CodeGenError`] when the tokens do not form
/// valid Rust.
pub fn validate_generated_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Validates and pretty-prints a generated token stream.
///
/// Test helper shared by the codegen submodules; production formatting
/// goes through [`crate::output::format_code`], which also prepends the
/// generated-file notice.
pub fn format_generated_code(tokens: &TokenStream) -> Result<String, GeneratorError> {
    let file = validate_generated_code(tokens)?;
    Ok(prettyplease::unparse(&file))
}
