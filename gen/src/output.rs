//! Output assembly and file writing for generated code.
//!
//! The final phase of generation: assembling per-schema modules into
//! complete Rust files, validating and formatting them, and writing the
//! bindings crate's `src/` tree atomically.
//!
//! ## Output Structure
//!
//! ```text
//! bindings/src/
//! ├── lib.rs       # Module declarations and shared re-exports
//! ├── shared.rs    # UnknownEnumValue and the VimFault trait
//! └── vim25.rs     # One module per schema document
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: every file is parsed with `syn` before writing
//! - **Formatting**: output goes through `prettyplease`
//! - **Atomic writes**: temp file + rename, never a partial file

use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use vimbind_model::{ComplexType, SchemaModel, TypeDef};

use crate::codegen::{
    generate_enum, generate_fault_family, generate_fault_wrapper, generate_record,
    generate_unknown_enum_value, generate_vim_fault_trait, validate_generated_code,
};
use crate::errors::GeneratorError;
use crate::naming::is_valid_ident;
use crate::validation::validate_model;

/// Assembles the complete module for one schema document.
///
/// Types are emitted in schema declaration order. A record under the
/// fault root additionally gets its checked wrapper, and when any faults
/// exist the module closes with the `{root}Kind` family. Imports from the
/// shared module are emitted only when something in the module uses them.
///
/// ## Errors
///
/// Propagates base-chain resolution failures from record generation.
pub fn assemble_schema_module(
    schema: &SchemaModel,
    fault_root: &str,
) -> Result<TokenStream, GeneratorError> {
    let mut items = TokenStream::new();
    let mut has_enums = false;
    let mut faults: Vec<&ComplexType> = Vec::new();

    for def in &schema.types {
        match def {
            TypeDef::Enum(en) => {
                has_enums = true;
                items.extend(generate_enum(en));
            }
            TypeDef::Complex(ty) => {
                items.extend(generate_record(schema, ty)?);
                if ty.name != fault_root && schema.is_fault(&ty.name, fault_root)? {
                    items.extend(generate_fault_wrapper(ty));
                    faults.push(ty);
                }
            }
        }
    }

    if !faults.is_empty() {
        items.extend(generate_fault_family(fault_root, &faults));
    }

    let module_doc = format!(
        " Data bindings for the `{}` namespace.",
        schema.target_namespace
    );

    let mut shared_imports = TokenStream::new();
    if has_enums {
        shared_imports.extend(quote! { use crate::shared::UnknownEnumValue; });
    }
    if !faults.is_empty() {
        shared_imports.extend(quote! { use crate::shared::VimFault; });
    }

    Ok(quote! {
        #![doc = #module_doc]

        use serde::{Deserialize, Serialize};

        #shared_imports

        #items
    })
}

/// Assembles the shared module (shared.rs).
///
/// Contains the `UnknownEnumValue` error and the `VimFault` trait; every
/// schema module imports from here instead of redeclaring them.
pub fn assemble_shared_module() -> TokenStream {
    let unknown_enum_value = generate_unknown_enum_value();
    let vim_fault = generate_vim_fault_trait();

    quote! {
        //! Types shared by every generated schema module.

        #unknown_enum_value

        #vim_fault
    }
}

/// Assembles the lib.rs content for the bindings crate.
pub fn assemble_lib_rs(schemas: &[&SchemaModel]) -> TokenStream {
    let module_decls: Vec<_> = schemas
        .iter()
        .map(|schema| {
            let module = format_ident!("{}", schema.module);
            quote! {
                pub mod #module;
            }
        })
        .collect();

    quote! {
        //! Generated data bindings for the vSphere Web Services schemas.
        //!
        //! Each schema document is one module; the shared module carries
        //! the enumeration error type and the fault trait.

        pub mod shared;

        pub use shared::{UnknownEnumValue, VimFault};

        #(#module_decls)*
    }
}

/// Validates generated code using syn.
///
/// ## Errors
///
/// Returns [`GeneratorError::CodeGenError`] if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    validate_generated_code(tokens)
}

/// Formats a validated file with prettyplease, prepending the
/// generated-file notice as a regular comment.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This code was automatically generated by vimbind-gen. Do not edit manually.\n\n{}",
        formatted
    )
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed. Readers see either the old
/// or the new content, never a partially written file.
///
/// ## Errors
///
/// Returns [`GeneratorError::WriteError`] if directory creation, the temp
/// write, or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates and writes the bindings crate's src/ tree.
///
/// Validates every model first, so nothing is written when any schema is
/// unsound. Produces `lib.rs`, `shared.rs`, and one `{module}.rs` per
/// schema.
///
/// ## Arguments
///
/// * `schemas` - The schema models to generate, one module each
/// * `output_dir` - Directory to write generated files to
/// * `fault_root` - Type whose extension chain marks records as faults
/// * `dry_run` - If true, print code instead of writing files
///
/// ## Returns
///
/// The formatted content of the first schema module.
///
/// ## Errors
///
/// Returns an error when validation fails, generation produces invalid
/// Rust, or a file cannot be written.
pub fn generate_and_write_all(
    schemas: &[&SchemaModel],
    output_dir: &Path,
    fault_root: &str,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let mut modules_seen = std::collections::HashSet::new();
    for schema in schemas {
        if !is_valid_ident(&schema.module) {
            return Err(GeneratorError::ConfigError(format!(
                "Schema module '{}' is not a legal Rust module name",
                schema.module
            )));
        }
        if !modules_seen.insert(schema.module.as_str()) {
            return Err(GeneratorError::ConfigError(format!(
                "Two schemas map to the same module '{}'",
                schema.module
            )));
        }
    }

    for schema in schemas {
        validate_model(schema, fault_root)?;
    }

    let lib_tokens = assemble_lib_rs(schemas);
    let lib_formatted = format_code(&validate_code(&lib_tokens)?);

    let shared_tokens = assemble_shared_module();
    let shared_formatted = format_code(&validate_code(&shared_tokens)?);

    let mut modules: Vec<(String, String)> = Vec::new();
    for schema in schemas {
        let tokens = assemble_schema_module(schema, fault_root)?;
        let formatted = format_code(&validate_code(&tokens)?);
        modules.push((format!("{}.rs", schema.module), formatted));
    }

    if dry_run {
        println!("=== lib.rs ===\n{}\n", lib_formatted);
        println!("=== shared.rs ===\n{}\n", shared_formatted);
        for (filename, content) in &modules {
            println!("=== {} ===\n{}\n", filename, content);
        }
    } else {
        write_atomic(&output_dir.join("lib.rs"), &lib_formatted)?;
        write_atomic(&output_dir.join("shared.rs"), &shared_formatted)?;
        for (filename, content) in &modules {
            write_atomic(&output_dir.join(filename), content)?;
        }
    }

    Ok(modules
        .into_iter()
        .next()
        .map(|(_, content)| content)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::test_utils::{make_enum_only_schema, make_vim_schema};

    #[test]
    fn module_includes_every_declared_type() {
        let schema = make_vim_schema();
        let tokens = assemble_schema_module(&schema, "MethodFault").unwrap();
        let code = tokens.to_string();

        assert!(code.contains("DynamicData"));
        assert!(code.contains("VirtualMachinePowerState"));
        assert!(code.contains("ManagedEntityStatus"));
        assert!(code.contains("VirtualMachine"));
        assert!(code.contains("MethodFault"));
        assert!(code.contains("NotFoundFault"));
        assert!(code.contains("MethodFaultKind"));
    }

    #[test]
    fn fault_root_gets_no_wrapper() {
        let schema = make_vim_schema();
        let tokens = assemble_schema_module(&schema, "MethodFault").unwrap();
        let code = tokens.to_string();

        // MethodFault is the root: a record, a family, but no MethodFaultFault.
        assert!(!code.contains("MethodFaultFault"));
    }

    #[test]
    fn shared_imports_track_module_contents() {
        let schema = make_vim_schema();
        let code = assemble_schema_module(&schema, "MethodFault")
            .unwrap()
            .to_string();
        assert!(code.contains("UnknownEnumValue"));
        assert!(code.contains("VimFault"));

        // An enum-only schema needs the error type but not the fault trait.
        let code = assemble_schema_module(&make_enum_only_schema(), "MethodFault")
            .unwrap()
            .to_string();
        assert!(code.contains("UnknownEnumValue"));
        assert!(!code.contains("VimFault"));
    }

    #[test]
    fn assembled_module_is_valid_rust() {
        let schema = make_vim_schema();
        let tokens = assemble_schema_module(&schema, "MethodFault").unwrap();
        assert!(validate_code(&tokens).is_ok());
    }

    #[test]
    fn validate_code_rejects_invalid_code() {
        let invalid_tokens = quote! {
            let x =
        };

        match validate_code(&invalid_tokens) {
            Err(GeneratorError::CodeGenError(_)) => {}
            Err(other) => panic!("Unexpected error type: {:?}", other),
            Ok(_) => panic!("Expected error but got success"),
        }
    }

    #[test]
    fn format_code_prepends_generated_notice() {
        let tokens = assemble_shared_module();
        let file = validate_code(&tokens).unwrap();
        let formatted = format_code(&file);

        assert!(formatted.starts_with("// This code was automatically generated"));
        assert!(formatted.contains("Do not edit manually"));
    }

    #[test]
    fn write_atomic_creates_file_and_parents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested/deep/test.rs");

        write_atomic(&file_path, "// Nested content").unwrap();

        assert!(file_path.exists());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// Nested content");
    }

    #[test]
    fn write_atomic_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("existing.rs");
        fs::write(&file_path, "// Old content").unwrap();

        write_atomic(&file_path, "// New content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// New content");
    }

    #[test]
    fn write_atomic_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("clean.rs");

        write_atomic(&file_path, "// Content").unwrap();

        assert!(!file_path.with_extension("tmp").exists());
    }

    #[test]
    fn generate_and_write_produces_the_full_tree() {
        let schema = make_vim_schema();
        let temp_dir = TempDir::new().unwrap();

        generate_and_write_all(&[&schema], temp_dir.path(), "MethodFault", false).unwrap();

        let lib = fs::read_to_string(temp_dir.path().join("lib.rs")).unwrap();
        assert!(lib.contains("pub mod shared;"));
        assert!(lib.contains("pub mod vim25;"));
        assert!(lib.contains("pub use shared::{UnknownEnumValue, VimFault};"));

        let shared = fs::read_to_string(temp_dir.path().join("shared.rs")).unwrap();
        assert!(shared.contains("pub struct UnknownEnumValue"));
        assert!(shared.contains("pub trait VimFault"));

        let module = fs::read_to_string(temp_dir.path().join("vim25.rs")).unwrap();
        assert!(module.contains("pub struct VirtualMachine"));
        assert!(module.contains("pub enum VirtualMachinePowerState"));
        assert!(module.contains("pub enum MethodFaultKind"));
        assert!(module.contains("    ")); // formatted with 4-space indent
    }

    #[test]
    fn generate_and_write_dry_run_writes_nothing() {
        let schema = make_vim_schema();
        let temp_dir = TempDir::new().unwrap();

        let code =
            generate_and_write_all(&[&schema], temp_dir.path(), "MethodFault", true).unwrap();

        assert!(code.contains("pub struct VirtualMachine"));
        assert!(!temp_dir.path().join("lib.rs").exists());
        assert!(!temp_dir.path().join("vim25.rs").exists());
    }

    #[test]
    fn generate_and_write_returns_module_file_content() {
        let schema = make_vim_schema();
        let temp_dir = TempDir::new().unwrap();

        let returned =
            generate_and_write_all(&[&schema], temp_dir.path(), "MethodFault", false).unwrap();
        let on_disk = fs::read_to_string(temp_dir.path().join("vim25.rs")).unwrap();

        assert_eq!(returned, on_disk);
    }

    #[test]
    fn multiple_schemas_become_multiple_modules() {
        let vim = make_vim_schema();
        let core = make_enum_only_schema();
        let temp_dir = TempDir::new().unwrap();

        generate_and_write_all(&[&vim, &core], temp_dir.path(), "MethodFault", false).unwrap();

        let lib = fs::read_to_string(temp_dir.path().join("lib.rs")).unwrap();
        assert!(lib.contains("pub mod vim25;"));
        assert!(lib.contains("pub mod core;"));
        assert!(temp_dir.path().join("core.rs").exists());
    }

    #[test]
    fn duplicate_module_names_are_rejected() {
        let vim = make_vim_schema();
        let temp_dir = TempDir::new().unwrap();

        match generate_and_write_all(&[&vim, &vim], temp_dir.path(), "MethodFault", false) {
            Err(GeneratorError::ConfigError(msg)) => assert!(msg.contains("vim25")),
            other => panic!("Expected ConfigError, got: {:?}", other),
        }
    }

    #[test]
    fn keyword_module_name_is_rejected() {
        let mut schema = make_enum_only_schema();
        schema.module = "mod".to_string();
        let temp_dir = TempDir::new().unwrap();

        match generate_and_write_all(&[&schema], temp_dir.path(), "MethodFault", false) {
            Err(GeneratorError::ConfigError(msg)) => assert!(msg.contains("mod")),
            other => panic!("Expected ConfigError, got: {:?}", other),
        }
        assert!(!temp_dir.path().join("lib.rs").exists());
    }

    #[test]
    fn shadowed_inherited_field_writes_nothing() {
        let mut schema = make_vim_schema();
        // ManagedEntity already declares "name"; the resolved field set of
        // Folder would carry it twice.
        schema.push(vimbind_model::TypeDef::Complex(
            vimbind_model::ComplexType::new("Folder")
                .extends("ManagedEntity")
                .with_field(vimbind_model::Field::required("name", "xsd:string")),
        ));
        let temp_dir = TempDir::new().unwrap();

        let result = generate_and_write_all(&[&schema], temp_dir.path(), "MethodFault", false);
        assert!(matches!(result, Err(GeneratorError::FieldCollision { .. })));
        assert!(!temp_dir.path().join("vim25.rs").exists());
    }

    #[test]
    fn dotted_type_name_is_rejected_before_generation() {
        let mut schema = make_vim_schema();
        schema.push(vimbind_model::TypeDef::Complex(
            vimbind_model::ComplexType::new("Foo.Bar"),
        ));
        let temp_dir = TempDir::new().unwrap();

        let result = generate_and_write_all(&[&schema], temp_dir.path(), "MethodFault", false);
        assert!(matches!(result, Err(GeneratorError::InvalidTypeName { .. })));
        assert!(!temp_dir.path().join("lib.rs").exists());
    }

    #[test]
    fn invalid_model_writes_nothing() {
        let mut schema = make_vim_schema();
        schema.push(vimbind_model::TypeDef::Complex(
            vimbind_model::ComplexType::new("Broken").extends("Missing"),
        ));
        let temp_dir = TempDir::new().unwrap();

        assert!(
            generate_and_write_all(&[&schema], temp_dir.path(), "MethodFault", false).is_err()
        );
        assert!(!temp_dir.path().join("lib.rs").exists());
    }
}
