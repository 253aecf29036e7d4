//! Cargo.toml generation for the bindings crate.
//!
//! The generated src/ tree is only useful inside a crate that carries the
//! dependencies the bindings lean on. This module writes that manifest
//! next to the generated sources.

use std::path::Path;

use crate::errors::GeneratorError;
use crate::output::write_atomic;

/// The manifest for the generated bindings crate.
///
/// Dependencies match what the generated code actually uses: serde for
/// the derives, quick-xml for the wire format, thiserror for
/// `UnknownEnumValue`.
const BINDINGS_MANIFEST: &str = r#"[package]
name = "vimbind-bindings"
version = "0.1.0"
edition = "2024"
license = "AGPL-3.0-only"
description = "Generated data bindings for the vSphere Web Services schemas"

[lib]
name = "vimbind_bindings"
path = "src/lib.rs"

[dependencies]
serde = { version = "1.0", features = ["derive"] }
quick-xml = { version = "0.38", features = ["serialize"] }
thiserror = "2.0"
"#;

/// Writes the bindings crate's Cargo.toml into `dir`.
///
/// `dir` is the crate root (the parent of the generated src/ directory).
/// In dry-run mode the manifest is printed instead.
///
/// ## Errors
///
/// Returns [`GeneratorError::WriteError`] when the file cannot be written.
pub fn write_cargo_toml(dir: &Path, dry_run: bool) -> Result<(), GeneratorError> {
    if dry_run {
        println!("=== Cargo.toml ===\n{}\n", BINDINGS_MANIFEST);
        return Ok(());
    }
    write_atomic(&dir.join("Cargo.toml"), BINDINGS_MANIFEST)
}
