//! File loading for XSD schemas.

use std::path::Path;

use tracing::debug;
use vimbind_model::SchemaModel;

use crate::errors::XsdError;
use crate::parser::parse_schema;

/// Loads and parses an XSD schema file.
///
/// The generated module name is derived from the file stem: `vim25.xsd`
/// becomes module `vim25`. Characters that are not legal in a Rust module
/// name are replaced with underscores, a leading digit gets a `s` prefix,
/// and a stem that is a Rust keyword gets a trailing underscore.
///
/// ## Errors
///
/// Returns [`XsdError::ReadError`] (with the path in context) when the file
/// cannot be read, and propagates parse errors from
/// [`parse_schema`](crate::parse_schema).
pub fn load_schema(path: &Path) -> Result<SchemaModel, XsdError> {
    let text = std::fs::read_to_string(path).map_err(|source| XsdError::ReadError {
        path: path.display().to_string(),
        source,
    })?;

    let module = module_from_stem(path);
    debug!(path = %path.display(), module = %module, "loading schema");
    parse_schema(&text, &module)
}

/// Rust keywords a file stem could collide with. A matching stem gets a
/// trailing underscore, the same escape the generator applies to fields.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Derives a module name from a schema file's stem.
fn module_from_stem(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema".to_string());

    let mut module: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if module.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        module.insert(0, 's');
    }
    if module.is_empty() {
        module = "schema".to_string();
    }
    if KEYWORDS.contains(&module.as_str()) {
        module.push('_');
    }
    module
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_name_from_plain_stem() {
        assert_eq!(module_from_stem(Path::new("vim25.xsd")), "vim25");
        assert_eq!(module_from_stem(Path::new("schemas/core.xsd")), "core");
    }

    #[test]
    fn module_name_sanitizes_illegal_characters() {
        assert_eq!(module_from_stem(Path::new("vim25-core.xsd")), "vim25_core");
        assert_eq!(module_from_stem(Path::new("Query Service.xsd")), "query_service");
    }

    #[test]
    fn module_name_cannot_start_with_digit() {
        assert_eq!(module_from_stem(Path::new("25vim.xsd")), "s25vim");
    }

    #[test]
    fn keyword_stem_is_escaped() {
        assert_eq!(module_from_stem(Path::new("mod.xsd")), "mod_");
        assert_eq!(module_from_stem(Path::new("type.xsd")), "type_");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_schema(Path::new("/nonexistent/vim25.xsd")).unwrap_err();
        match err {
            XsdError::ReadError { path, .. } => assert!(path.contains("vim25.xsd")),
            other => panic!("Expected ReadError, got: {:?}", other),
        }
    }
}
