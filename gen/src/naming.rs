//! Identifier derivation for generated code.
//!
//! Schema names arrive in wire form: type names in UpperCamelCase,
//! enumeration literals and field names in lowerCamelCase with occasional
//! separators (`vmx-13`, `ha-datacenter`). This module maps them onto
//! legal Rust identifiers deterministically, so the same schema always
//! produces the same bindings.
//!
//! ## Rules
//!
//! - Variant names: PascalCase over separator-split segments, with an `N`
//!   prefix when the literal starts with a digit (`"3dnow"` -> `N3dnow`).
//! - Field names: snake_case, with a trailing underscore when the result
//!   is a Rust keyword (`"type"` -> `type_`).
//!
//! The wire literal itself is never altered: renamed identifiers always
//! carry the original spelling in `value()` tables and serde attributes.

/// Rust keywords that need escaping when they appear as field names.
///
/// Strict and reserved keywords of the 2024 edition. Weak keywords
/// (`union`, `raw`) are legal identifiers and need no escaping.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Derives a Rust enum variant name from a wire literal.
///
/// Splits on `-`, `_`, `.` and whitespace and capitalizes each segment.
/// A mixed-case segment keeps its interior casing, so camelCase literals
/// keep their word boundaries; an all-uppercase segment is title-cased
/// (`SEC_KRB5` -> `SecKrb5`). A literal starting with a digit gets an
/// `N` prefix, since Rust identifiers cannot.
///
/// ## Examples
///
/// ```
/// use vimbind_gen::naming::variant_name;
///
/// assert_eq!(variant_name("poweredOff"), "PoweredOff");
/// assert_eq!(variant_name("SEC_KRB5"), "SecKrb5");
/// assert_eq!(variant_name("vmx-13"), "Vmx13");
/// assert_eq!(variant_name("3dnowMask"), "N3dnowMask");
/// ```
pub fn variant_name(literal: &str) -> String {
    let mut name = String::with_capacity(literal.len());
    for segment in literal.split(['-', '_', '.', ' ']) {
        let all_upper = !segment.chars().any(|c| c.is_lowercase());
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            if all_upper {
                name.extend(chars.flat_map(char::to_lowercase));
            } else {
                name.extend(chars);
            }
        }
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, 'N');
    }
    name
}

/// Derives a Rust field identifier from a schema element name.
///
/// Converts lowerCamelCase to snake_case and escapes Rust keywords with a
/// trailing underscore. Separators in the source name become underscores.
///
/// ## Examples
///
/// ```
/// use vimbind_gen::naming::field_ident;
///
/// assert_eq!(field_ident("powerState"), "power_state");
/// assert_eq!(field_ident("type"), "type_");
/// assert_eq!(field_ident("numCPUs"), "num_cpus");
/// ```
/// Reports whether `name` is usable as a Rust identifier.
///
/// Derived names normally are; this is the backstop validation leans on
/// to reject schema names whose derivation still carries characters the
/// split rules never touch, starts with a digit, or collapses to nothing.
///
/// ## Examples
///
/// ```
/// use vimbind_gen::naming::is_valid_ident;
///
/// assert!(is_valid_ident("VirtualMachine"));
/// assert!(!is_valid_ident("Foo.Bar"));
/// assert!(!is_valid_ident(""));
/// ```
pub fn is_valid_ident(name: &str) -> bool {
    if name == "_" || KEYWORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn field_ident(name: &str) -> String {
    let mut ident = String::with_capacity(name.len() + 4);
    let chars: Vec<char> = name.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '-' | '.' | ' ') {
            if !ident.ends_with('_') {
                ident.push('_');
            }
            continue;
        }
        if c.is_uppercase() {
            // Break only at a lower-to-upper transition, so an acronym run
            // stays one word ("numCPUs" -> num_cpus).
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            if prev_lower && !ident.ends_with('_') {
                ident.push('_');
            }
            ident.extend(c.to_lowercase());
        } else {
            ident.push(c);
        }
    }

    if KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_name_capitalizes_camel_case_literals() {
        assert_eq!(variant_name("poweredOff"), "PoweredOff");
        assert_eq!(variant_name("poweredOn"), "PoweredOn");
        assert_eq!(variant_name("suspended"), "Suspended");
    }

    #[test]
    fn variant_name_joins_separated_segments() {
        assert_eq!(variant_name("vmx-13"), "Vmx13");
        assert_eq!(variant_name("ha-datacenter"), "HaDatacenter");
        assert_eq!(variant_name("fault.tolerance"), "FaultTolerance");
        assert_eq!(variant_name("snake_case_literal"), "SnakeCaseLiteral");
    }

    #[test]
    fn variant_name_prefixes_leading_digit() {
        assert_eq!(variant_name("3dnowMask"), "N3dnowMask");
        assert_eq!(variant_name("10g"), "N10g");
    }

    #[test]
    fn variant_name_preserves_interior_case() {
        assert_eq!(variant_name("numCPUs"), "NumCPUs");
        assert_eq!(variant_name("vimApiVersion"), "VimApiVersion");
    }

    #[test]
    fn variant_name_title_cases_uppercase_segments() {
        assert_eq!(variant_name("SEC_KRB5"), "SecKrb5");
        assert_eq!(variant_name("AUTO"), "Auto");
    }

    #[test]
    fn field_ident_converts_camel_case() {
        assert_eq!(field_ident("powerState"), "power_state");
        assert_eq!(field_ident("bootTime"), "boot_time");
        assert_eq!(field_ident("name"), "name");
    }

    #[test]
    fn field_ident_keeps_acronym_runs_together() {
        assert_eq!(field_ident("numCPUs"), "num_cpus");
        assert_eq!(field_ident("guestOSFamily"), "guest_osfamily");
    }

    #[test]
    fn field_ident_escapes_keywords() {
        assert_eq!(field_ident("type"), "type_");
        assert_eq!(field_ident("ref"), "ref_");
        assert_eq!(field_ident("use"), "use_");
        assert_eq!(field_ident("loop"), "loop_");
    }

    #[test]
    fn field_ident_normalizes_separators() {
        assert_eq!(field_ident("fault-cause"), "fault_cause");
        assert_eq!(field_ident("fault.cause"), "fault_cause");
    }

    #[test]
    fn legal_idents_are_accepted() {
        assert!(is_valid_ident("VirtualMachine"));
        assert!(is_valid_ident("power_state"));
        assert!(is_valid_ident("type_"));
        assert!(is_valid_ident("_reserved"));
    }

    #[test]
    fn illegal_idents_are_rejected() {
        assert!(!is_valid_ident(""));
        assert!(!is_valid_ident("_"));
        assert!(!is_valid_ident("Foo.Bar"));
        assert!(!is_valid_ident("3d_support"));
        assert!(!is_valid_ident("type"));
    }
}
