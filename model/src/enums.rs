//! Enumeration type definitions.
//!
//! A schema enumeration is a closed set of wire literals. The generator
//! derives a Rust variant name for each literal mechanically; the model only
//! records the exact literal strings, in schema insertion order.

/// A single enumeration literal as declared by the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumLiteral {
    /// The exact wire-format string (e.g. `"poweredOn"`, `"SEC_KRB5"`).
    pub literal: String,
    /// Documentation captured from `xsd:annotation`, if any.
    pub doc: Option<String>,
}

impl EnumLiteral {
    /// Creates a literal with no documentation.
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            doc: None,
        }
    }

    /// Attaches documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A closed string enumeration declared by the schema.
///
/// Literal order is schema insertion order; it carries no semantic weight
/// beyond readability of the generated code.
///
/// ## Examples
///
/// ```
/// use vimbind_model::EnumType;
///
/// let power = EnumType::new(
///     "VirtualMachinePowerState",
///     ["poweredOff", "poweredOn", "suspended"],
/// );
/// assert_eq!(power.name, "VirtualMachinePowerState");
/// assert_eq!(power.literals.len(), 3);
/// assert_eq!(power.literals[1].literal, "poweredOn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    /// The schema type name (e.g. `"VirtualMachinePowerState"`).
    pub name: String,
    /// Documentation captured from `xsd:annotation`, if any.
    pub doc: Option<String>,
    /// The declared literals, in schema order.
    pub literals: Vec<EnumLiteral>,
}

impl EnumType {
    /// Creates an enumeration from a name and its literals.
    pub fn new<I, S>(name: impl Into<String>, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            doc: None,
            literals: literals.into_iter().map(EnumLiteral::new).collect(),
        }
    }

    /// Attaches documentation text.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Appends a literal, preserving insertion order.
    pub fn push(&mut self, literal: EnumLiteral) {
        self.literals.push(literal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_order_is_preserved() {
        let e = EnumType::new("HostSystemPowerState", ["poweredOn", "poweredOff", "standBy"]);
        let order: Vec<_> = e.literals.iter().map(|l| l.literal.as_str()).collect();
        assert_eq!(order, vec!["poweredOn", "poweredOff", "standBy"]);
    }

    #[test]
    fn push_appends_at_end() {
        let mut e = EnumType::new("Status", ["red", "yellow"]);
        e.push(EnumLiteral::new("green").with_doc("Entity is OK"));
        assert_eq!(e.literals.len(), 3);
        assert_eq!(e.literals[2].literal, "green");
        assert_eq!(e.literals[2].doc.as_deref(), Some("Entity is OK"));
    }

    #[test]
    fn docs_default_to_none() {
        let e = EnumType::new("Empty", Vec::<String>::new());
        assert!(e.doc.is_none());
        assert!(e.literals.is_empty());
    }
}
