//! Enumeration binding generation.
//!
//! Every schema enumeration becomes a fieldless Rust enum with a
//! `value()`/`from_value()` pair over the exact wire literals. Parsing is
//! closed: a literal outside the declared set is an `UnknownEnumValue`
//! error, never a silent default.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use vimbind_model::EnumType;

use crate::naming::variant_name;

/// Generates the Rust enum for a schema enumeration.
///
/// The generated type carries:
///
/// - One variant per literal, with a `#[serde(rename = "...")]` back to
///   the wire spelling
/// - `value()` returning the wire literal as a `&'static str`
/// - `from_value()` returning `Result<Self, UnknownEnumValue>`
/// - `Display` and `FromStr` delegating to the same pair
///
/// Variant order is literal declaration order.
pub fn generate_enum(en: &EnumType) -> TokenStream {
    let ident = format_ident!("{}", en.name);
    let name_str = en.name.as_str();

    let type_doc = en.doc.as_ref().map(|d| {
        let text = format!(" {}", d);
        quote! { #[doc = #text] }
    });

    let idents: Vec<_> = en
        .literals
        .iter()
        .map(|lit| format_ident!("{}", variant_name(&lit.literal)))
        .collect();
    let literals: Vec<&str> = en.literals.iter().map(|l| l.literal.as_str()).collect();

    let variants = en.literals.iter().zip(&idents).map(|(lit, variant)| {
        let literal = lit.literal.as_str();
        let doc = lit.doc.as_ref().map(|d| {
            let text = format!(" {}", d);
            quote! { #[doc = #text] }
        });
        quote! {
            #doc
            #[serde(rename = #literal)]
            #variant,
        }
    });

    quote! {
        #type_doc
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum #ident {
            #(#variants)*
        }

        impl #ident {
            /// Returns the exact wire literal for this value.
            pub fn value(&self) -> &'static str {
                match self {
                    #(Self::#idents => #literals,)*
                }
            }

            /// Parses a wire literal.
            ///
            /// The literal set is closed: anything outside it is rejected
            /// rather than mapped to a default.
            pub fn from_value(value: &str) -> Result<Self, UnknownEnumValue> {
                match value {
                    #(#literals => Ok(Self::#idents),)*
                    other => Err(UnknownEnumValue {
                        enum_name: #name_str,
                        literal: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for #ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.value())
            }
        }

        impl std::str::FromStr for #ident {
            type Err = UnknownEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_value(s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vimbind_model::{EnumLiteral, TypeDef};

    use crate::codegen::{format_generated_code, validate_generated_code};
    use crate::test_utils::make_vim_schema;

    fn power_state() -> EnumType {
        let Some(TypeDef::Enum(en)) = make_vim_schema()
            .get("VirtualMachinePowerState")
            .cloned()
        else {
            panic!("test schema is missing the power state enum");
        };
        en
    }

    #[test]
    fn generates_valid_syntax() {
        let tokens = generate_enum(&power_state());
        assert!(validate_generated_code(&tokens).is_ok());
    }

    #[test]
    fn variants_follow_literal_order() {
        let code = format_generated_code(&generate_enum(&power_state())).unwrap();
        let off = code.find("PoweredOff").unwrap();
        let on = code.find("PoweredOn").unwrap();
        let suspended = code.find("Suspended").unwrap();
        assert!(off < on);
        assert!(on < suspended);
    }

    #[test]
    fn variants_carry_serde_renames() {
        let code = format_generated_code(&generate_enum(&power_state())).unwrap();
        assert!(code.contains(r#"#[serde(rename = "poweredOff")]"#));
        assert!(code.contains(r#"#[serde(rename = "poweredOn")]"#));
        assert!(code.contains(r#"#[serde(rename = "suspended")]"#));
    }

    #[test]
    fn value_table_uses_wire_literals() {
        let code = format_generated_code(&generate_enum(&power_state())).unwrap();
        assert!(code.contains("pub fn value(&self) -> &'static str"));
        assert!(code.contains(r#"Self::PoweredOff => "poweredOff""#));
    }

    #[test]
    fn from_value_rejects_unknown_literals() {
        let code = format_generated_code(&generate_enum(&power_state())).unwrap();
        assert!(code.contains("pub fn from_value(value: &str) -> Result<Self, UnknownEnumValue>"));
        // The formatter may brace-wrap the fall-through arm, so the arm
        // pattern and the error construction are checked separately.
        assert!(code.contains("other =>"));
        assert!(code.contains("Err(UnknownEnumValue"));
        assert!(code.contains(r#"enum_name: "VirtualMachinePowerState""#));
    }

    #[test]
    fn display_and_fromstr_are_wired_to_the_literal_table() {
        let code = format_generated_code(&generate_enum(&power_state())).unwrap();
        assert!(code.contains("impl std::fmt::Display for VirtualMachinePowerState"));
        assert!(code.contains("impl std::str::FromStr for VirtualMachinePowerState"));
        assert!(code.contains("type Err = UnknownEnumValue;"));
    }

    #[test]
    fn documentation_is_carried_through() {
        let code = format_generated_code(&generate_enum(&power_state())).unwrap();
        assert!(code.contains("The current power state of a virtual machine."));
        assert!(code.contains("The machine is powered off."));
    }

    #[test]
    fn digit_leading_literal_gets_prefixed_variant() {
        let mut en = EnumType::new("HostCpuIdInfoRegister", Vec::<String>::new());
        en.push(EnumLiteral::new("3dnowMask"));
        let code = format_generated_code(&generate_enum(&en)).unwrap();
        assert!(code.contains("N3dnowMask"));
        assert!(code.contains(r#"#[serde(rename = "3dnowMask")]"#));
        assert!(code.contains(r#"Self::N3dnowMask => "3dnowMask""#));
    }
}
