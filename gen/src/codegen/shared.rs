//! Shared-type generation for the bindings crate.
//!
//! Generates the two items every module leans on: the `UnknownEnumValue`
//! error returned by enumeration parsing, and the `VimFault` trait
//! implemented by every checked fault wrapper.

use proc_macro2::TokenStream;
use quote::quote;

/// Generates the `UnknownEnumValue` error type.
///
/// Returned by every generated `from_value`/`FromStr`. Carries the
/// enumeration name and the rejected literal verbatim, so the failure is
/// diagnosable without re-reading the wire payload.
pub fn generate_unknown_enum_value() -> TokenStream {
    quote! {
        /// A wire literal outside an enumeration's declared set.
        ///
        /// Enumeration parsing is closed: rather than mapping unknown
        /// input to a default variant, the offending literal is carried
        /// here verbatim.
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        #[error("unrecognized value `{literal}` for enumeration `{enum_name}`")]
        pub struct UnknownEnumValue {
            /// The enumeration that rejected the literal.
            pub enum_name: &'static str,
            /// The rejected literal, exactly as received.
            pub literal: String,
        }
    }
}

/// Generates the `VimFault` trait.
///
/// Every `{name}Fault` wrapper implements it, so callers can handle
/// faults uniformly without matching on concrete types.
pub fn generate_vim_fault_trait() -> TokenStream {
    quote! {
        /// Common surface of every checked fault wrapper.
        pub trait VimFault: std::error::Error {
            /// The server-reported fault message.
            fn fault_message(&self) -> &str;
        }
    }
}
