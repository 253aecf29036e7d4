//! Checked fault wrapper generation.
//!
//! Every record under the fault root gets a `{name}Fault` companion: an
//! error type pairing the server-reported message with the structured
//! fault payload. The payload is set at construction and never mutated;
//! accessors borrow it and `into_fault` releases ownership.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use vimbind_model::ComplexType;

/// Generates the checked wrapper for a fault record.
///
/// The wrapper implements `std::error::Error` (via `Display` over the
/// message) and the generated `VimFault` trait, so callers can handle
/// faults uniformly or downcast to the concrete payload.
pub fn generate_fault_wrapper(ty: &ComplexType) -> TokenStream {
    let payload = format_ident!("{}", ty.name);
    let wrapper = format_ident!("{}Fault", ty.name);
    let name_str = ty.name.as_str();

    let wrapper_doc = format!(" Checked error wrapper carrying a [`{}`] fault payload.", ty.name);

    quote! {
        #[doc = #wrapper_doc]
        #[derive(Debug, Clone, PartialEq)]
        pub struct #wrapper {
            message: String,
            fault: #payload,
        }

        impl #wrapper {
            /// Wraps a fault payload with its server-reported message.
            pub fn new(message: impl Into<String>, fault: #payload) -> Self {
                Self {
                    message: message.into(),
                    fault,
                }
            }

            /// The server-reported fault message.
            pub fn message(&self) -> &str {
                &self.message
            }

            /// Borrows the structured fault payload.
            pub fn fault(&self) -> &#payload {
                &self.fault
            }

            /// Consumes the wrapper, releasing the payload.
            pub fn into_fault(self) -> #payload {
                self.fault
            }
        }

        impl std::fmt::Display for #wrapper {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}: {}", #name_str, self.message)
            }
        }

        impl std::error::Error for #wrapper {}

        impl VimFault for #wrapper {
            fn fault_message(&self) -> &str {
                &self.message
            }
        }
    }
}
