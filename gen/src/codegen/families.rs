//! Fault family generation.
//!
//! All faults under the root form one closed sum type, discriminated by
//! the `xsi:type` attribute the server stamps on fault detail elements.
//! Deserializing a fault outside the declared set is an error; an unknown
//! fault is never degraded to a base payload.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use vimbind_model::ComplexType;

/// Generates the closed sum type over every fault declared under `root`.
///
/// The enum is named `{root}Kind` and carries one newtype variant per
/// fault, in schema declaration order. `type_name()` recovers the schema
/// type name of the active variant, and each payload converts in via
/// `From`.
pub fn generate_fault_family(root: &str, faults: &[&ComplexType]) -> TokenStream {
    let family = format_ident!("{}Kind", root);
    let idents: Vec<_> = faults
        .iter()
        .map(|ty| format_ident!("{}", ty.name))
        .collect();
    let names: Vec<&str> = faults.iter().map(|ty| ty.name.as_str()).collect();

    let family_doc = format!(
        " Every fault declared under `{}`, discriminated by `xsi:type`.",
        root
    );

    let from_impls = idents.iter().map(|ident| {
        quote! {
            impl From<#ident> for #family {
                fn from(fault: #ident) -> Self {
                    Self::#ident(fault)
                }
            }
        }
    });

    quote! {
        #[doc = #family_doc]
        ///
        /// The set is closed over the schema: a fault type outside it fails
        /// deserialization instead of collapsing into a base payload.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "@xsi:type")]
        pub enum #family {
            #(#idents(#idents),)*
        }

        impl #family {
            /// Returns the schema type name of the active fault.
            pub fn type_name(&self) -> &'static str {
                match self {
                    #(Self::#idents(_) => #names,)*
                }
            }
        }

        #(#from_impls)*
    }
}
