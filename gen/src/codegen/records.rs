//! Record binding generation.
//!
//! Schema complex types become plain structs. Extension chains are
//! flattened: a record carries every field of its base chain (outermost
//! base first) followed by its own, matching the flat element order of
//! the XML wire form.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use vimbind_model::{ComplexType, Field, FieldType, Occurrence, Primitive, SchemaModel};

use crate::errors::GeneratorError;
use crate::naming::field_ident;

/// Generates the Rust struct for a schema complex type.
///
/// Field cardinality maps onto the type system directly:
///
/// - required elements are plain fields
/// - optional elements are `Option<T>`, skipped when absent
/// - repeated elements are `Vec<T>`, defaulting to empty
///
/// Every field carries a `#[serde(rename = "...")]` back to its wire name,
/// so keyword escaping (`type` -> `type_`) never leaks onto the wire.
///
/// ## Errors
///
/// Propagates base-chain resolution failures from the model.
pub fn generate_record(
    schema: &SchemaModel,
    ty: &ComplexType,
) -> Result<TokenStream, GeneratorError> {
    let ident = format_ident!("{}", ty.name);
    let name_str = ty.name.as_str();

    let type_doc = ty.doc.as_ref().map(|d| {
        let text = format!(" {}", d);
        quote! { #[doc = #text] }
    });

    let fields: Vec<TokenStream> = schema
        .resolved_fields(&ty.name)?
        .into_iter()
        .map(generate_field)
        .collect();

    Ok(quote! {
        #type_doc
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename = #name_str)]
        pub struct #ident {
            #(#fields)*
        }
    })
}

fn generate_field(field: &Field) -> TokenStream {
    let ident = format_ident!("{}", field_ident(&field.name));
    let wire = field.name.as_str();
    let base = type_tokens(&field.ty);

    let doc = field.doc.as_ref().map(|d| {
        let text = format!(" {}", d);
        quote! { #[doc = #text] }
    });

    match field.occurrence {
        Occurrence::Required => quote! {
            #doc
            #[serde(rename = #wire)]
            pub #ident: #base,
        },
        Occurrence::Optional => quote! {
            #doc
            #[serde(rename = #wire, skip_serializing_if = "Option::is_none")]
            pub #ident: Option<#base>,
        },
        Occurrence::Repeated => quote! {
            #doc
            #[serde(rename = #wire, default, skip_serializing_if = "Vec::is_empty")]
            pub #ident: Vec<#base>,
        },
    }
}

/// Maps a model field type onto Rust type tokens.
///
/// `dateTime` and `anyType` stay `String`: the bindings preserve the wire
/// text rather than committing to a calendar library.
fn type_tokens(ty: &FieldType) -> TokenStream {
    match ty {
        FieldType::Named(name) => {
            let ident = format_ident!("{}", name);
            quote! { #ident }
        }
        FieldType::Primitive(p) => match p {
            Primitive::String | Primitive::DateTime | Primitive::AnyType => quote! { String },
            Primitive::Boolean => quote! { bool },
            Primitive::Byte => quote! { i8 },
            Primitive::Short => quote! { i16 },
            Primitive::Int => quote! { i32 },
            Primitive::Long => quote! { i64 },
            Primitive::Float => quote! { f32 },
            Primitive::Double => quote! { f64 },
            Primitive::Base64Binary => quote! { Vec<u8> },
        },
    }
}
