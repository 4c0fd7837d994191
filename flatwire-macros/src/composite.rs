//! `#[derive(Composite)]` expansion.
//!
//! Generates one straight-line encode, decode and size function per schema:
//! one cursor call per field, in declaration order.

use darling::ast::{Data, Style};
use darling::{FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, Index, Member};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(wire), supports(struct_named, struct_tuple, struct_unit))]
pub(crate) struct CompositeArgs {
    ident: syn::Ident,
    generics: syn::Generics,
    data: Data<(), CompositeField>,
    /// Path to the flatwire crate.
    #[darling(default, rename = "crate")]
    krate: Option<syn::Path>,
}

#[derive(Debug, FromField)]
#[darling(attributes(wire))]
pub(crate) struct CompositeField {
    ident: Option<syn::Ident>,
    /// If true, the field is not part of the wire layout.
    #[darling(default)]
    skip: bool,
}

pub(crate) fn expand(input: &DeriveInput) -> darling::Result<TokenStream> {
    let args = CompositeArgs::from_derive_input(input)?;
    let name = &args.ident;
    let krate: syn::Path = args.krate.clone().unwrap_or_else(|| parse_quote!(::flatwire));
    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    let fields = args
        .data
        .take_struct()
        .ok_or_else(|| darling::Error::custom("Composite can only be derived for structs"))?;

    let members: Vec<Member> = fields
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.skip)
        .map(|(i, f)| match (&fields.style, &f.ident) {
            (Style::Struct, Some(ident)) => Member::Named(ident.clone()),
            _ => Member::Unnamed(Index::from(i)),
        })
        .collect();

    let field_encoders = members.iter().map(|m| {
        quote! {
            cursor.write_field(&self.#m)?;
        }
    });

    let field_decoders = members.iter().map(|m| {
        quote! {
            cursor.read_field(&mut self.#m)?;
        }
    });

    let field_sizes = members.iter().map(|m| {
        quote! {
            #krate::Field::size(&self.#m)
        }
    });

    Ok(quote! {
        impl #impl_generics #krate::Composite for #name #ty_generics #where_clause {
            #[allow(unused_mut)]
            fn encode(&self, dest: &mut [u8]) -> ::core::result::Result<usize, #krate::Error> {
                let mut cursor = #krate::WriteCursor::new(dest);
                #(#field_encoders)*
                ::core::result::Result::Ok(cursor.len())
            }

            #[allow(unused_mut)]
            fn decode(&mut self, src: &[u8]) -> ::core::result::Result<usize, #krate::Error> {
                let mut cursor = #krate::ReadCursor::new(src);
                #(#field_decoders)*
                ::core::result::Result::Ok(cursor.len())
            }

            fn packed_size(&self) -> usize {
                0 #(+ #field_sizes)*
            }
        }
    })
}
