//! Derive macros for `flatwire`.

extern crate proc_macro;

mod composite;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Implement `flatwire::Composite` for a struct.
///
/// Fields are encoded in declaration order, each through the field cursor, so
/// every field type must implement `flatwire::Field`. Supported attributes:
///
/// - `#[wire(crate = "path")]` on the struct: path to the `flatwire` crate, for
///   use through a re-export.
/// - `#[wire(skip)]` on a field: keep the field off the wire. It is neither
///   written, read, nor counted.
#[proc_macro_derive(Composite, attributes(wire))]
pub fn derive_composite_fn(item: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(item as DeriveInput);
    match composite::expand(&ast) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.write_errors().into(),
    }
}
