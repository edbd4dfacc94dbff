//! Derive macro for the `formbind` crate.
//!
//! This crate provides `#[derive(Form)]`, which describes a struct's fields to
//! the form decoder: their key names, their types' shapes, and how to reach
//! them inside a type-erased value.

use proc_macro::TokenStream;

mod derive_form;

/// Derives `formbind::Form` for a struct.
///
/// Only `pub` fields and tuple-struct fields are decodable. Field keys come
/// from `#[form(rename = "..")]`, then `#[serde(rename = "..")]`, then the
/// field's identifier.
///
/// # Example
///
/// ```ignore
/// #[derive(Form)]
/// struct Signup {
///     #[form(rename = "email")]
///     pub address: String,
///     pub tags: Vec<String>,
///     #[serde(skip)]
///     pub internal: u32,
/// }
/// ```
#[proc_macro_derive(Form, attributes(form, serde))]
pub fn derive_form(input: TokenStream) -> TokenStream {
    derive_form::derive_form(input.into()).into()
}
