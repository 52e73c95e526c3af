//! Derive macro for `filtered-logger`.
//!
//! `#[derive(LogRow)]` renders a struct as a `column=value;` log message and
//! lists the columns marked `#[log_row(sensitive)]`. With
//! `#[log_row(debug)]` it also emits a `Debug` impl that prints sensitive
//! fields as the redaction token.
//!
//! See the `attrs` module for the accepted options.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod attrs;
mod derive_struct;
mod generics;
mod types;

/// Derives `filtered_logger::LogRow` for a struct with named fields.
///
/// ```ignore
/// #[derive(LogRow)]
/// #[log_row(debug)]
/// struct UserRow {
///     #[log_row(sensitive)]
///     email: String,
///     ip: String,
/// }
/// ```
#[proc_macro_derive(LogRow, attributes(log_row))]
pub fn derive_log_row(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let options = attrs::parse_container_options(&attrs)?;
    match data {
        Data::Struct(data) => {
            derive_struct::derive_struct(&ident, data.fields, &generics, &options, &crate_root())
        }
        Data::Enum(data) => Err(syn::Error::new(
            data.enum_token.span,
            "LogRow cannot be derived for enums",
        )),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span,
            "LogRow cannot be derived for unions",
        )),
    }
}

/// Path to the `filtered-logger` crate as seen from the expansion site.
///
/// The library declares `extern crate self as filtered_logger`, so the
/// absolute path also resolves inside it.
fn crate_root() -> TokenStream {
    match crate_name("filtered-logger") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::filtered_logger },
    }
}
