//! `LogRow` derivation for structs with named fields.
//!
//! Each rendered field becomes one `column=value<separator>` segment; segments
//! are joined with a single space. The separator is also emitted as
//! `LogRow::SEPARATOR` so the row's filter stops values at it. `Option` fields
//! render `Some(v)` as `v` and `None` as an empty value.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{Fields, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    attrs::{ContainerOptions, parse_field_options},
    generics::{add_debug_bounds, add_display_bounds, collect_generics_from_type},
    types::{is_phantom_data, option_inner},
};

pub(crate) fn derive_struct(
    name: &Ident,
    fields: Fields,
    generics: &syn::Generics,
    options: &ContainerOptions,
    crate_root: &TokenStream,
) -> Result<TokenStream> {
    let fields = match fields {
        Fields::Named(fields) => fields,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "LogRow requires a struct with named fields",
            ));
        }
    };

    let mut columns = Vec::new();
    let mut sensitive_columns = Vec::new();
    let mut writes = Vec::new();
    let mut debug_fields = Vec::new();
    let mut display_generics = Vec::new();
    let mut debug_generics = Vec::new();

    for field in fields.named {
        let Some(ident) = field.ident else {
            continue;
        };
        let field_options = parse_field_options(&ident, &field.attrs)?;
        let ty = &field.ty;

        let debug_name = ident.unraw().to_string();
        if field_options.sensitive {
            debug_fields.push(quote! {
                .field(#debug_name, &#crate_root::REDACTION)
            });
        } else {
            if !is_phantom_data(ty) {
                collect_generics_from_type(ty, generics, &mut debug_generics);
            }
            debug_fields.push(quote! {
                .field(#debug_name, &self.#ident)
            });
        }

        if field_options.skip {
            continue;
        }

        if !columns.is_empty() {
            writes.push(quote! { f.write_str(" ")?; });
        }
        let prefix = format!("{}=", field_options.column);
        writes.push(quote! { f.write_str(#prefix)?; });
        match option_inner(ty) {
            Some(inner) => {
                collect_generics_from_type(inner, generics, &mut display_generics);
                writes.push(quote! {
                    if let ::core::option::Option::Some(value) = &self.#ident {
                        ::core::fmt::Display::fmt(value, f)?;
                    }
                });
            }
            None => {
                collect_generics_from_type(ty, generics, &mut display_generics);
                writes.push(quote! {
                    ::core::fmt::Display::fmt(&self.#ident, f)?;
                });
            }
        }
        writes.push(quote! { f.write_str(Self::SEPARATOR)?; });

        if field_options.sensitive {
            sensitive_columns.push(field_options.column.clone());
        }
        columns.push(field_options.column);
    }

    let separator = &options.separator;
    let row_generics = add_display_bounds(generics.clone(), &display_generics);
    let (impl_generics, ty_generics, where_clause) = row_generics.split_for_impl();
    let row_impl = quote! {
        impl #impl_generics #crate_root::LogRow for #name #ty_generics #where_clause {
            const COLUMNS: &'static [&'static str] = &[#(#columns),*];
            const SENSITIVE_COLUMNS: &'static [&'static str] = &[#(#sensitive_columns),*];
            const SEPARATOR: &'static str = #separator;

            fn fmt_message(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #(#writes)*
                ::core::result::Result::Ok(())
            }
        }
    };

    if !options.debug {
        return Ok(row_impl);
    }

    let debug_generics = add_debug_bounds(generics.clone(), &debug_generics);
    let (impl_generics, ty_generics, where_clause) = debug_generics.split_for_impl();
    let name_str = name.to_string();
    Ok(quote! {
        #row_impl

        impl #impl_generics ::core::fmt::Debug for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(#name_str)
                    #(#debug_fields)*
                    .finish()
            }
        }
    })
}
