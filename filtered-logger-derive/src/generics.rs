//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for type parameters that appear in rendered fields.
//! `PhantomData<T>` never carries data, so `T` gets no bound from it.

use syn::{Ident, parse_quote};

fn push_if_generic(ident: &Ident, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if generics.type_params().any(|param| param.ident == *ident)
        && !result.iter().any(|g| g == ident)
    {
        result.push(ident.clone());
    }
}

fn visit_path_arguments(
    args: &syn::PathArguments,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match args {
        syn::PathArguments::AngleBracketed(args) => {
            for arg in &args.args {
                match arg {
                    syn::GenericArgument::Type(inner_ty) => {
                        visit_type(inner_ty, generics, result);
                    }
                    syn::GenericArgument::AssocType(assoc) => {
                        visit_type(&assoc.ty, generics, result);
                    }
                    _ => {}
                }
            }
        }
        syn::PathArguments::Parenthesized(args) => {
            for input in &args.inputs {
                visit_type(input, generics, result);
            }
            if let syn::ReturnType::Type(_, output) = &args.output {
                visit_type(output, generics, result);
            }
        }
        syn::PathArguments::None => {}
    }
}

fn visit_path(path: &syn::Path, generics: &syn::Generics, result: &mut Vec<Ident>) {
    if path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "PhantomData")
    {
        return;
    }

    for segment in &path.segments {
        push_if_generic(&segment.ident, generics, result);
        visit_path_arguments(&segment.arguments, generics, result);
    }
}

fn visit_type(ty: &syn::Type, generics: &syn::Generics, result: &mut Vec<Ident>) {
    match ty {
        syn::Type::Path(type_path) => {
            if let Some(qself) = &type_path.qself {
                visit_type(&qself.ty, generics, result);
            }
            visit_path(&type_path.path, generics, result);
        }
        syn::Type::Reference(reference) => visit_type(&reference.elem, generics, result),
        syn::Type::Slice(slice) => visit_type(&slice.elem, generics, result),
        syn::Type::Array(array) => visit_type(&array.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                visit_type(elem, generics, result);
            }
        }
        syn::Type::Paren(paren) => visit_type(&paren.elem, generics, result),
        syn::Type::Group(group) => visit_type(&group.elem, generics, result),
        _ => {}
    }
}

/// Records every type parameter of `generics` that appears in `ty`.
pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    visit_type(ty, generics, result);
}

/// Adds `Display` bounds to generic parameters used in rendered fields.
pub(crate) fn add_display_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(::core::fmt::Display));
        }
    }
    generics
}

/// Adds `Debug` bounds to generic parameters printed by the generated `Debug`.
pub(crate) fn add_debug_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(::core::fmt::Debug));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(ty: syn::Type, generics: &syn::Generics) -> Vec<String> {
        let mut result = Vec::new();
        collect_generics_from_type(&ty, generics, &mut result);
        result.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn finds_nested_parameters_once() {
        let generics: syn::Generics = parse_quote!(<T, U, V>);
        assert_eq!(
            used(parse_quote!(Option<(T, Vec<T>, U)>), &generics),
            ["T", "U"]
        );
    }

    #[test]
    fn skips_phantom_data() {
        let generics: syn::Generics = parse_quote!(<T>);
        assert!(used(parse_quote!(std::marker::PhantomData<T>), &generics).is_empty());
    }

    #[test]
    fn ignores_non_parameter_idents() {
        let generics: syn::Generics = parse_quote!(<T>);
        assert!(used(parse_quote!(String), &generics).is_empty());
    }

    #[test]
    fn display_bound_only_on_used_parameters() {
        let generics: syn::Generics = parse_quote!(<T, U>);
        let used: Vec<Ident> = vec![parse_quote!(U)];
        let bounded = add_display_bounds(generics, &used);
        let params: Vec<_> = bounded.type_params().collect();
        assert!(params[0].bounds.is_empty());
        assert_eq!(params[1].bounds.len(), 1);
    }
}
