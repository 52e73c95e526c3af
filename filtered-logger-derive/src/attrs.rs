//! Parsing of `#[log_row(...)]` container and field attributes.
//!
//! | Attribute                           | Applies to | Effect                                  |
//! |-------------------------------------|------------|-----------------------------------------|
//! | `#[log_row(debug)]`                 | struct     | Also derive a `Debug` hiding sensitive fields |
//! | `#[log_row(separator = "|")]`       | struct     | Terminator written after each value     |
//! | `#[log_row(sensitive)]`             | field      | Listed in `SENSITIVE_COLUMNS`           |
//! | `#[log_row(rename = "col")]`        | field      | Column name used in the message         |
//! | `#[log_row(skip)]`                  | field      | Not rendered, not a column              |

use syn::{Attribute, Ident, LitStr, Result, ext::IdentExt};

const ATTR: &str = "log_row";
const DEFAULT_SEPARATOR: &str = ";";

pub(crate) struct ContainerOptions {
    pub(crate) debug: bool,
    pub(crate) separator: String,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions {
        debug: false,
        separator: DEFAULT_SEPARATOR.to_string(),
    };

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("debug") {
                options.debug = true;
                Ok(())
            } else if meta.path.is_ident("separator") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "separator must not be empty"));
                }
                options.separator = lit.value();
                Ok(())
            } else {
                Err(meta.error("unsupported container option, expected `debug` or `separator`"))
            }
        })?;
    }

    Ok(options)
}

pub(crate) struct FieldOptions {
    pub(crate) column: String,
    pub(crate) sensitive: bool,
    pub(crate) skip: bool,
}

pub(crate) fn parse_field_options(ident: &Ident, attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions {
        column: ident.unraw().to_string(),
        sensitive: false,
        skip: false,
    };
    let mut renamed = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("sensitive") {
                options.sensitive = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                if renamed {
                    return Err(meta.error("duplicate `rename`"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "column name must not be empty"));
                }
                options.column = lit.value();
                renamed = true;
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported field option, expected `sensitive`, `rename` or `skip`",
                ))
            }
        })?;

        if options.skip && (options.sensitive || renamed) {
            return Err(syn::Error::new_spanned(
                attr,
                "`skip` cannot be combined with `sensitive` or `rename`",
            ));
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn field(attrs: Vec<Attribute>) -> Result<FieldOptions> {
        parse_field_options(&parse_quote!(r#type), &attrs)
    }

    #[test]
    fn container_defaults() {
        let options = parse_container_options(&[]).unwrap();
        assert!(!options.debug);
        assert_eq!(options.separator, ";");
    }

    #[test]
    fn container_debug_and_separator() {
        let options = parse_container_options(&[
            parse_quote!(#[log_row(debug)]),
            parse_quote!(#[log_row(separator = "|")]),
        ])
        .unwrap();
        assert!(options.debug);
        assert_eq!(options.separator, "|");
    }

    #[test]
    fn container_rejects_unknown_and_empty() {
        assert!(parse_container_options(&[parse_quote!(#[log_row(pretty)])]).is_err());
        assert!(parse_container_options(&[parse_quote!(#[log_row(separator = "")])]).is_err());
    }

    #[test]
    fn raw_identifiers_are_unrawed() {
        let options = field(Vec::new()).unwrap();
        assert_eq!(options.column, "type");
        assert!(!options.sensitive);
        assert!(!options.skip);
    }

    #[test]
    fn sensitive_and_rename() {
        let options = field(vec![parse_quote!(#[log_row(sensitive, rename = "kind")])]).unwrap();
        assert!(options.sensitive);
        assert_eq!(options.column, "kind");
    }

    #[test]
    fn ignores_other_attributes() {
        let options = field(vec![parse_quote!(#[serde(rename = "kind")])]).unwrap();
        assert_eq!(options.column, "type");
    }

    #[test]
    fn invalid_field_options() {
        assert!(field(vec![parse_quote!(#[log_row(skip, sensitive)])]).is_err());
        assert!(field(vec![parse_quote!(#[log_row(rename = "a", rename = "b")])]).is_err());
        assert!(field(vec![parse_quote!(#[log_row(redact)])]).is_err());
    }
}
