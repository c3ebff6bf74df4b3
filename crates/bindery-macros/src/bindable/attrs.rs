//! Attribute parsing for the Bindable derive macro.
//!
//! Parses the `#[bind(...)]` field attributes: `skip`, `readonly`, and
//! `rename = "..."`.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[bind(...)]`.
#[derive(Debug, Clone, Default)]
pub struct BindAttr {
    /// Leave this field out of the bound surface entirely.
    pub skip: bool,
    /// Expose a reader but no writer.
    pub readonly: bool,
    /// Custom bound name (default: the field name).
    pub rename: Option<String>,
}

impl Parse for BindAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = BindAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(path) if path.is_ident("skip") => attr.skip = true,
                Meta::Path(path) if path.is_ident("readonly") => attr.readonly = true,

                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                other => {
                    return Err(Error::new(
                        other.span(),
                        "unknown bind attribute. Expected: skip, readonly, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extracts `#[bind(...)]` attributes from a field's attribute list.
pub fn parse_bind_attrs(attrs: &[Attribute]) -> Result<BindAttr> {
    for attr in attrs {
        if attr.path().is_ident("bind") {
            return attr.parse_args::<BindAttr>();
        }
    }
    Ok(BindAttr::default())
}
