//! Implementation of the `#[derive(Bindable)]` macro.
//!
//! The generated impl exposes every non-skipped named field as a readable,
//! writable attribute, plus a `pub const` name constant per field for
//! typo-safe spec building. Value conversions ride on
//! `bindery::Value: From<FieldType>` for reads and
//! `FieldType: TryFrom<bindery::Value>` for writes, so no per-field type
//! annotation is required.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_bind_attrs;

/// Main implementation of the Bindable derive macro.
pub fn bindable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Bindable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Bindable can only be derived for structs",
            ))
        }
    };

    let mut constants: Vec<TokenStream> = Vec::new();
    let mut read_arms: Vec<TokenStream> = Vec::new();
    let mut write_arms: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attr = parse_bind_attrs(&field.attrs)?;
        if attr.skip {
            continue;
        }

        let bound_name = attr.rename.unwrap_or_else(|| field_ident.to_string());
        let const_ident = format_ident!("{}", to_screaming_snake_case(&bound_name));

        constants.push(quote! {
            /// Attribute name constant for typo-safe specs.
            pub const #const_ident: &'static str = #bound_name;
        });

        // Plain attributes are zero-argument accessors.
        read_arms.push(quote! {
            #bound_name => {
                if !args.is_empty() {
                    return Err(::bindery::BindError::arity(name, 0, args.len()));
                }
                Ok(::bindery::Value::from(self.#field_ident.clone()))
            }
        });

        if attr.readonly {
            write_arms.push(quote! {
                #bound_name => Err(::bindery::BindError::not_writable::<Self>(name)),
            });
        } else {
            let field_ty = &field.ty;
            write_arms.push(quote! {
                #bound_name => {
                    self.#field_ident =
                        <#field_ty as ::core::convert::TryFrom<::bindery::Value>>::try_from(value)?;
                    Ok(())
                }
            });
        }
    }

    let expanded = quote! {
        impl #struct_name {
            #(#constants)*
        }

        impl ::bindery::Bindable for #struct_name {
            fn read_attr(
                &self,
                name: &str,
                args: &[::bindery::Value],
            ) -> ::bindery::Result<::bindery::Value> {
                match name {
                    #(#read_arms)*
                    _ => Err(::bindery::BindError::attribute_not_found::<Self>(name)),
                }
            }

            fn write_attr(
                &mut self,
                name: &str,
                value: ::bindery::Value,
            ) -> ::bindery::Result<()> {
                match name {
                    #(#write_arms)*
                    _ => Err(::bindery::BindError::not_writable::<Self>(name)),
                }
            }
        }
    };

    Ok(expanded)
}

/// Converts a bound name to SCREAMING_SNAKE_CASE for the constant.
fn to_screaming_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;

    for c in name.chars() {
        match c {
            '_' | '-' => {
                out.push('_');
                previous_lower = false;
            }
            upper if upper.is_uppercase() => {
                if previous_lower {
                    out.push('_');
                }
                out.push(upper);
                previous_lower = false;
            }
            other => {
                out.push(other.to_ascii_uppercase());
                previous_lower = true;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("name"), "NAME");
        assert_eq!(to_screaming_snake_case("created_at"), "CREATED_AT");
        assert_eq!(to_screaming_snake_case("createdAt"), "CREATED_AT");
        assert_eq!(to_screaming_snake_case("my-field"), "MY_FIELD");
    }

    #[test]
    fn rejects_tuple_structs() {
        let input: DeriveInput = syn::parse_str("struct Point(i64, i64);").unwrap();
        let err = bindable_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn rejects_enums() {
        let input: DeriveInput = syn::parse_str("enum Choice { A, B }").unwrap();
        let err = bindable_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("structs"));
    }

    #[test]
    fn generates_constants_and_both_impls() {
        let input: DeriveInput = syn::parse_str(
            r#"
            struct Person {
                name: String,
                #[bind(readonly)]
                id: u64,
                #[bind(skip)]
                secret: String,
            }
            "#,
        )
        .unwrap();

        let output = bindable_derive_impl(input).unwrap().to_string();
        assert!(output.contains("NAME"));
        assert!(output.contains("ID"));
        assert!(!output.contains("SECRET"));
        assert!(output.contains("read_attr"));
        assert!(output.contains("write_attr"));
    }
}
