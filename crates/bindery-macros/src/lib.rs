//! Proc macros for bindery.
//!
//! This crate provides the [`Bindable`] derive macro, which generates the
//! `bindery::Bindable` capability impl for structs with named fields so
//! they can be driven by bindery's `filter`/`get`/`set`/`call` builders
//! without hand-written dispatch.

mod bindable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `bindery::Bindable` for a struct with named fields.
///
/// Every non-skipped field becomes a readable, writable attribute addressed
/// by its field name, and a `pub const` name constant in
/// SCREAMING_SNAKE_CASE is generated for typo-safe spec building.
///
/// Reads convert the field through `bindery::Value: From<FieldType>` (the
/// field must be `Clone`); writes convert back through
/// `FieldType: TryFrom<bindery::Value>`, raising a type mismatch when the
/// payload has the wrong kind. Reads reject arguments - plain attributes
/// are zero-argument accessors. Methods are not derivable: a type with real
/// behavior to expose implements `Bindable` by hand (or overrides `invoke`
/// on a manual impl).
///
/// # Field Attributes
///
/// - `#[bind(skip)]` - leave the field out of the bound surface entirely;
///   reading it raises `AttributeNotFound`.
/// - `#[bind(readonly)]` - expose the reader but no writer; writing raises
///   `AttributeNotWritable`.
/// - `#[bind(rename = "...")]` - bind under a custom name instead of the
///   field name.
///
/// # Example
///
/// ```ignore
/// use bindery::{filter, set, FilterSpec, SetSpec};
/// use bindery_macros::Bindable;
///
/// #[derive(Bindable)]
/// struct Person {
///     name: String,
///     age: i64,
///     #[bind(readonly)]
///     id: u64,
/// }
///
/// let mut person = Person { name: "John".into(), age: 30, id: 1 };
///
/// let adult = filter(FilterSpec::new().attr(Person::AGE, 18..=130));
/// assert!(adult(&person).unwrap());
///
/// let rename = set(SetSpec::new().attr(Person::NAME, "Jane"));
/// rename(&mut person).unwrap();
/// assert_eq!(person.name, "Jane");
/// ```
#[proc_macro_derive(Bindable, attributes(bind))]
pub fn bindable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    bindable::bindable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
