//! Implementation of the `#[derive(Bindable)]` macro.
//!
//! Generates a `bindery::Bindable` impl plus attribute-name constants from
//! struct field annotations.

mod attrs;
mod derive;

pub use derive::bindable_derive_impl;
