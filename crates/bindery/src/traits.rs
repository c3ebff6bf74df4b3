//! The capability trait bound functions dispatch through.
//!
//! [`Bindable`] is the "invoke by name" seam: any type exposing the
//! attributes and methods a spec names qualifies, regardless of its declared
//! type. It is typically derived with `#[derive(Bindable)]` from the
//! `bindery-macros` crate for plain attribute structs, and implemented by
//! hand when a type has real methods to expose.

use crate::error::{BindError, Result};
use crate::value::Value;

/// Name-addressed access to a receiver's attributes and methods.
///
/// The three methods map onto the three capabilities specs can demand:
///
/// - [`read_attr`](Bindable::read_attr): zero-or-more-argument accessors and
///   non-mutating methods. Backs `filter` and `get`.
/// - [`write_attr`](Bindable::write_attr): the writer capability. Backs
///   `set`. Defaults to [`BindError::AttributeNotWritable`] for read-only
///   types.
/// - [`invoke`](Bindable::invoke): possibly-mutating methods. Backs `call`.
///   Defaults to forwarding to `read_attr`, so a type without mutating
///   methods implements nothing extra.
///
/// Implementations raise the dispatch errors themselves - unknown names,
/// wrong argument counts, wrong argument kinds - and the library passes them
/// through unwrapped.
///
/// # Manual implementation
///
/// ```
/// use bindery::{Bindable, BindError, Result, Value};
///
/// struct Task {
///     title: String,
///     done: bool,
/// }
///
/// impl Bindable for Task {
///     fn read_attr(&self, name: &str, args: &[Value]) -> Result<Value> {
///         if !args.is_empty() {
///             return Err(BindError::arity(name, 0, args.len()));
///         }
///         match name {
///             "title" => Ok(Value::from(self.title.clone())),
///             "done" => Ok(Value::from(self.done)),
///             _ => Err(BindError::attribute_not_found::<Task>(name)),
///         }
///     }
///
///     fn write_attr(&mut self, name: &str, value: Value) -> Result<()> {
///         match name {
///             "done" => {
///                 self.done = bool::try_from(value)?;
///                 Ok(())
///             }
///             _ => Err(BindError::not_writable::<Task>(name)),
///         }
///     }
/// }
///
/// let task = Task { title: "write docs".into(), done: false };
/// assert_eq!(task.read_attr("done", &[]).unwrap(), Value::from(false));
/// ```
pub trait Bindable {
    /// Reads the named attribute, or invokes the named non-mutating method,
    /// with the given arguments.
    ///
    /// Plain attributes take no arguments; implementations reject a
    /// non-empty `args` with [`BindError::ArityMismatch`]. Unknown names
    /// raise [`BindError::AttributeNotFound`].
    fn read_attr(&self, name: &str, args: &[Value]) -> Result<Value>;

    /// Writes the named attribute.
    ///
    /// The default implementation exposes no writers at all.
    fn write_attr(&mut self, name: &str, value: Value) -> Result<()> {
        let _ = value;
        Err(BindError::not_writable::<Self>(name))
    }

    /// Invokes the named method, which may mutate the receiver, and returns
    /// its result.
    ///
    /// The default forwards to [`read_attr`](Bindable::read_attr), so
    /// non-mutating methods are invokable through `call` without extra code.
    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        self.read_attr(name, args)
    }
}
