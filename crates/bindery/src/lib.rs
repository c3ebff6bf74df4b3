//! Bindery - declarative builders for reusable unary functions.
//!
//! Bindery turns a declarative description of attribute names, matcher
//! values, or method invocations into a single-argument closure, ready to
//! hand to whatever traversal the caller runs (`filter`, `map`, `sort_by`,
//! a plain loop). It replaces the repetitive inline closures that pile up
//! when processing collections of objects exposing named properties.
//!
//! Four builders, one per job:
//!
//! - [`filter`] (alias [`fltr`]) - a predicate testing attribute values
//!   against literals, ranges, regexes, type tokens, or custom predicates
//! - [`get`] - a reader collecting one or several attribute values
//! - [`set`] - a writer applying bulk in-place attribute mutation
//! - [`call`] - an invoker dispatching one or several methods, every one of
//!   them against the original receiver
//!
//! Receivers qualify by capability, not by declared type: anything
//! implementing [`Bindable`] - derived with `#[derive(Bindable)]` from
//! `bindery-macros`, written by hand, or the built-in `String` impl - can
//! be driven by any spec naming capabilities it exposes.
//!
//! # Quick Start
//!
//! ```
//! use bindery::{filter, get, Bindable, BindError, FilterSpec, Invocations, Result, Value};
//!
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Bindable for Person {
//!     fn read_attr(&self, name: &str, args: &[Value]) -> Result<Value> {
//!         if !args.is_empty() {
//!             return Err(BindError::arity(name, 0, args.len()));
//!         }
//!         match name {
//!             "name" => Ok(Value::from(self.name.clone())),
//!             "age" => Ok(Value::from(self.age)),
//!             _ => Err(BindError::attribute_not_found::<Person>(name)),
//!         }
//!     }
//! }
//!
//! let people = vec![
//!     Person { name: "Jane".into(), age: 23 },
//!     Person { name: "Judith".into(), age: 16 },
//! ];
//!
//! // One predicate, reused across the whole collection.
//! let adult = filter(FilterSpec::new().attr("age", 18..=130));
//! let adults: Vec<&Person> = people
//!     .iter()
//!     .filter(|p| adult(*p).unwrap_or(false))
//!     .collect();
//! assert_eq!(adults.len(), 1);
//! assert_eq!(adults[0].name, "Jane");
//!
//! // Multi-entry readers return ordered results, handy as sort keys.
//! let key = get(Invocations::new().method("age").method("name"));
//! assert_eq!(key(&people[1]).unwrap().len(), 2);
//! ```
//!
//! # Semantics
//!
//! - **filter**: logical AND over all entries, short-circuiting; matchers
//!   are side-effect-free and the receiver is never mutated.
//! - **get/call result collapsing**: a one-entry spec returns the bare
//!   value ([`Fetched::One`]); two or more entries return the ordered
//!   sequence ([`Fetched::Many`]), one result per entry, in spec order.
//! - **call dispatches on the original receiver**: results are never
//!   chained. Later entries observe earlier side effects on the receiver,
//!   but each invocation targets the same object.
//! - **set mutates in place**, entry by entry in spec order.
//! - **Errors fail fast**: the first unknown name, missing writer, or wrong
//!   argument count aborts the application with no partial results. See
//!   [`BindError`].
//!
//! # Matcher values
//!
//! | Matcher | Test |
//! |---------|------|
//! | literal (`"female"`, `4`, `true`) | equality |
//! | range (`18..30`, `1..=5`) | membership |
//! | `Regex` | pattern search |
//! | [`Kind`] | type test |
//! | [`Matcher::custom`] | arbitrary predicate |
//!
//! Bound functions are stateless `Fn` closures over their spec: reusable
//! across receivers and safe to share across threads. Mutation, when any,
//! happens on the argument object, never inside the closure.

mod bind;
mod error;
mod matcher;
mod spec;
mod strings;
mod traits;
mod value;

// Re-export public API
pub use bind::{call, collapse, filter, filter as fltr, get, set, Fetched};
pub use error::{BindError, Result};
pub use matcher::Matcher;
pub use spec::{FilterSpec, Invocation, Invocations, SetSpec};
pub use traits::Bindable;
pub use value::{Kind, Number, Value};
