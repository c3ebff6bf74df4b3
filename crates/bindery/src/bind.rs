//! The four builder functions and the collapsed result type.
//!
//! Each builder takes a finished spec and returns a reusable unary closure -
//! the bound function - meant to be handed to a caller-supplied traversal
//! (`filter`, `map`, `sort_by`, a plain loop). Bound functions are `Fn`
//! closures over immutable specs: safe to reuse across receivers and to
//! share across threads. Within one application, entries are processed in
//! spec order.

use std::cmp::Ordering;

use crate::error::Result;
use crate::spec::{FilterSpec, Invocations, SetSpec};
use crate::traits::Bindable;
use crate::value::Value;

/// Builds a predicate testing every spec entry against the receiver.
///
/// Each entry reads the named zero-argument accessor and tests the matcher
/// against the result. The predicate is true iff all entries match; it
/// short-circuits on the first non-match. The receiver is never mutated.
/// An unknown accessor surfaces as [`BindError::AttributeNotFound`].
///
/// Also exported under the short alias `fltr`.
///
/// # Example
///
/// ```
/// use bindery::{filter, FilterSpec};
///
/// let four_long = filter(FilterSpec::new().attr("length", 4));
/// let words = vec!["test".to_string(), "x+y".to_string(), "fox".to_string()];
///
/// let kept: Vec<&String> = words
///     .iter()
///     .filter(|w| four_long(*w).unwrap_or(false))
///     .collect();
/// assert_eq!(kept, [&words[0]]);
/// ```
///
/// [`BindError::AttributeNotFound`]: crate::BindError::AttributeNotFound
pub fn filter<T: Bindable>(spec: FilterSpec) -> impl Fn(&T) -> Result<bool> {
    move |receiver: &T| {
        for (name, matcher) in spec.entries() {
            let actual = receiver.read_attr(name, &[])?;
            if !matcher.matches(&actual) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Builds a reader collecting one value per spec entry, in spec order.
///
/// Entries may name zero-argument accessors or carry argument lists for
/// parameterized accessors. A single-entry spec yields [`Fetched::One`]
/// with the bare value; anything else yields [`Fetched::Many`].
///
/// # Example
///
/// ```
/// use bindery::{get, Invocations, Value, Fetched};
///
/// let cases = get(Invocations::new().method("upcase").method("downcase"));
/// let word = "Test".to_string();
///
/// assert_eq!(
///     cases(&word).unwrap(),
///     Fetched::Many(vec![Value::from("TEST"), Value::from("test")])
/// );
/// ```
pub fn get<T: Bindable>(spec: Invocations) -> impl Fn(&T) -> Result<Fetched> {
    move |receiver: &T| {
        let mut results = Vec::with_capacity(spec.len());
        for invocation in spec.entries() {
            results.push(receiver.read_attr(&invocation.name, &invocation.args)?);
        }
        Ok(collapse(results))
    }
}

/// Builds a writer applying every spec entry to the receiver, in spec order.
///
/// Writes happen in the given order; a writer with side effects observes
/// earlier writes. The receiver is mutated in place - under `&mut` there is
/// no other object, so identity is preserved structurally. A missing writer
/// surfaces as [`BindError::AttributeNotWritable`] and aborts the remaining
/// writes.
///
/// [`BindError::AttributeNotWritable`]: crate::BindError::AttributeNotWritable
pub fn set<T: Bindable>(spec: SetSpec) -> impl Fn(&mut T) -> Result<()> {
    move |receiver: &mut T| {
        for (name, value) in spec.entries() {
            receiver.write_attr(name, value.clone())?;
        }
        Ok(())
    }
}

/// Builds an invoker dispatching every spec entry **on the original
/// receiver**, in spec order.
///
/// Results are never chained: each invocation targets the receiver itself,
/// not the result of a previous invocation. Mutating methods do mutate the
/// receiver, so later entries observe those side effects - but they are
/// still dispatched on the same object. Per-entry results collect in spec
/// order and collapse like [`get`].
///
/// # Example
///
/// ```
/// use bindery::{call, Invocations, Value, Fetched};
///
/// // `sub` runs first, yet `index` still searches the original contents.
/// let probe = call(
///     Invocations::new()
///         .method_with("sub", ["x", "y"])
///         .method_with("index", ["y"]),
/// );
/// let mut word = "fOxy".to_string();
///
/// assert_eq!(
///     probe(&mut word).unwrap(),
///     Fetched::Many(vec![Value::from("fOyy"), Value::from(3usize)])
/// );
/// ```
pub fn call<T: Bindable>(spec: Invocations) -> impl Fn(&mut T) -> Result<Fetched> {
    move |receiver: &mut T| {
        let mut results = Vec::with_capacity(spec.len());
        for invocation in spec.entries() {
            results.push(receiver.invoke(&invocation.name, &invocation.args)?);
        }
        Ok(collapse(results))
    }
}

/// The result of a `get` or `call` application.
///
/// A spec naming exactly one accessor/method produces the bare value; two
/// or more produce the ordered sequence. This keeps single-entry readers
/// behaving like plain attribute reads instead of one-element wrappers.
///
/// `Fetched` compares lexicographically through [`Value::compare`], so
/// multi-entry `get` results work directly as `sort_by` keys.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// The single result of a one-entry spec.
    One(Value),
    /// The ordered results of a zero- or many-entry spec.
    Many(Vec<Value>),
}

impl Fetched {
    /// Unwraps the single value, if this came from a one-entry spec.
    pub fn one(self) -> Option<Value> {
        match self {
            Fetched::One(value) => Some(value),
            Fetched::Many(_) => None,
        }
    }

    /// Flattens into a vector regardless of arity.
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Fetched::One(value) => vec![value],
            Fetched::Many(values) => values,
        }
    }

    /// Views the results as a slice regardless of arity.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Fetched::One(value) => std::slice::from_ref(value),
            Fetched::Many(values) => values,
        }
    }

    /// Returns the number of results.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no results.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Compares two fetches lexicographically through [`Value::compare`],
    /// with length as the tie-breaker. Returns `None` on kind mismatch.
    pub fn compare(&self, other: &Fetched) -> Option<Ordering> {
        let a = self.as_slice();
        let b = other.as_slice();
        for (x, y) in a.iter().zip(b.iter()) {
            match x.compare(y)? {
                Ordering::Equal => continue,
                non_eq => return Some(non_eq),
            }
        }
        Some(a.len().cmp(&b.len()))
    }
}

impl PartialOrd for Fetched {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl PartialEq<Value> for Fetched {
    fn eq(&self, other: &Value) -> bool {
        matches!(self, Fetched::One(value) if value == other)
    }
}

/// Normalizes a result list: exactly one element unwraps to
/// [`Fetched::One`], anything else stays an ordered [`Fetched::Many`].
pub fn collapse(results: Vec<Value>) -> Fetched {
    let mut results = results;
    if results.len() == 1 {
        if let Some(value) = results.pop() {
            return Fetched::One(value);
        }
    }
    Fetched::Many(results)
}
