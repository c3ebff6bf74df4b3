//! Declarative specs consumed by the builder functions.
//!
//! Specs normalize at construction time: bare method names become
//! explicit empty argument lists, regex shorthands compile their pattern,
//! and entry order is preserved exactly as given. Builders close over the
//! finished spec and never mutate it.

use regex::Regex;

use crate::error::Result;
use crate::matcher::Matcher;
use crate::value::{Kind, Value};

/// Ordered attribute-to-matcher entries for `filter`.
///
/// # Example
///
/// ```
/// use bindery::FilterSpec;
///
/// let spec = FilterSpec::new()
///     .attr("gender", "female")
///     .attr("age", 18..30);
/// assert_eq!(spec.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    entries: Vec<(String, Matcher)>,
}

impl FilterSpec {
    /// Creates an empty spec. An empty spec matches every receiver.
    pub fn new() -> Self {
        FilterSpec::default()
    }

    /// Adds an attribute entry. Literals, ranges, compiled regexes, kinds,
    /// and [`Matcher`] values are all accepted.
    pub fn attr(mut self, name: impl Into<String>, matcher: impl Into<Matcher>) -> Self {
        self.entries.push((name.into(), matcher.into()));
        self
    }

    /// Adds a pattern entry, compiling `pattern`.
    ///
    /// Returns [`BindError::InvalidPattern`] if the pattern does not compile.
    ///
    /// [`BindError::InvalidPattern`]: crate::BindError::InvalidPattern
    pub fn regex(self, name: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.attr(name, Matcher::Pattern(regex)))
    }

    /// Adds a type-test entry.
    pub fn kind(self, name: impl Into<String>, kind: Kind) -> Self {
        self.attr(name, Matcher::Kind(kind))
    }

    /// Adds a custom-predicate entry.
    pub fn matching<F>(self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.attr(name, Matcher::custom(predicate))
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[(String, Matcher)] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the spec has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered attribute-to-value entries for `set`.
#[derive(Debug, Clone, Default)]
pub struct SetSpec {
    entries: Vec<(String, Value)>,
}

impl SetSpec {
    /// Creates an empty spec.
    pub fn new() -> Self {
        SetSpec::default()
    }

    /// Adds an attribute write. Writes are applied in insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the spec has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single normalized invocation descriptor: a name plus an explicit
/// argument list. Bare names carry an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// The accessor or method name.
    pub name: String,
    /// The argument list, empty for bare names.
    pub args: Vec<Value>,
}

impl Invocation {
    /// A zero-argument invocation.
    pub fn new(name: impl Into<String>) -> Self {
        Invocation {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// An invocation with arguments.
    pub fn with_args(name: impl Into<String>, args: Vec<Value>) -> Self {
        Invocation {
            name: name.into(),
            args,
        }
    }
}

/// Ordered invocation descriptors for `get` and `call`.
///
/// Order is significant: it determines result order. Bare names and
/// name-plus-arguments entries mix freely and normalize to [`Invocation`]
/// at construction time.
///
/// # Example
///
/// ```
/// use bindery::Invocations;
///
/// let spec = Invocations::new()
///     .method("downcase")
///     .method_with("sub", ["x", "y"]);
/// assert_eq!(spec.len(), 2);
/// assert!(spec.entries()[0].args.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Invocations {
    entries: Vec<Invocation>,
}

impl Invocations {
    /// Creates an empty spec.
    pub fn new() -> Self {
        Invocations::default()
    }

    /// Adds a bare name, normalized to an empty argument list.
    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.entries.push(Invocation::new(name));
        self
    }

    /// Adds a name with arguments. Anything convertible to [`Value`] works
    /// as an argument; mixed argument kinds go through `Vec<Value>`.
    pub fn method_with<I, V>(mut self, name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let args = args.into_iter().map(Into::into).collect();
        self.entries.push(Invocation::with_args(name, args));
        self
    }

    /// Returns the descriptors in insertion order.
    pub fn entries(&self) -> &[Invocation] {
        &self.entries
    }

    /// Returns the number of descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the spec has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
