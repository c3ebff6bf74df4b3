//! Matcher values for filter specs.
//!
//! A [`Matcher`] is the right-hand side of a filter entry. The matching
//! relation is asymmetric: the matcher decides how the actual value is
//! tested, never the reverse. Literals test by equality, ranges by
//! membership, patterns by regex search, kinds by type, and [`Matcher::Where`]
//! carries an arbitrary predicate.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

use regex::Regex;

use crate::value::{Kind, Number, Value};

/// How to test an actual attribute value.
///
/// Anything convertible to [`Value`] converts to an equality matcher, so
/// spec builders accept literals, ranges, regexes, and kinds directly:
///
/// ```
/// use bindery::{FilterSpec, Kind};
/// use regex::Regex;
///
/// let spec = FilterSpec::new()
///     .attr("gender", "female")              // equality
///     .attr("age", 18..30)                   // range membership
///     .attr("name", Regex::new("^J").unwrap()) // pattern
///     .attr("nickname", Kind::Str);          // type test
/// assert_eq!(spec.len(), 4);
/// ```
#[derive(Clone)]
pub enum Matcher {
    /// Exact equality against a literal value.
    Equals(Value),
    /// Numeric range membership. `inclusive` controls the upper bound.
    Range {
        lo: Number,
        hi: Number,
        inclusive: bool,
    },
    /// Regex search over string values.
    Pattern(Regex),
    /// Type test against the value's [`Kind`].
    Kind(Kind),
    /// Arbitrary predicate over the actual value.
    Where(Arc<dyn Fn(&Value) -> bool + Send + Sync>),
}

impl Matcher {
    /// Wraps a predicate function as a matcher.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Matcher::Where(Arc::new(predicate))
    }

    /// Tests this matcher against an actual value.
    ///
    /// Kind-mismatched actuals never match: a range against a string value
    /// or a pattern against a number is `false`, not an error. Matchers are
    /// side-effect-free.
    pub fn matches(&self, actual: &Value) -> bool {
        match self {
            // Numbers test through Number::compare so mixed variants
            // (I64 literal against a U64 length) still compare equal.
            Matcher::Equals(expected) => match (expected.as_number(), actual.as_number()) {
                (Some(a), Some(b)) => a.compare(b) == Some(Ordering::Equal),
                _ => expected == actual,
            },
            Matcher::Range { lo, hi, inclusive } => match actual.as_number() {
                Some(n) => {
                    let at_or_above = matches!(
                        lo.compare(n),
                        Some(Ordering::Less) | Some(Ordering::Equal)
                    );
                    let below = match n.compare(*hi) {
                        Some(Ordering::Less) => true,
                        Some(Ordering::Equal) => *inclusive,
                        _ => false,
                    };
                    at_or_above && below
                }
                None => false,
            },
            Matcher::Pattern(regex) => match actual.as_str() {
                Some(s) => regex.is_match(s),
                None => false,
            },
            Matcher::Kind(kind) => actual.kind() == *kind,
            Matcher::Where(predicate) => predicate(actual),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            Matcher::Range { lo, hi, inclusive } => f
                .debug_struct("Range")
                .field("lo", lo)
                .field("hi", hi)
                .field("inclusive", inclusive)
                .finish(),
            Matcher::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Matcher::Kind(kind) => f.debug_tuple("Kind").field(kind).finish(),
            Matcher::Where(_) => f.write_str("Where(..)"),
        }
    }
}

// Ranges become membership matchers. Half-open ranges exclude the upper
// bound, inclusive ranges keep it.

impl<N: Into<Number>> From<Range<N>> for Matcher {
    fn from(range: Range<N>) -> Self {
        Matcher::Range {
            lo: range.start.into(),
            hi: range.end.into(),
            inclusive: false,
        }
    }
}

impl<N: Into<Number>> From<RangeInclusive<N>> for Matcher {
    fn from(range: RangeInclusive<N>) -> Self {
        let (lo, hi) = range.into_inner();
        Matcher::Range {
            lo: lo.into(),
            hi: hi.into(),
            inclusive: true,
        }
    }
}

impl From<Regex> for Matcher {
    fn from(regex: Regex) -> Self {
        Matcher::Pattern(regex)
    }
}

impl From<Kind> for Matcher {
    fn from(kind: Kind) -> Self {
        Matcher::Kind(kind)
    }
}

impl From<Value> for Matcher {
    fn from(value: Value) -> Self {
        Matcher::Equals(value)
    }
}

// Literal conversions go through Value and test by equality.

impl From<&str> for Matcher {
    fn from(s: &str) -> Self {
        Matcher::Equals(Value::from(s))
    }
}

impl From<String> for Matcher {
    fn from(s: String) -> Self {
        Matcher::Equals(Value::from(s))
    }
}

impl From<char> for Matcher {
    fn from(c: char) -> Self {
        Matcher::Equals(Value::from(c))
    }
}

impl From<bool> for Matcher {
    fn from(b: bool) -> Self {
        Matcher::Equals(Value::from(b))
    }
}

impl From<Number> for Matcher {
    fn from(n: Number) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<i8> for Matcher {
    fn from(n: i8) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<i16> for Matcher {
    fn from(n: i16) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<i32> for Matcher {
    fn from(n: i32) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<i64> for Matcher {
    fn from(n: i64) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<u8> for Matcher {
    fn from(n: u8) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<u16> for Matcher {
    fn from(n: u16) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<u32> for Matcher {
    fn from(n: u32) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<u64> for Matcher {
    fn from(n: u64) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<f32> for Matcher {
    fn from(n: f32) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<f64> for Matcher {
    fn from(n: f64) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<usize> for Matcher {
    fn from(n: usize) -> Self {
        Matcher::Equals(Value::from(n))
    }
}

impl From<isize> for Matcher {
    fn from(n: isize) -> Self {
        Matcher::Equals(Value::from(n))
    }
}
