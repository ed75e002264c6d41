//! Leaf matchers: literals, typed scalars and enumerated ranges.
//!
//! Leaves are where text turns into values. A leaf is matched by running its
//! own fragment against the *whole* input it is handed; composites make sure
//! that input is exactly the substring the leaf is responsible for.

use super::timestamp::TimestampFormat;
use super::{RangeTag, ScalarTag};
use crate::engine::escape;
use crate::{ConfigError, FragmentEngine, MatchError, Value};
use regex::Regex;
use std::ops::RangeInclusive;

/// Upper bound on the number of alternatives an enumerated range will spell out.
pub const RANGE_LIMIT: usize = 10_000;

// --- Literal -----------------------------------------------------------------

/// Fixed text. Has no slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub(crate) fn new(text: &str) -> Self {
        Literal { text: escape(text) }
    }

    /// The escaped text, which is also the fragment.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn fragment(&self) -> String {
        self.text.clone()
    }

    pub(crate) fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        engine.is_full_match(input, &self.text)
    }
}

// --- Scalar ------------------------------------------------------------------

/// The value type, and with it the fragment, of a [`Scalar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarKind {
    /// ASCII digits, parsed as `u64`.
    Integer,
    /// Word characters.
    Word,
    /// Anything up to the next whitespace.
    NonWhitespace,
    /// The rest of the line.
    Line,
    /// A caller supplied fragment, captured as text.
    Keep(String),
    Timestamp(TimestampFormat),
}

impl ScalarKind {
    pub(crate) fn tag(&self) -> ScalarTag {
        match self {
            ScalarKind::Integer => ScalarTag::Integer,
            ScalarKind::Word => ScalarTag::Word,
            ScalarKind::NonWhitespace => ScalarTag::NonWhitespace,
            ScalarKind::Line => ScalarTag::Line,
            ScalarKind::Keep(_) => ScalarTag::Keep,
            ScalarKind::Timestamp(_) => ScalarTag::Timestamp,
        }
    }

    fn fragment(&self) -> &str {
        match self {
            ScalarKind::Integer => "[0-9]+",
            ScalarKind::Word => r"\w+",
            ScalarKind::NonWhitespace => r"[^\s]+",
            ScalarKind::Line => ".*",
            ScalarKind::Keep(fragment) => fragment,
            ScalarKind::Timestamp(ts) => ts.fragment(),
        }
    }

    fn parse(&self, text: &str) -> Option<Value> {
        match self {
            ScalarKind::Integer => text.parse().ok().map(Value::Integer),
            ScalarKind::Word | ScalarKind::NonWhitespace | ScalarKind::Line | ScalarKind::Keep(_) => {
                Some(Value::Text(text.to_string()))
            }
            ScalarKind::Timestamp(ts) => ts.parse(text).map(Value::DateTime),
        }
    }
}

/// A single typed capture. Arity 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    kind: ScalarKind,
    value: Option<Value>,
}

impl Scalar {
    pub(crate) fn new(kind: ScalarKind) -> Self {
        Scalar { kind, value: None }
    }

    /// A scalar over a user fragment. The fragment must compile and must not
    /// declare capture groups; it is wrapped so that it composes safely.
    pub(crate) fn keep(fragment: &str) -> Result<Self, ConfigError> {
        let re = Regex::new(fragment)
            .map_err(|err| ConfigError::InvalidFragment { fragment: fragment.to_string(), message: err.to_string() })?;
        if re.captures_len() > 1 {
            return Err(ConfigError::CapturingFragment(fragment.to_string()));
        }
        Ok(Scalar::new(ScalarKind::Keep(format!("(?:{fragment})"))))
    }

    pub fn kind(&self) -> &ScalarKind {
        &self.kind
    }

    pub(crate) fn fragment(&self) -> String {
        self.kind.fragment().to_string()
    }

    /// Populates the slot only when the text both matches and converts.
    pub(crate) fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        self.value = None;
        if !engine.is_full_match(input, self.kind.fragment())? {
            return Ok(false);
        }
        self.value = self.kind.parse(input);
        Ok(self.value.is_some())
    }

    pub(crate) fn clear(&mut self) {
        self.value = None;
    }

    pub(crate) fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

// --- EnumeratedRange ---------------------------------------------------------

/// Inclusive bounds of an [`EnumeratedRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    Unsigned { min: u64, max: u64 },
    Signed { min: i64, max: i64 },
    Char { min: char, max: char },
}

impl From<RangeInclusive<u64>> for RangeSpec {
    fn from(r: RangeInclusive<u64>) -> Self {
        RangeSpec::Unsigned { min: *r.start(), max: *r.end() }
    }
}

impl From<RangeInclusive<u32>> for RangeSpec {
    fn from(r: RangeInclusive<u32>) -> Self {
        RangeSpec::Unsigned { min: u64::from(*r.start()), max: u64::from(*r.end()) }
    }
}

impl From<RangeInclusive<i64>> for RangeSpec {
    fn from(r: RangeInclusive<i64>) -> Self {
        RangeSpec::Signed { min: *r.start(), max: *r.end() }
    }
}

impl From<RangeInclusive<i32>> for RangeSpec {
    fn from(r: RangeInclusive<i32>) -> Self {
        RangeSpec::Signed { min: i64::from(*r.start()), max: i64::from(*r.end()) }
    }
}

impl From<RangeInclusive<char>> for RangeSpec {
    fn from(r: RangeInclusive<char>) -> Self {
        RangeSpec::Char { min: *r.start(), max: *r.end() }
    }
}

impl RangeSpec {
    pub(crate) fn tag(&self) -> RangeTag {
        match self {
            RangeSpec::Unsigned { .. } => RangeTag::Unsigned,
            RangeSpec::Signed { .. } => RangeTag::Signed,
            RangeSpec::Char { .. } => RangeTag::Char,
        }
    }

    fn bounds(&self) -> (String, String) {
        match self {
            RangeSpec::Unsigned { min, max } => (min.to_string(), max.to_string()),
            RangeSpec::Signed { min, max } => (min.to_string(), max.to_string()),
            RangeSpec::Char { min, max } => (min.to_string(), max.to_string()),
        }
    }

    fn is_backwards(&self) -> bool {
        match self {
            RangeSpec::Unsigned { min, max } => min > max,
            RangeSpec::Signed { min, max } => min > max,
            RangeSpec::Char { min, max } => min > max,
        }
    }

    /// Number of values in the range; only meaningful when not backwards.
    fn len(&self) -> u128 {
        match *self {
            RangeSpec::Unsigned { min, max } => u128::from(max - min) + 1,
            RangeSpec::Signed { min, max } => (i128::from(max) - i128::from(min) + 1) as u128,
            RangeSpec::Char { min, max } => u128::from(u32::from(max) - u32::from(min)) + 1,
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.is_backwards() {
            let (min, max) = self.bounds();
            return Err(ConfigError::EmptyRange { min, max });
        }
        let len = self.len();
        if len > RANGE_LIMIT as u128 {
            return Err(ConfigError::RangeTooLarge { len, limit: RANGE_LIMIT });
        }
        Ok(())
    }

    /// Every value in the range as text, longest first so that an unanchored
    /// scan prefers `10` over its prefix `1`.
    fn alternatives(&self) -> Vec<String> {
        let mut values: Vec<String> = match *self {
            RangeSpec::Unsigned { min, max } => (min..=max).map(|n| n.to_string()).collect(),
            RangeSpec::Signed { min, max } => (min..=max).map(|n| n.to_string()).collect(),
            RangeSpec::Char { min, max } => (min..=max).map(String::from).collect(),
        };
        values.sort_by_key(|v| std::cmp::Reverse(v.chars().count()));
        values.iter().map(|v| escape(v)).collect()
    }

    fn parse(&self, text: &str) -> Option<Value> {
        match *self {
            RangeSpec::Unsigned { min, max } => {
                text.parse::<u64>().ok().filter(|n| (min..=max).contains(n)).map(Value::Integer)
            }
            RangeSpec::Signed { min, max } => {
                text.parse::<i64>().ok().filter(|n| (min..=max).contains(n)).map(Value::Signed)
            }
            RangeSpec::Char { .. } => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Value::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

/// One of a closed set of literal values. Arity 1.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumeratedRange {
    spec: RangeSpec,
    fragment: String,
    value: Option<Value>,
}

impl EnumeratedRange {
    pub(crate) fn new(spec: RangeSpec) -> Result<Self, ConfigError> {
        spec.check()?;
        Ok(EnumeratedRange::known(spec))
    }

    /// Build without bounds checks, for ranges fixed in this crate.
    pub(crate) fn known(spec: RangeSpec) -> Self {
        let fragment = format!("(?:{})", spec.alternatives().join("|"));
        EnumeratedRange { spec, fragment, value: None }
    }

    pub fn spec(&self) -> RangeSpec {
        self.spec
    }

    pub(crate) fn fragment(&self) -> String {
        self.fragment.clone()
    }

    pub(crate) fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        self.value = None;
        if !engine.is_full_match(input, &self.fragment)? {
            return Ok(false);
        }
        self.value = self.spec.parse(input);
        Ok(self.value.is_some())
    }

    pub(crate) fn clear(&mut self) {
        self.value = None;
    }

    pub(crate) fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_fragment_lists_longest_values_first() {
        let range = EnumeratedRange::new(RangeSpec::from(8u64..=11)).unwrap();
        assert_eq!(range.fragment(), "(?:10|11|8|9)");
    }

    #[test]
    fn char_range_alternatives_are_escaped() {
        let range = EnumeratedRange::new(RangeSpec::from('('..='+')).unwrap();
        assert_eq!(range.fragment(), r"(?:\(|\)|\*|\+)");
    }

    #[test]
    fn backwards_ranges_are_rejected() {
        let err = EnumeratedRange::new(RangeSpec::from(9u64..=1)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyRange { min: "9".to_string(), max: "1".to_string() });
    }

    #[test]
    fn huge_ranges_are_rejected() {
        let err = EnumeratedRange::new(RangeSpec::from(0u64..=u64::MAX)).unwrap_err();
        assert!(matches!(err, ConfigError::RangeTooLarge { .. }));
    }

    #[test]
    fn keep_rejects_capturing_and_broken_fragments() {
        assert!(matches!(Scalar::keep("(a)b"), Err(ConfigError::CapturingFragment(_))));
        assert!(matches!(Scalar::keep("a("), Err(ConfigError::InvalidFragment { .. })));
        assert_eq!(Scalar::keep("a|b").unwrap().fragment(), "(?:a|b)");
    }

    #[test]
    fn integer_overflow_is_a_failed_match() {
        let engine = FragmentEngine::new(crate::Options { flags: crate::EngineFlags::empty(), cache_limit: None });
        let mut scalar = Scalar::new(ScalarKind::Integer);
        assert!(!scalar.try_match(&engine, "99999999999999999999999").unwrap());
        assert!(scalar.value().is_none());
        assert!(scalar.try_match(&engine, "42").unwrap());
        assert_eq!(scalar.value(), Some(&Value::Integer(42)));
    }
}
