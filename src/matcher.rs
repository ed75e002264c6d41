//! The matcher tree.
//!
//! A [`Matcher`] is a closed enum over eight node kinds. Every node, leaf or
//! composite, honours the same contract:
//!
//! - [`fragment`](Matcher::fragment): a pure function of the node's
//!   configuration. Fragments never contain capture groups, so they can be
//!   pasted into a parent's pattern freely.
//! - [`arity`](Matcher::arity): the number of typed slots, fixed by the tree's
//!   shape at construction time.
//! - [`try_match`](Matcher::try_match): clear every slot in the subtree, check
//!   the input against the fragment and, on success, fill the slots by
//!   recursing into the children with the substrings the engine reports.
//! - [`is_set`](Matcher::is_set) / [`get`](Matcher::get): slot access by flat
//!   index.
//!
//! ## Slot layout
//!
//! ```text
//! Literal                  0
//! Scalar / Range           1
//! Sequence(a, b)           a.arity + b.arity      a's slots, then b's
//! Alternation(a, b)        a.arity                when shape(a) == shape(b)
//!                          a.arity + b.arity      otherwise
//! Optional(a)              a.arity
//! Repetition / Delimited   1                      a List of items
//! ```
//!
//! A composite never stores slot state of its own except for the list
//! produced by repetitions; everything else is delegated to the leaves.

#[path = "matcher/alternation.rs"]
mod alternation;
#[path = "matcher/delimited.rs"]
mod delimited;
#[path = "matcher/leaf.rs"]
mod leaf;
#[path = "matcher/ops.rs"]
mod ops;
#[path = "matcher/optional.rs"]
mod optional;
#[path = "matcher/repetition.rs"]
mod repetition;
#[path = "matcher/sequence.rs"]
mod sequence;
#[path = "matcher/timestamp.rs"]
mod timestamp;


pub use alternation::Alternation;
pub use delimited::DelimitedList;
pub use leaf::{EnumeratedRange, Literal, RANGE_LIMIT, RangeSpec, Scalar, ScalarKind};
pub use optional::Optional;
pub use repetition::Repetition;
pub use sequence::Sequence;
pub use timestamp::TimestampFormat;

use crate::{ConfigError, FragmentEngine, MatchError, Value};

// --- Shapes ------------------------------------------------------------------

/// Scalar kinds as far as [`Shape`] is concerned (custom fragments are all `Keep`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarTag {
    Integer,
    Word,
    NonWhitespace,
    Line,
    Keep,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeTag {
    Unsigned,
    Signed,
    Char,
}

/// Structural signature of a tree: node kinds and value types, but not the
/// text, bounds or counts they were configured with.
///
/// Two alternation branches with equal shapes share one slot range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    Literal,
    Scalar(ScalarTag),
    Range(RangeTag),
    Sequence(Box<Shape>, Box<Shape>),
    Alternation(Box<Shape>, Box<Shape>),
    Optional(Box<Shape>),
    Repetition(Box<Shape>),
    DelimitedList(Box<Shape>),
}

// --- Matcher -----------------------------------------------------------------

/// A node in a matcher tree. See the [module docs](self) for the contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    Literal(Literal),
    Scalar(Scalar),
    Range(EnumeratedRange),
    Sequence(Sequence),
    Alternation(Alternation),
    Optional(Optional),
    Repetition(Repetition),
    DelimitedList(DelimitedList),
}

impl Matcher {
    /// Fixed text; every pattern metacharacter is escaped once.
    pub fn literal(text: &str) -> Matcher {
        Matcher::Literal(Literal::new(text))
    }

    /// ASCII digits captured as a `u64`.
    pub fn integer() -> Matcher {
        Matcher::Scalar(Scalar::new(ScalarKind::Integer))
    }

    /// One or more word characters, captured as text.
    pub fn word() -> Matcher {
        Matcher::Scalar(Scalar::new(ScalarKind::Word))
    }

    /// A run of non-whitespace characters, captured as text.
    pub fn non_whitespace() -> Matcher {
        Matcher::Scalar(Scalar::new(ScalarKind::NonWhitespace))
    }

    /// Everything up to the end of the line (or the input, with
    /// [`EngineFlags::DOT_MATCHES_NEW_LINE`](crate::EngineFlags::DOT_MATCHES_NEW_LINE)).
    pub fn line() -> Matcher {
        Matcher::Scalar(Scalar::new(ScalarKind::Line))
    }

    /// Text matching a caller supplied fragment, captured verbatim.
    pub fn keep(fragment: &str) -> Result<Matcher, ConfigError> {
        Ok(Matcher::Scalar(Scalar::keep(fragment)?))
    }

    /// A timestamp in a strftime-style `format`, captured as a `NaiveDateTime`.
    ///
    /// Supported specifiers: `%Y %y %m %d %H %M %S %b %.f %F %T %%`.
    pub fn timestamp(format: &str) -> Result<Matcher, ConfigError> {
        Ok(Matcher::Scalar(Scalar::new(ScalarKind::Timestamp(TimestampFormat::new(format)?))))
    }

    /// One value out of an inclusive range, e.g. `Matcher::range(1..=12)` or `Matcher::range('a'..='f')`.
    pub fn range(spec: impl Into<RangeSpec>) -> Result<Matcher, ConfigError> {
        Ok(Matcher::Range(EnumeratedRange::new(spec.into())?))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Matcher::Literal(_) => "literal",
            Matcher::Scalar(_) => "scalar",
            Matcher::Range(_) => "range",
            Matcher::Sequence(_) => "sequence",
            Matcher::Alternation(_) => "alternation",
            Matcher::Optional(_) => "optional",
            Matcher::Repetition(_) => "repetition",
            Matcher::DelimitedList(_) => "delimited_list",
        }
    }

    /// The pattern fragment for this subtree. Pure and deterministic.
    pub fn fragment(&self) -> String {
        match self {
            Matcher::Literal(n) => n.fragment(),
            Matcher::Scalar(n) => n.fragment(),
            Matcher::Range(n) => n.fragment(),
            Matcher::Sequence(n) => n.fragment(),
            Matcher::Alternation(n) => n.fragment(),
            Matcher::Optional(n) => n.fragment(),
            Matcher::Repetition(n) => n.fragment(),
            Matcher::DelimitedList(n) => n.fragment(),
        }
    }

    /// Number of addressable slots.
    pub fn arity(&self) -> usize {
        match self {
            Matcher::Literal(_) => 0,
            Matcher::Scalar(_) | Matcher::Range(_) => 1,
            Matcher::Sequence(n) => n.arity(),
            Matcher::Alternation(n) => n.arity(),
            Matcher::Optional(n) => n.arity(),
            Matcher::Repetition(_) | Matcher::DelimitedList(_) => 1,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Matcher::Literal(_) => Shape::Literal,
            Matcher::Scalar(n) => Shape::Scalar(n.kind().tag()),
            Matcher::Range(n) => Shape::Range(n.spec().tag()),
            Matcher::Sequence(n) => Shape::Sequence(Box::new(n.left().shape()), Box::new(n.right().shape())),
            Matcher::Alternation(n) => Shape::Alternation(Box::new(n.left().shape()), Box::new(n.right().shape())),
            Matcher::Optional(n) => Shape::Optional(Box::new(n.child().shape())),
            Matcher::Repetition(n) => Shape::Repetition(Box::new(n.child().shape())),
            Matcher::DelimitedList(n) => Shape::DelimitedList(Box::new(n.child().shape())),
        }
    }

    /// Reset every slot in the subtree. Idempotent.
    pub fn clear(&mut self) {
        match self {
            Matcher::Literal(_) => {}
            Matcher::Scalar(n) => n.clear(),
            Matcher::Range(n) => n.clear(),
            Matcher::Sequence(n) => n.clear(),
            Matcher::Alternation(n) => n.clear(),
            Matcher::Optional(n) => n.clear(),
            Matcher::Repetition(n) => n.clear(),
            Matcher::DelimitedList(n) => n.clear(),
        }
    }

    /// Match `input` using the shared [`FragmentEngine::global`] engine.
    ///
    /// # Panics
    ///
    /// When the tree reports a [`MatchError`] for this input; see [`Matcher::try_match`].
    pub fn matches(&mut self, input: &str) -> bool {
        self.matches_with(FragmentEngine::global(), input)
    }

    /// Match `input` using `engine`.
    ///
    /// # Panics
    ///
    /// When the tree reports a [`MatchError`] for this input; see [`Matcher::try_match`].
    pub fn matches_with(&mut self, engine: &FragmentEngine, input: &str) -> bool {
        match self.try_match(engine, input) {
            Ok(matched) => matched,
            Err(err) => panic!("matchtree: internal inconsistency matching {input:?}: {err}"),
        }
    }

    /// Clear, then try to match the whole of `input` and populate the slots.
    ///
    /// `Ok(false)` is an ordinary no-match and leaves every slot unpopulated.
    /// `Err` means the fragment/match recursion was unsound for this input
    /// (for example a repetition scan that disagrees with the whole-string
    /// match); slots are cleared in that case too.
    pub fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        self.clear();
        engine.trace(self.kind(), input, || self.fragment());

        let result = match self {
            Matcher::Literal(n) => n.try_match(engine, input),
            Matcher::Scalar(n) => n.try_match(engine, input),
            Matcher::Range(n) => n.try_match(engine, input),
            Matcher::Sequence(n) => n.try_match(engine, input),
            Matcher::Alternation(n) => n.try_match(engine, input),
            Matcher::Optional(n) => n.try_match(engine, input),
            Matcher::Repetition(n) => n.try_match(engine, input),
            Matcher::DelimitedList(n) => n.try_match(engine, input),
        };

        if !matches!(result, Ok(true)) {
            self.clear();
        }
        result
    }

    /// The value in slot `index`, if populated.
    pub fn value(&self, index: usize) -> Option<&Value> {
        if index >= self.arity() {
            return None;
        }
        match self {
            Matcher::Literal(_) => None,
            Matcher::Scalar(n) => n.value(),
            Matcher::Range(n) => n.value(),
            Matcher::Sequence(n) => n.value(index),
            Matcher::Alternation(n) => n.value(index),
            Matcher::Optional(n) => n.value(index),
            Matcher::Repetition(n) => n.value(),
            Matcher::DelimitedList(n) => n.value(),
        }
    }

    pub fn is_set(&self, index: usize) -> bool {
        self.value(index).is_some()
    }

    /// The value in slot `index`.
    ///
    /// # Panics
    ///
    /// If the slot is not populated. Check [`is_set`](Self::is_set) first, or
    /// use [`value`](Self::value).
    pub fn get(&self, index: usize) -> &Value {
        match self.value(index) {
            Some(value) => value,
            None => panic!("slot {index} of {} (arity {}) is not populated", self.kind(), self.arity()),
        }
    }

    /// Values of every slot, `None` where unpopulated.
    pub fn values(&self) -> Vec<Option<&Value>> {
        (0..self.arity()).map(|i| self.value(i)).collect()
    }
}

macro_rules! node_into_matcher {
    ($($variant:ident($node:ty)),* $(,)?) => {
        $(
            impl From<$node> for Matcher {
                fn from(node: $node) -> Self {
                    Matcher::$variant(node)
                }
            }
        )*
    };
}

node_into_matcher! {
    Literal(Literal),
    Scalar(Scalar),
    Range(EnumeratedRange),
    Sequence(Sequence),
    Alternation(Alternation),
    Optional(Optional),
    Repetition(Repetition),
    DelimitedList(DelimitedList),
}

impl From<&str> for Matcher {
    fn from(text: &str) -> Self {
        Matcher::literal(text)
    }
}

impl From<String> for Matcher {
    fn from(text: String) -> Self {
        Matcher::literal(&text)
    }
}
