//! Error types.
//!
//! Two families, told apart by where they surface:
//!
//! - [`ConfigError`] comes out of fallible constructors (bad ranges, bad
//!   repetition counts, user fragments that do not compile). Callers that treat
//!   misconfiguration as fatal simply unwrap while building their tree.
//! - [`MatchError`] comes out of [`Matcher::try_match`](crate::Matcher::try_match)
//!   when the fragment/match recursion disagrees with itself for a particular
//!   input. It is never used for an ordinary no-match, which is `Ok(false)`.

use std::fmt;

/// A matcher could not be built from the given configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An inclusive range whose minimum is above its maximum.
    EmptyRange { min: String, max: String },
    /// An enumerated range with more alternatives than the engine will spell out.
    RangeTooLarge { len: u128, limit: usize },
    /// A repetition count that is backwards or not in `n`, `n,m`, `n,` form.
    BadCount(String),
    /// A user supplied fragment that the pattern engine rejects.
    InvalidFragment { fragment: String, message: String },
    /// A user supplied fragment that declares its own capture groups.
    CapturingFragment(String),
    /// A timestamp format using a specifier with no fragment translation.
    UnsupportedFormat(String),
    /// `multiple_words(0)`.
    ZeroWords,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRange { min, max } => write!(f, "range {min}..={max} is empty"),
            ConfigError::RangeTooLarge { len, limit } => {
                write!(f, "range has {len} values, more than the limit of {limit}")
            }
            ConfigError::BadCount(spec) => write!(f, "invalid repetition count '{spec}'"),
            ConfigError::InvalidFragment { fragment, message } => {
                write!(f, "invalid fragment '{fragment}': {message}")
            }
            ConfigError::CapturingFragment(fragment) => {
                write!(f, "fragment '{fragment}' must not contain capture groups")
            }
            ConfigError::UnsupportedFormat(spec) => write!(f, "unsupported timestamp specifier '{spec}'"),
            ConfigError::ZeroWords => write!(f, "a word list needs at least one word"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The fragment/match recursion produced an internally inconsistent result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A composite pattern failed to compile (usually a size limit).
    Compile { pattern: String, message: String },
    /// A grouped pattern reported a different number of groups than it was built with.
    GroupCount { pattern: String, expected: usize, found: usize },
    /// Both sides of a same-shape alternation populated the same slot.
    AmbiguousAlternation { index: usize },
    /// Re-scanning for a child's occurrences disagreed with the whole-string match.
    ScanDivergence { fragment: String, input: String, found: Vec<String> },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Compile { pattern, message } => write!(f, "pattern '{pattern}' failed to compile: {message}"),
            MatchError::GroupCount { pattern, expected, found } => {
                write!(f, "pattern '{pattern}' has {found} groups, expected {expected}")
            }
            MatchError::AmbiguousAlternation { index } => {
                write!(f, "both alternation branches populated slot {index}")
            }
            MatchError::ScanDivergence { fragment, input, found } => {
                write!(f, "scanning '{input}' for '{fragment}' found {found:?}, which does not agree with the whole match")
            }
        }
    }
}

impl std::error::Error for MatchError {}
