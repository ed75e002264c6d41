//! Fragment engine: the bridge between matcher trees and the `regex` crate.
//!
//! Matchers never hold compiled regexes themselves. They produce pattern
//! *fragments* (plain strings, no capture groups of their own) and ask the
//! engine three questions about them:
//!
//! ```text
//! is_full_match(text, fragment)      -> does all of `text` match?
//! full_groups(text, pattern, n)      -> all of `text` matches `pattern`; give me groups 1..=n
//! find_all(text, fragment)           -> every non-overlapping occurrence, left to right
//! ```
//!
//! "Full match" is spelled `\A(?:fragment)\z`; the `regex` crate only offers
//! search, so anchoring is done here once rather than in every matcher.
//!
//! ## Caching and threads
//!
//! Each engine owns a [`PatternCache`](cache::PatternCache) behind a mutex, so
//! an engine can be shared between threads. Matcher trees are a different
//! story: they carry per-call slot state and need `&mut` access, so a tree is
//! used by one thread at a time.
//!
//! [`FragmentEngine::global`] is a lazily created process-wide instance built
//! from [`Options::default`]. Tests and callers that want isolation (separate
//! counters, different flags) build their own with [`FragmentEngine::new`].
//!
//! ## Debugging
//!
//! Set `MATCHTREE_DEBUG=1` to print every node's match attempt and every cache
//! compile to stderr.

#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/escaping.rs"]
mod escaping;

pub use cache::CacheStats;
pub use escaping::escape;

use crate::MatchError;
use cache::PatternCache;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::ops::Range;
use std::sync::Arc;

/// Environment variable that switches on [`EngineFlags::TRACE`] in [`Options::from_env`].
pub const DEBUG_ENV: &str = "MATCHTREE_DEBUG";

bitflags::bitflags! {
    /// Behaviour switches applied to every pattern an engine compiles.
    ///
    /// Because the same flags apply to the whole-string check and to the
    /// occurrence scan, the two steps always see the same pattern language.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EngineFlags: u8 {
        const CASE_INSENSITIVE     = 1 << 0;
        const DOT_MATCHES_NEW_LINE = 1 << 1;
        const TRACE                = 1 << 2;
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub flags: EngineFlags,
    /// Maximum number of compiled patterns to keep; `None` is unbounded.
    pub cache_limit: Option<usize>,
}

impl Options {
    /// Defaults, with [`EngineFlags::TRACE`] set when `MATCHTREE_DEBUG` is present.
    pub fn from_env() -> Self {
        let mut flags = EngineFlags::empty();
        if std::env::var_os(DEBUG_ENV).is_some() {
            flags |= EngineFlags::TRACE;
        }
        Options { flags, cache_limit: None }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::from_env()
    }
}

static GLOBAL: Lazy<FragmentEngine> = Lazy::new(|| FragmentEngine::new(Options::default()));

/// Compiles, caches and evaluates pattern fragments on behalf of matchers.
#[derive(Debug)]
pub struct FragmentEngine {
    options: Options,
    cache: PatternCache,
}

impl Default for FragmentEngine {
    fn default() -> Self {
        FragmentEngine::new(Options::default())
    }
}

impl FragmentEngine {
    pub fn new(options: Options) -> Self {
        let cache = PatternCache::new(options.cache_limit);
        FragmentEngine { options, cache }
    }

    /// The shared process-wide engine used by [`Matcher::matches`](crate::Matcher::matches).
    pub fn global() -> &'static FragmentEngine {
        &GLOBAL
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn tracing(&self) -> bool {
        self.options.flags.contains(EngineFlags::TRACE)
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every cached pattern and reset the counters.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Compile `pattern` exactly as given (no anchoring), going through the cache.
    pub fn compile(&self, pattern: &str) -> Result<Arc<Regex>, MatchError> {
        let flags = self.options.flags;
        let built = self.cache.get_or_compile(pattern, |p| {
            RegexBuilder::new(p)
                .case_insensitive(flags.contains(EngineFlags::CASE_INSENSITIVE))
                .dot_matches_new_line(flags.contains(EngineFlags::DOT_MATCHES_NEW_LINE))
                .build()
        });

        match built {
            Ok((re, fresh)) => {
                if fresh && self.tracing() {
                    eprintln!("[cache:compile] pattern=\"{}\"", pattern);
                }
                Ok(re)
            }
            Err(err) => Err(MatchError::Compile { pattern: pattern.to_string(), message: err.to_string() }),
        }
    }

    fn compile_anchored(&self, pattern: &str) -> Result<Arc<Regex>, MatchError> {
        self.compile(&format!(r"\A(?:{pattern})\z"))
    }

    /// Does the whole of `text` match `fragment`?
    pub fn is_full_match(&self, text: &str, fragment: &str) -> Result<bool, MatchError> {
        Ok(self.compile_anchored(fragment)?.is_match(text))
    }

    /// Match the whole of `text` against `pattern`, which must declare exactly
    /// `groups` capture groups, and return the text of each group in order.
    ///
    /// A group that did not participate comes back as an empty string.
    pub fn full_groups(&self, text: &str, pattern: &str, groups: usize) -> Result<Option<Vec<String>>, MatchError> {
        let re = self.compile_anchored(pattern)?;
        let found = re.captures_len() - 1;
        if found != groups {
            return Err(MatchError::GroupCount { pattern: pattern.to_string(), expected: groups, found });
        }

        Ok(re.captures(text).map(|caps| {
            (1..=groups).map(|i| caps.get(i).map_or("", |m| m.as_str()).to_string()).collect()
        }))
    }

    /// Byte spans of every non-empty, non-overlapping occurrence of `fragment` in `text`.
    pub fn find_spans(&self, text: &str, fragment: &str) -> Result<Vec<Range<usize>>, MatchError> {
        let re = self.compile(&format!("(?:{fragment})"))?;
        Ok(re.find_iter(text).filter(|m| !m.is_empty()).map(|m| m.range()).collect())
    }

    /// Text of every non-empty, non-overlapping occurrence of `fragment` in `text`.
    pub fn find_all(&self, text: &str, fragment: &str) -> Result<Vec<String>, MatchError> {
        Ok(self.find_spans(text, fragment)?.into_iter().map(|span| text[span].to_string()).collect())
    }

    pub(crate) fn trace(&self, kind: &str, input: &str, fragment: impl FnOnce() -> String) {
        if self.tracing() {
            eprintln!("[match:{}] input=\"{}\" fragment=\"{}\"", kind, input, fragment());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FragmentEngine {
        FragmentEngine::new(Options { flags: EngineFlags::empty(), cache_limit: None })
    }

    #[test]
    fn full_match_is_anchored_at_both_ends() {
        let engine = engine();
        assert!(engine.is_full_match("123", r"\d+").unwrap());
        assert!(!engine.is_full_match("x123", r"\d+").unwrap());
        assert!(!engine.is_full_match("123x", r"\d+").unwrap());
        // The fragment's own alternation must not escape the anchors.
        assert!(!engine.is_full_match("ab", "a|b").unwrap());
    }

    #[test]
    fn full_groups_returns_each_group() {
        let engine = engine();
        let groups = engine.full_groups("abc123", r"(\w+?)(\d+)", 2).unwrap();
        assert_eq!(groups, Some(vec!["abc".to_string(), "123".to_string()]));
        assert_eq!(engine.full_groups("abc", r"(\w+?)(\d+)", 2).unwrap(), None);
    }

    #[test]
    fn full_groups_rejects_unexpected_group_counts() {
        let err = engine().full_groups("ab", "(a)(b)", 3).unwrap_err();
        assert!(matches!(err, MatchError::GroupCount { expected: 3, found: 2, .. }));
    }

    #[test]
    fn find_all_scans_left_to_right_without_overlap() {
        let found = engine().find_all("1, 22, 333", r"\d+").unwrap();
        assert_eq!(found, vec!["1", "22", "333"]);
    }

    #[test]
    fn find_all_skips_empty_occurrences() {
        let found = engine().find_all("a1b", r"\d*").unwrap();
        assert_eq!(found, vec!["1"]);
    }

    #[test]
    fn case_insensitive_flag_applies_to_every_question() {
        let engine = FragmentEngine::new(Options { flags: EngineFlags::CASE_INSENSITIVE, cache_limit: None });
        assert!(engine.is_full_match("ERROR", "error").unwrap());
        assert_eq!(engine.find_all("Error error", "error").unwrap().len(), 2);
    }

    #[test]
    fn repeated_questions_hit_the_cache() {
        let engine = engine();
        engine.is_full_match("1", r"\d").unwrap();
        engine.is_full_match("2", r"\d").unwrap();
        let stats = engine.stats();
        assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));

        engine.clear_cache();
        assert_eq!(engine.stats(), CacheStats::default());
    }

    #[test]
    fn compile_errors_surface_as_match_errors() {
        let err = engine().is_full_match("x", "(").unwrap_err();
        assert!(matches!(err, MatchError::Compile { .. }));
    }
}
