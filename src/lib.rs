//! Compositional matcher trees for pulling typed values out of unstructured text.
//!
//! Instead of writing one large regex with a dozen numbered groups, build
//! small matchers and combine them:
//!
//! ```
//! use matchtree::{Matcher, Value};
//!
//! // "GET /index.html 200 512"
//! let mut request = Matcher::word()
//!     >> " "
//!     >> Matcher::non_whitespace()
//!     >> " "
//!     >> Matcher::integer()
//!     >> " "
//!     >> Matcher::integer();
//!
//! assert!(request.matches("GET /index.html 200 512"));
//! assert_eq!(request.arity(), 4);
//! assert_eq!(request.get(0).as_text(), Some("GET"));
//! assert_eq!(request.get(2), &Value::Integer(200));
//! ```
//!
//! ## How the parts work together
//!
//! ```text
//! Matcher tree ── fragment() ──> pattern text (no captures)
//!      │                                │
//!      │ try_match(input)               v
//!      └──────────────────────> FragmentEngine  (engine.rs)
//!                                 - anchors, compiles, caches
//!                                 - answers full-match / split / scan
//!      <── substrings per child ───────┘
//!      │
//!      v
//! leaves parse their substring into a Value and populate their slot
//! ```
//!
//! - `matcher.rs`: the [`Matcher`] enum, slot addressing and the node kinds
//!   (`matcher/*.rs`).
//! - `engine.rs`: [`FragmentEngine`], its [`Options`] and compiled-pattern cache.
//! - `count.rs`: [`CountSpec`] for repetitions.
//! - `value.rs`: [`Value`], the typed contents of a slot.
//! - `presets.rs`: digits, letters and word runs.
//!
//! ## Threads
//!
//! A matcher tree holds the slots of its last match, so matching needs
//! `&mut self`; share trees across threads only behind your own lock. A
//! [`FragmentEngine`] is internally synchronized and can be shared freely.

#[macro_use]
mod macros;
mod count;
mod engine;
mod error;
pub mod matcher;
pub mod presets;
mod value;

pub use count::CountSpec;
pub use engine::{CacheStats, DEBUG_ENV, EngineFlags, FragmentEngine, Options, escape};
pub use error::{ConfigError, MatchError};
pub use matcher::{Matcher, RangeSpec, Shape};
pub use value::Value;
