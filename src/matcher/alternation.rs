//! Left-biased choice.

use crate::{FragmentEngine, MatchError, Matcher, Value};

/// `left` or `right`, preferring `left` whenever the whole input fits it.
///
/// When both sides have the same [`Shape`](crate::Shape) they share one slot
/// range (only one side is ever matched, so only one can populate a slot).
/// Otherwise the slots are laid out like a [`Sequence`](super::Sequence):
/// left's, then right's.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternation {
    left: Box<Matcher>,
    right: Box<Matcher>,
    shared: bool,
}

impl Alternation {
    pub(crate) fn new(left: Matcher, right: Matcher) -> Self {
        let shared = left.shape() == right.shape();
        Alternation { left: Box::new(left), right: Box::new(right), shared }
    }

    pub fn left(&self) -> &Matcher {
        &self.left
    }

    pub fn right(&self) -> &Matcher {
        &self.right
    }

    /// Whether both sides address the same slots.
    pub fn shares_slots(&self) -> bool {
        self.shared
    }

    pub(crate) fn fragment(&self) -> String {
        format!("(?:{}|{})", self.left.fragment(), self.right.fragment())
    }

    pub(crate) fn arity(&self) -> usize {
        if self.shared { self.left.arity() } else { self.left.arity() + self.right.arity() }
    }

    pub(crate) fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        if !engine.is_full_match(input, &self.fragment())? {
            return Ok(false);
        }

        let matched = if engine.is_full_match(input, &self.left.fragment())? {
            self.left.try_match(engine, input)?
        } else {
            self.right.try_match(engine, input)?
        };

        if matched && self.shared {
            if let Some(index) = (0..self.left.arity()).find(|&i| self.left.is_set(i) && self.right.is_set(i)) {
                return Err(MatchError::AmbiguousAlternation { index });
            }
        }
        Ok(matched)
    }

    pub(crate) fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    pub(crate) fn value(&self, index: usize) -> Option<&Value> {
        if self.shared {
            return self.left.value(index).or_else(|| self.right.value(index));
        }
        let split = self.left.arity();
        if index < split { self.left.value(index) } else { self.right.value(index - split) }
    }
}
