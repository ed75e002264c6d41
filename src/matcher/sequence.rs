//! Concatenation.
//!
//! A sequence never looks inside its children. It asks the engine to split the
//! input with exactly two groups,
//!
//! ```text
//! (left.fragment())(right.fragment())
//! ```
//!
//! and hands each group to the matching child, which recursively splits its
//! own piece the same way. However deep the tree gets, every pattern compiled
//! on its behalf has at most two capture groups.

use crate::{FragmentEngine, MatchError, Matcher, Value};

/// `left` immediately followed by `right`. Slots: left's, then right's.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    left: Box<Matcher>,
    right: Box<Matcher>,
}

impl Sequence {
    pub(crate) fn new(left: Matcher, right: Matcher) -> Self {
        Sequence { left: Box::new(left), right: Box::new(right) }
    }

    pub fn left(&self) -> &Matcher {
        &self.left
    }

    pub fn right(&self) -> &Matcher {
        &self.right
    }

    pub(crate) fn fragment(&self) -> String {
        format!("{}{}", self.left.fragment(), self.right.fragment())
    }

    pub(crate) fn arity(&self) -> usize {
        self.left.arity() + self.right.arity()
    }

    pub(crate) fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        let pattern = format!("({})({})", self.left.fragment(), self.right.fragment());
        let Some(groups) = engine.full_groups(input, &pattern, 2)? else {
            return Ok(false);
        };

        Ok(self.left.try_match(engine, &groups[0])? && self.right.try_match(engine, &groups[1])?)
    }

    pub(crate) fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    pub(crate) fn value(&self, index: usize) -> Option<&Value> {
        let split = self.left.arity();
        if index < split { self.left.value(index) } else { self.right.value(index - split) }
    }
}
