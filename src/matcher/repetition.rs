//! Counted repetition.
//!
//! Matching happens in two independent steps:
//!
//! ```text
//! 1. whole-string check   \A(?:(?:child){count})\z      -> match / no match
//! 2. occurrence scan      find_iter((?:child))           -> one child.match per hit
//! ```
//!
//! The scan ignores the count and uses leftmost-first semantics, so for some
//! children it can carve the input differently from the way step 1 did. The
//! list holds whatever the scan found, even when that is fewer items than the
//! count asked for (`[0-9]+{2}` on `12` gives `[12]`). Occurrences that leave a
//! gap or overrun the input are reported as [`MatchError::ScanDivergence`].

use crate::{CountSpec, FragmentEngine, MatchError, Matcher, Value};
use std::ops::Range;

/// The list item recorded for one matched element: the element's value when it
/// has exactly one slot, otherwise a snapshot of the whole element tree.
pub(crate) fn capture_item(element: &Matcher) -> Value {
    if element.arity() == 1 {
        element.value(0).cloned().unwrap_or(Value::Empty)
    } else {
        Value::Tree(Box::new(element.clone()))
    }
}

fn tiles(spans: &[Range<usize>], len: usize) -> bool {
    let mut end = 0;
    for span in spans {
        if span.start != end {
            return false;
        }
        end = span.end;
    }
    end == len
}

/// `child` repeated per `count`. One slot holding a [`Value::List`].
#[derive(Debug, Clone, PartialEq)]
pub struct Repetition {
    child: Box<Matcher>,
    count: CountSpec,
    items: Option<Value>,
}

impl Repetition {
    pub(crate) fn new(child: Matcher, count: CountSpec) -> Self {
        Repetition { child: Box::new(child), count, items: None }
    }

    pub fn child(&self) -> &Matcher {
        &self.child
    }

    pub fn count(&self) -> CountSpec {
        self.count
    }

    pub(crate) fn fragment(&self) -> String {
        format!("(?:{}){{{}}}", self.child.fragment(), self.count)
    }

    pub(crate) fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        if !engine.is_full_match(input, &self.fragment())? {
            return Ok(false);
        }

        let fragment = self.child.fragment();
        let spans = engine.find_spans(input, &fragment)?;
        if !tiles(&spans, input.len()) {
            let found = spans.into_iter().map(|span| input[span].to_string()).collect();
            return Err(MatchError::ScanDivergence { fragment, input: input.to_string(), found });
        }

        let mut items = Vec::with_capacity(spans.len());
        for span in spans {
            if !self.child.try_match(engine, &input[span])? {
                return Ok(false);
            }
            items.push(capture_item(&self.child));
        }
        self.child.clear();
        self.items = Some(Value::List(items));
        Ok(true)
    }

    pub(crate) fn clear(&mut self) {
        self.child.clear();
        self.items = None;
    }

    pub(crate) fn value(&self) -> Option<&Value> {
        self.items.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiling_requires_contiguous_cover() {
        assert!(tiles(&[], 0));
        assert!(tiles(&[0..1, 1..3], 3));
        assert!(!tiles(&[0..1, 2..3], 3));
        assert!(!tiles(&[0..1], 2));
        assert!(!tiles(&[], 1));
    }
}
