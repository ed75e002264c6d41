//! Zero-or-one.

use crate::{FragmentEngine, MatchError, Matcher, Value};

/// `child`, or nothing. Same slots as `child`; an absent child leaves them
/// unpopulated and still counts as a successful match.
#[derive(Debug, Clone, PartialEq)]
pub struct Optional {
    child: Box<Matcher>,
}

impl Optional {
    pub(crate) fn new(child: Matcher) -> Self {
        Optional { child: Box::new(child) }
    }

    pub fn child(&self) -> &Matcher {
        &self.child
    }

    pub(crate) fn fragment(&self) -> String {
        format!("(?:{})?", self.child.fragment())
    }

    pub(crate) fn arity(&self) -> usize {
        self.child.arity()
    }

    /// The whole-string check decides success; a scan for the child's own
    /// fragment then decides what the child gets to see. A scan that finds
    /// something other than the whole input is reported, not reconciled.
    pub(crate) fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        if !engine.is_full_match(input, &self.fragment())? {
            return Ok(false);
        }
        if input.is_empty() {
            return Ok(true);
        }

        let fragment = self.child.fragment();
        let found = engine.find_all(input, &fragment)?;
        match found.as_slice() {
            [] => Ok(true),
            [only] if only == input => self.child.try_match(engine, input),
            _ => Err(MatchError::ScanDivergence { fragment, input: input.to_string(), found }),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.child.clear();
    }

    pub(crate) fn value(&self, index: usize) -> Option<&Value> {
        self.child.value(index)
    }
}
