//! Delimited lists, derived from the other combinators.
//!
//! `DelimitedList(item, ",")` is the tree
//!
//! ```text
//! Sequence(item, Repetition(Sequence(Literal(","), item), "0,"))
//!          ^head                       ^tail element
//! ```
//!
//! built fresh for each match and then flattened: the head's item followed by
//! the item half of every tail element.

use super::repetition::capture_item;
use super::{Literal, Repetition, Sequence};
use crate::engine::escape;
use crate::{CountSpec, FragmentEngine, MatchError, Matcher, Value};

/// One or more `child`s separated by a fixed delimiter. One slot holding a [`Value::List`].
#[derive(Debug, Clone, PartialEq)]
pub struct DelimitedList {
    child: Box<Matcher>,
    delimiter: String,
    items: Option<Value>,
}

impl DelimitedList {
    pub(crate) fn new(child: Matcher, delimiter: &str) -> Self {
        DelimitedList { child: Box::new(child), delimiter: escape(delimiter), items: None }
    }

    pub fn child(&self) -> &Matcher {
        &self.child
    }

    /// The escaped delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn derived(&self) -> Sequence {
        let item = self.child.as_ref().clone();
        let tail_element = Sequence::new(Matcher::Literal(Literal::new(&self.delimiter)), item.clone());
        let tail = Repetition::new(Matcher::Sequence(tail_element), CountSpec::zero_or_more());
        Sequence::new(item, Matcher::Repetition(tail))
    }

    pub(crate) fn fragment(&self) -> String {
        self.derived().fragment()
    }

    pub(crate) fn try_match(&mut self, engine: &FragmentEngine, input: &str) -> Result<bool, MatchError> {
        let mut tree = self.derived();
        if !tree.try_match(engine, input)? {
            return Ok(false);
        }

        let mut items = vec![capture_item(tree.left())];
        for entry in tree.right().value(0).and_then(Value::as_list).unwrap_or_default() {
            let item = match entry {
                Value::Tree(element) => match element.as_ref() {
                    Matcher::Sequence(pair) => capture_item(pair.right()),
                    other => capture_item(other),
                },
                single => single.clone(),
            };
            items.push(item);
        }

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
