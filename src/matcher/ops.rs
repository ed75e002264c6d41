//! Combinator methods and operator sugar.
//!
//! ```text
//! a >> b          Sequence          a.then(b)
//! a >> "text"     Sequence          a.then_literal("text")
//! a | b           Alternation       a.or(b)
//! ```
//!
//! `Optional`, `Repetition` and `DelimitedList` have no operator; use
//! [`optional`](Matcher::optional), [`repeat`](Matcher::repeat) and
//! [`delimited_by`](Matcher::delimited_by).

use super::{Alternation, DelimitedList, Optional, Repetition, Sequence};
use crate::{CountSpec, Matcher};
use std::ops::{BitOr, Shr};

impl Matcher {
    /// `self` immediately followed by `next`.
    pub fn then(self, next: impl Into<Matcher>) -> Matcher {
        Matcher::Sequence(Sequence::new(self, next.into()))
    }

    pub fn then_literal(self, text: &str) -> Matcher {
        self.then(Matcher::literal(text))
    }

    /// `self`, or else `other` (left-biased).
    pub fn or(self, other: impl Into<Matcher>) -> Matcher {
        Matcher::Alternation(Alternation::new(self, other.into()))
    }

    pub fn optional(self) -> Matcher {
        Matcher::Optional(Optional::new(self))
    }

    pub fn repeat(self, count: CountSpec) -> Matcher {
        Matcher::Repetition(Repetition::new(self, count))
    }

    pub fn one_or_more(self) -> Matcher {
        self.repeat(CountSpec::one_or_more())
    }

    pub fn zero_or_more(self) -> Matcher {
        self.repeat(CountSpec::zero_or_more())
    }

    /// One or more `self`s separated by the literal `delimiter`.
    pub fn delimited_by(self, delimiter: &str) -> Matcher {
        Matcher::DelimitedList(DelimitedList::new(self, delimiter))
    }
}

impl Shr for Matcher {
    type Output = Matcher;

    fn shr(self, rhs: Matcher) -> Matcher {
        self.then(rhs)
    }
}

impl Shr<&str> for Matcher {
    type Output = Matcher;

    fn shr(self, rhs: &str) -> Matcher {
        self.then_literal(rhs)
    }
}

impl Shr<Matcher> for &str {
    type Output = Matcher;

    fn shr(self, rhs: Matcher) -> Matcher {
        Matcher::literal(self).then(rhs)
    }
}

impl BitOr for Matcher {
    type Output = Matcher;

    fn bitor(self, rhs: Matcher) -> Matcher {
        self.or(rhs)
    }
}

impl BitOr<&str> for Matcher {
    type Output = Matcher;

    fn bitor(self, rhs: &str) -> Matcher {
        self.or(Matcher::literal(rhs))
    }
}

impl BitOr<Matcher> for &str {
    type Output = Matcher;

    fn bitor(self, rhs: Matcher) -> Matcher {
        Matcher::literal(self).or(rhs)
    }
}
