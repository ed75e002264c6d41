//! Captured values.

use crate::Matcher;
use chrono::NaiveDateTime;
use std::fmt;

/// A typed value held in a matcher slot.
///
/// The variant is fixed by the leaf that owns the slot: integer scalars and
/// unsigned ranges give `Integer`, word-like scalars give `Text`, and so on.
/// Repetitions and delimited lists give a `List`, whose items are the element
/// values themselves when the element has exactly one slot, or whole element
/// trees (`Tree`) otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(u64),
    Signed(i64),
    Char(char),
    Text(String),
    DateTime(NaiveDateTime),
    List(Vec<Value>),
    Tree(Box<Matcher>),
    /// A single-slot list element whose slot was left unpopulated (an absent optional).
    Empty,
}

impl Value {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_signed(&self) -> Option<i64> {
        match self {
            Value::Signed(n) => Some(*n),
            Value::Integer(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Matcher> {
        match self {
            Value::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Signed(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Tree(tree) => {
                write!(f, "(")?;
                for i in 0..tree.arity() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match tree.value(i) {
                        Some(v) => write!(f, "{v}")?,
                        None => write!(f, "-")?,
                    }
                }
                write!(f, ")")
            }
            Value::Empty => write!(f, "-"),
        }
    }
}
