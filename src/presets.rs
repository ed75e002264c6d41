//! Ready-made matchers for common character classes and word runs.

use crate::matcher::{EnumeratedRange, RangeSpec};
use crate::{ConfigError, Matcher};

/// A single decimal digit, captured as `Value::Integer`.
pub fn digit() -> Matcher {
    Matcher::Range(EnumeratedRange::known(RangeSpec::Unsigned { min: 0, max: 9 }))
}

/// A single character `a`..=`z`.
pub fn lower_case() -> Matcher {
    Matcher::Range(EnumeratedRange::known(RangeSpec::Char { min: 'a', max: 'z' }))
}

/// A single character `A`..=`Z`.
pub fn upper_case() -> Matcher {
    Matcher::Range(EnumeratedRange::known(RangeSpec::Char { min: 'A', max: 'Z' }))
}

/// Any ASCII letter. Both branches are character ranges, so they share slot 0.
pub fn letter() -> Matcher {
    lower_case() | upper_case()
}

/// A digit or a letter: slot 0 holds the digit, slot 1 the letter.
pub fn alpha_num() -> Matcher {
    digit() | letter()
}

/// `n` words separated by single spaces; slot `i` holds word `i`.
pub fn multiple_words(n: usize) -> Result<Matcher, ConfigError> {
    match n {
        0 => Err(ConfigError::ZeroWords),
        1 => Ok(Matcher::word()),
        _ => Ok(Matcher::word() >> " " >> multiple_words(n - 1)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn letter_shares_one_slot() {
        let mut m = letter();
        assert_eq!(m.arity(), 1);
        assert!(m.matches("Q"));
        assert_eq!(m.get(0), &Value::Char('Q'));
        assert!(!m.matches("7"));
    }

    #[test]
    fn alpha_num_keeps_digit_and_letter_apart() {
        let mut m = alpha_num();
        assert_eq!(m.arity(), 2);

        assert!(m.matches("7"));
        assert_eq!(m.values(), vec![Some(&Value::Integer(7)), None]);

        assert!(m.matches("x"));
        assert_eq!(m.values(), vec![None, Some(&Value::Char('x'))]);
    }

    #[test]
    fn multiple_words_has_one_slot_per_word() {
        let mut m = multiple_words(3).unwrap();
        assert_eq!(m.arity(), 3);
        assert!(m.matches("alpha beta gamma"));
        let words: Vec<_> = (0..3).map(|i| m.get(i).as_text().unwrap().to_string()).collect();
        assert_eq!(words, ["alpha", "beta", "gamma"]);
        assert!(!m.matches("alpha beta"));
        assert_eq!(multiple_words(0), Err(ConfigError::ZeroWords));
    }
}
