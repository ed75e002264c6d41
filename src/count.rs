//! Repetition counts.

use crate::ConfigError;
use std::fmt;
use std::str::FromStr;

/// How many occurrences a [`Repetition`](crate::Matcher::repeat) accepts.
///
/// Written and parsed in the body syntax of a regex `{…}` quantifier:
/// `"3"` (exactly), `"2,5"` (between, inclusive), `"1,"` (at least).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountSpec {
    min: usize,
    max: Option<usize>,
    open: bool,
}

impl CountSpec {
    pub fn exactly(n: usize) -> Self {
        CountSpec { min: n, max: Some(n), open: false }
    }

    /// `min..=max` occurrences. `between(n, n)` is the same count as `exactly(n)`.
    pub fn between(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::BadCount(format!("{min},{max}")));
        }
        if min == max {
            return Ok(CountSpec::exactly(min));
        }
        Ok(CountSpec { min, max: Some(max), open: true })
    }

    pub fn at_least(min: usize) -> Self {
        CountSpec { min, max: None, open: true }
    }

    pub fn zero_or_more() -> Self {
        CountSpec::at_least(0)
    }

    pub fn one_or_more() -> Self {
        CountSpec::at_least(1)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn contains(&self, n: usize) -> bool {
        n >= self.min && self.max.is_none_or(|max| n <= max)
    }
}

impl fmt::Display for CountSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.open, self.max) {
            (false, _) => write!(f, "{}", self.min),
            (true, Some(max)) => write!(f, "{},{}", self.min, max),
            (true, None) => write!(f, "{},", self.min),
        }
    }
}

impl FromStr for CountSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::BadCount(s.to_string());
        let caps = regex!(r"^\s*(\d+)\s*(?:(,)\s*(\d*)\s*)?$").captures(s).ok_or_else(bad)?;

        let min: usize = caps[1].parse().map_err(|_| bad())?;
        match (caps.get(2), caps.get(3).map(|m| m.as_str()).filter(|m| !m.is_empty())) {
            (None, _) => Ok(CountSpec::exactly(min)),
            (Some(_), None) => Ok(CountSpec::at_least(min)),
            (Some(_), Some(max)) => CountSpec::between(min, max.parse().map_err(|_| bad())?).map_err(|_| bad()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quantifier_bodies() {
        assert_eq!("3".parse::<CountSpec>().unwrap(), CountSpec::exactly(3));
        assert_eq!("2,5".parse::<CountSpec>().unwrap(), CountSpec::between(2, 5).unwrap());
        assert_eq!("0,".parse::<CountSpec>().unwrap(), CountSpec::zero_or_more());
        assert_eq!(" 1 , ".parse::<CountSpec>().unwrap(), CountSpec::one_or_more());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for spec in ["4", "1,3", "2,"] {
            assert_eq!(spec.parse::<CountSpec>().unwrap().to_string(), spec);
        }
    }

    #[test]
    fn backwards_and_malformed_counts_are_rejected() {
        for spec in ["5,2", "", ",3", "a", "1,2,3", "-1"] {
            assert_eq!(spec.parse::<CountSpec>(), Err(ConfigError::BadCount(spec.to_string())), "spec {spec:?}");
        }
        assert!(CountSpec::between(3, 1).is_err());
    }

    #[test]
    fn equal_bounds_are_an_exact_count() {
        assert_eq!(CountSpec::between(3, 3).unwrap(), CountSpec::exactly(3));
        assert_eq!("3,3".parse::<CountSpec>().unwrap(), CountSpec::exactly(3));
        assert_eq!(CountSpec::between(3, 3).unwrap().to_string(), "3");
    }

    #[test]
    fn contains_honours_both_bounds() {
        let spec = CountSpec::between(2, 3).unwrap();
        assert!(!spec.contains(1));
        assert!(spec.contains(2));
        assert!(spec.contains(3));
        assert!(!spec.contains(4));
        assert!(CountSpec::zero_or_more().contains(0));
        assert!(CountSpec::at_least(2).contains(100));
    }
}
