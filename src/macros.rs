/// Lazily compiled static regex for patterns that are fixed at compile time.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Left fold of matchers into nested sequences: `seq![a, b, c]` is `(a >> b) >> c`.
///
/// String literals are accepted anywhere a matcher is and become escaped literals.
#[macro_export]
macro_rules! seq {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let tree = $crate::Matcher::from($first);
        $( let tree = tree.then($crate::Matcher::from($rest)); )+
        tree
    }};
}

/// Left fold of matchers into nested left-biased alternations: `alt![a, b, c]` is `(a | b) | c`.
#[macro_export]
macro_rules! alt {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let tree = $crate::Matcher::from($first);
        $( let tree = tree.or($crate::Matcher::from($rest)); )+
        tree
    }};
}
