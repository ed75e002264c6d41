//! Literal text escaping.
//!
//! Literal text is turned into a fragment by backslash-escaping every pattern
//! metacharacter. Escaping must be idempotent: a delimiter or literal that has
//! already been escaped once (for instance because a combinator re-derived it
//! from another fragment) comes back unchanged.
//!
//! A character counts as already escaped when it is preceded by an odd run of
//! backslashes. Scanning left to right, that is the same as treating
//! `\` followed by a metacharacter as one pre-escaped pair.

const METACHARACTERS: &[char] = &['.', '(', ')', '[', ']', '|', '{', '}', '*', '+', '?', '^', '$', '/', '-', '\\'];

fn is_meta(c: char) -> bool {
    METACHARACTERS.contains(&c)
}

/// Escape `text` so it matches itself literally. Applying it twice is the same as once.
///
/// ```
/// assert_eq!(matchtree::escape("a.b*c"), r"a\.b\*c");
/// assert_eq!(matchtree::escape(r"a\.b"), r"a\.b");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek().filter(|next| is_meta(**next)) {
                out.push(c);
                out.push(next);
                chars.next();
                continue;
            }
        }
        if is_meta(c) {
            out.push('\\');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_each_metacharacter_once() {
        let cases: Vec<(&str, &str)> = vec![
            ("plain words", "plain words"),
            ("a.b*c", r"a\.b\*c"),
            ("[x]", r"\[x\]"),
            ("(1|2)", r"\(1\|2\)"),
            ("$^", r"\$\^"),
            ("a-b/c", r"a\-b\/c"),
            ("{3}+?", r"\{3\}\+\?"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn pre_escaped_pairs_are_left_alone() {
        assert_eq!(escape(r"a\.b"), r"a\.b");
        assert_eq!(escape(r"\\"), r"\\");
        assert_eq!(escape(escape("x.y|z").as_str()), r"x\.y\|z");
    }

    #[test]
    fn lone_backslashes_are_escaped() {
        assert_eq!(escape(r"\d"), r"\\d");
        assert_eq!(escape("end\\"), r"end\\");
    }
}
