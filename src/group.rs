//! Classification of a brace group body
//!
//! Ranges are checked before commas, so a body is only a comma list when it is not a
//! range. `{1..3,x}` is a comma list whose first alternative stays the literal `1..3`.

use crate::sequence::{AlphaSequence, NumericSequence};
use crate::split::split_top_level_commas;

/// What a `{...}` body turns out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// `{1..10}`, `{-3..03..2}`
    NumericSequence(NumericSequence),
    /// `{a..z}`, `{Z..A..3}`
    AlphaSequence(AlphaSequence),
    /// Two or more comma separated alternatives
    CommaList(Vec<String>),
    /// A comma exists, but only inside one nested group filling the body: `{{a,b}}`
    SingleNested(String),
    /// Nothing to expand
    Literal,
}

impl Group {
    pub fn classify(body: &str) -> Self {
        if let Some(seq) = NumericSequence::parse(body) {
            return Group::NumericSequence(seq);
        }
        if let Some(seq) = AlphaSequence::parse(body) {
            return Group::AlphaSequence(seq);
        }
        if !body.contains(',') {
            return Group::Literal;
        }

        let mut parts = split_top_level_commas(body);
        if parts.len() == 1 {
            Group::SingleNested(parts.remove(0))
        } else {
            Group::CommaList(parts)
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Group::NumericSequence(_) | Group::AlphaSequence(_))
    }

    /// Short name used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            Group::NumericSequence(_) => "numeric-sequence",
            Group::AlphaSequence(_) => "alpha-sequence",
            Group::CommaList(_) => "comma-list",
            Group::SingleNested(_) => "single-nested",
            Group::Literal => "literal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_sequence_wins() {
        assert!(matches!(Group::classify("1..3"), Group::NumericSequence(_)));
        assert!(matches!(Group::classify("-1..-3..2"), Group::NumericSequence(_)));
    }

    #[test]
    fn test_alpha_sequence() {
        assert!(matches!(Group::classify("a..c"), Group::AlphaSequence(_)));
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(
            Group::classify("a,{b,c}"),
            Group::CommaList(vec!["a".into(), "{b,c}".into()])
        );
        assert_eq!(
            Group::classify("1..3,x"),
            Group::CommaList(vec!["1..3".into(), "x".into()])
        );
    }

    #[test]
    fn test_single_nested() {
        assert_eq!(
            Group::classify("{a,b}"),
            Group::SingleNested("{a,b}".into())
        );
    }

    #[test]
    fn test_literal() {
        assert_eq!(Group::classify(""), Group::Literal);
        assert_eq!(Group::classify("abc"), Group::Literal);
        assert_eq!(Group::classify("1..b"), Group::Literal);
        assert_eq!(Group::classify("{a}"), Group::Literal);
    }

    #[test]
    fn test_is_sequence() {
        assert!(Group::classify("1..2").is_sequence());
        assert!(!Group::classify("a,b").is_sequence());
        assert_eq!(Group::classify("x,y").kind(), "comma-list");
    }
}
