//! Sequence expressions: `{x..y}` and `{x..y..step}`
//!
//!     Two flavors are recognized. Numeric ranges take (optionally negative) integers for
//!     both endpoints and the step. Alphabetic ranges take a single ASCII letter for each
//!     endpoint and an integer step.
//!
//!     The direction always comes from the endpoints: `{5..1}` counts down. Only the
//!     magnitude of an explicit step is used, so `{1..5..-2}` and `{1..5..2}` are the same
//!     range. A step of `0` counts as `1`, as in bash.
//!
//!     Numeric ranges are zero padded when any literal is written with a leading zero
//!     (`{01..10}`, `{-05..5}`). The padded width is the longest endpoint as written, sign
//!     included, which is why `{-05..5}` yields `-05` next to `005`.
//!
//!     Alphabetic ranges walk character codes, so `{X..c}` passes through `[`, `]`, `^`,
//!     `_` and the backtick. The backslash in that span comes out as an empty string.

use once_cell::sync::Lazy;
use regex::Regex;

/// `-?N..-?N(..-?N)?`, ASCII digits only.
static NUMERIC_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?[0-9]+)\.\.(-?[0-9]+)(?:\.\.(-?[0-9]+))?$").unwrap()
});

/// `L..L(..-?N)?` with a single ASCII letter for each endpoint.
static ALPHA_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z])\.\.([a-zA-Z])(?:\.\.(-?[0-9]+))?$").unwrap()
});

/// A numeric range such as `{01..10..3}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericSequence {
    pub start: i64,
    pub end: i64,
    pub step: Option<i64>,
    /// Zero-pad every value to this many characters, sign included
    pub pad_width: Option<usize>,
}

impl NumericSequence {
    /// Recognize a numeric range body. Literals that overflow an `i64` are not ranges.
    pub fn parse(body: &str) -> Option<Self> {
        let caps = NUMERIC_SEQUENCE.captures(body)?;
        let start_lit = caps.get(1)?.as_str();
        let end_lit = caps.get(2)?.as_str();
        let step_lit = caps.get(3).map(|m| m.as_str());

        let start = start_lit.parse().ok()?;
        let end = end_lit.parse().ok()?;
        let step = match step_lit {
            Some(lit) => Some(lit.parse().ok()?),
            None => None,
        };

        let padded = [Some(start_lit), Some(end_lit), step_lit]
            .into_iter()
            .flatten()
            .any(is_padded);
        let pad_width = padded.then(|| start_lit.len().max(end_lit.len()));

        Some(Self {
            start,
            end,
            step,
            pad_width,
        })
    }

    pub fn generate(&self) -> Vec<String> {
        walk(self.start.into(), self.end.into(), self.step)
            .map(|i| self.format(i))
            .collect()
    }

    fn format(&self, value: i128) -> String {
        let digits = value.to_string();
        let Some(width) = self.pad_width else {
            return digits;
        };
        let need = width.saturating_sub(digits.len());
        if need == 0 {
            return digits;
        }
        let zeros = "0".repeat(need);
        match digits.strip_prefix('-') {
            Some(abs) => format!("-{zeros}{abs}"),
            None => format!("{zeros}{digits}"),
        }
    }
}

/// An alphabetic range such as `{a..z..2}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaSequence {
    pub start: char,
    pub end: char,
    pub step: Option<i64>,
}

impl AlphaSequence {
    pub fn parse(body: &str) -> Option<Self> {
        let caps = ALPHA_SEQUENCE.captures(body)?;
        let start = caps.get(1)?.as_str().chars().next()?;
        let end = caps.get(2)?.as_str().chars().next()?;
        let step = match caps.get(3) {
            Some(lit) => Some(lit.as_str().parse().ok()?),
            None => None,
        };
        Some(Self { start, end, step })
    }

    pub fn generate(&self) -> Vec<String> {
        walk(u32::from(self.start).into(), u32::from(self.end).into(), self.step)
            .map(|code| {
                match u32::try_from(code).ok().and_then(char::from_u32) {
                    Some('\\') | None => String::new(),
                    Some(c) => c.to_string(),
                }
            })
            .collect()
    }
}

/// Values from `x` to `y` inclusive, moving towards `y` by the magnitude of `step`.
fn walk(x: i128, y: i128, step: Option<i64>) -> impl Iterator<Item = i128> {
    let magnitude = match step.map(i64::unsigned_abs) {
        Some(0) | None => 1,
        Some(m) => i128::from(m),
    };
    let descending = y < x;
    let incr = if descending { -magnitude } else { magnitude };

    std::iter::successors(Some(x), move |i| Some(i + incr)).take_while(move |i| {
        if descending {
            *i >= y
        } else {
            *i <= y
        }
    })
}

fn is_padded(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    digits.len() > 1 && digits.starts_with('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(body: &str) -> Vec<String> {
        NumericSequence::parse(body).expect("numeric range").generate()
    }

    fn alpha(body: &str) -> Vec<String> {
        AlphaSequence::parse(body).expect("alpha range").generate()
    }

    #[test]
    fn test_numeric_ascending_and_descending() {
        assert_eq!(numeric("1..5"), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(numeric("5..1"), vec!["5", "4", "3", "2", "1"]);
        assert_eq!(numeric("-2..2"), vec!["-2", "-1", "0", "1", "2"]);
    }

    #[test]
    fn test_numeric_single_value() {
        assert_eq!(numeric("3..3"), vec!["3"]);
    }

    #[test]
    fn test_step_sign_is_ignored() {
        assert_eq!(numeric("1..10..3"), vec!["1", "4", "7", "10"]);
        assert_eq!(numeric("1..10..-3"), vec!["1", "4", "7", "10"]);
        assert_eq!(numeric("10..1..3"), vec!["10", "7", "4", "1"]);
    }

    #[test]
    fn test_zero_step_counts_as_one() {
        assert_eq!(numeric("1..3..0"), vec!["1", "2", "3"]);
        assert_eq!(numeric("3..1..0"), vec!["3", "2", "1"]);
        assert_eq!(numeric("4..4..0"), vec!["4"]);
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(numeric("01..3"), vec!["01", "02", "03"]);
        assert_eq!(numeric("8..010"), vec!["008", "009", "010"]);
        assert_eq!(numeric("-05..-3"), vec!["-05", "-04", "-03"]);
        assert_eq!(numeric("-1..01"), vec!["-1", "00", "01"]);
    }

    #[test]
    fn test_padded_step_pads_values() {
        assert_eq!(numeric("1..10..03"), vec!["01", "04", "07", "10"]);
    }

    #[test]
    fn test_zero_alone_is_not_padding() {
        assert_eq!(numeric("0..2"), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_overflowing_literal_is_not_a_range() {
        assert_eq!(NumericSequence::parse("1..99999999999999999999"), None);
        assert_eq!(NumericSequence::parse("1..2..99999999999999999999"), None);
    }

    #[test]
    fn test_extreme_endpoints_do_not_overflow() {
        let max = i64::MAX.to_string();
        let body = format!("{}..{}..{}", i64::MAX - 1, max, i64::MAX);
        assert_eq!(numeric(&body), vec![(i64::MAX - 1).to_string()]);
    }

    #[test]
    fn test_not_numeric() {
        for body in ["1..", "..1", "1...2", "a..1", "1..2..", "+1..2", "1,2"] {
            assert_eq!(NumericSequence::parse(body), None, "{body}");
        }
    }

    #[test]
    fn test_alpha_ranges() {
        assert_eq!(alpha("a..e"), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(alpha("e..a..2"), vec!["e", "c", "a"]);
        assert_eq!(alpha("a..a"), vec!["a"]);
    }

    #[test]
    fn test_alpha_range_drops_backslash() {
        assert_eq!(alpha("Z..a"), vec!["Z", "[", "", "]", "^", "_", "`", "a"]);
    }

    #[test]
    fn test_not_alpha() {
        for body in ["ab..c", "a..", "1..a", "a..b..c", "é..z"] {
            assert_eq!(AlphaSequence::parse(body), None, "{body}");
        }
    }
}
