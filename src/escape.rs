//! Escape handling
//!
//! Before expansion every escaped delimiter (`\\`, `\{`, `\}`, `\,`, `\.`) is swapped for a
//! sentinel token so the expander cannot mistake it for syntax. After expansion the
//! sentinels are turned into the bare characters they stand for, which is how `\{a,b\}`
//! ends up as the literal `{a,b}`.
//!
//! Sentinels are NUL-delimited words. NUL never shows up in a glob pattern, and the driver
//! refuses to expand input that carries one (see [`contains_reserved`]): a stray NUL can
//! join up with a sentinel inserted next to it and unescape in the wrong place.

pub const SLASH: &str = "\0SLASH\0";
pub const OPEN: &str = "\0OPEN\0";
pub const CLOSE: &str = "\0CLOSE\0";
pub const COMMA: &str = "\0COMMA\0";
pub const PERIOD: &str = "\0PERIOD\0";

/// (escape sequence, sentinel, literal) in substitution order. Backslash goes first so
/// that `\\{` reads as an escaped backslash followed by a live brace.
const TABLE: [(&str, &str, &str); 5] = [
    ("\\\\", SLASH, "\\"),
    ("\\{", OPEN, "{"),
    ("\\}", CLOSE, "}"),
    ("\\,", COMMA, ","),
    ("\\.", PERIOD, "."),
];

/// Replace escape sequences with sentinels.
pub fn escape(input: &str) -> String {
    TABLE
        .iter()
        .fold(input.to_string(), |acc, (seq, sentinel, _)| acc.replace(seq, sentinel))
}

/// Replace sentinels with the literal characters they stand for.
pub fn unescape(input: &str) -> String {
    if !input.contains('\0') {
        return input.to_string();
    }
    TABLE
        .iter()
        .fold(input.to_string(), |acc, (_, sentinel, literal)| acc.replace(sentinel, literal))
}

/// Whether `input` contains the NUL character sentinels are built from, in which case
/// escaping it is not guaranteed to be reversible.
pub fn contains_reserved(input: &str) -> bool {
    input.contains('\0')
}
