//! # braces
//!
//! Brace expansion with the rules bash uses, quirks included.
//!
//! A pattern such as `a{b,c}d{1..3}` expands to the ordered list of literal strings
//! `abd1 abd2 abd3 acd1 acd2 acd3`. The result is meant to be handed to a glob matcher,
//! so expansion never touches the filesystem and never fails: malformed groups are
//! simply left as text.
//!
//! Layout
//!
//! src/
//!   ├── balanced     Locating the first balanced `{...}` pair
//!   ├── escape       Sentinels for `\\`, `\{`, `\}`, `\,` and `\.`
//!   ├── split        Top-level comma splitting of a group body
//!   ├── sequence     `{x..y}` / `{x..y..step}` ranges
//!   ├── group        Classification of a group body
//!   └── expansion    The recursive expander and the [`expand`] entry point
//!
//! Limits
//!
//! There is no guard on recursion depth or on the number of results. Deeply nested
//! patterns or huge ranges (`{1..999999999}`) will happily exhaust memory or the stack,
//! just like they would in the shell.

pub mod balanced;
pub mod escape;
pub mod expansion;
pub mod group;
pub mod sequence;
pub mod split;

pub use expansion::expand;
