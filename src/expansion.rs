//! The recursive expander
//!
//!     [`expand`] is the public entry point. It deals with escapes and with a leading `{}`,
//!     then hands the pattern to the recursive expander, which works one group at a time:
//!
//!     1. Find the first balanced group, splitting the pattern into `pre`, `body` and
//!        `post`. No group means nothing to expand.
//!     2. `pre` is left alone: any brace in it failed to match already.
//!     3. `${...}` is a parameter expansion in the shell, so the group is kept verbatim.
//!     4. Otherwise the body is classified (see [`Group`]) and turned into a list of
//!        alternatives, each of which may itself need expanding.
//!     5. Every alternative is combined with every expansion of `post`, alternatives in the
//!        outer loop.
//!
//!     Empty results are dropped at the top level, except for ranges. Bash does the same:
//!     `{,a}` gives just `a`.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::balanced::balanced;
use crate::escape::{self, contains_reserved, unescape};
use crate::group::Group;

/// A comma followed, somewhere later on the same line, by a close brace. Used to spot
/// groups like `{a},b}` where the first `}` should have been literal.
static MALFORMED_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",[^\n\r\x{2028}\x{2029}]*\}").unwrap());

/// Expand every brace group in `pattern`.
///
/// The results come back in the order bash would print them, duplicates included, with
/// escape sequences resolved to the characters they protect. An empty pattern expands to
/// nothing at all.
pub fn expand(pattern: &str) -> Vec<String> {
    if pattern.is_empty() {
        return Vec::new();
    }

    if contains_reserved(pattern) {
        warn!(
            pattern,
            "pattern contains a NUL character, returning it unexpanded"
        );
        return vec![pattern.to_string()];
    }

    // Bash keeps a leading `{}` as is, but only at the very start: `{},a}b` comes back
    // unchanged while `a{},b}c` gives `a}c abc`.
    let pattern: Cow<'_, str> = match pattern.strip_prefix("{}") {
        Some(rest) => Cow::Owned(format!("\\{{\\}}{rest}")),
        None => Cow::Borrowed(pattern),
    };

    let results: Vec<String> = expand_group(&escape::escape(&pattern), true)
        .iter()
        .map(|s| unescape(s))
        .collect();

    debug!(pattern = %pattern, count = results.len(), "expanded pattern");
    results
}

fn expand_group(input: &str, is_top: bool) -> Vec<String> {
    let Some(m) = balanced('{', '}', input) else {
        return vec![input.to_string()];
    };
    let pre = m.pre;

    if pre.ends_with('$') {
        return expand_post(m.post)
            .into_iter()
            .map(|p| format!("{pre}{{{}}}{p}", m.body))
            .collect();
    }

    let group = Group::classify(m.body);
    trace!(pre, body = m.body, post = m.post, kind = group.kind(), "brace group");
    let is_sequence = group.is_sequence();

    let alternatives = match group {
        Group::Literal => {
            if MALFORMED_TAIL.is_match(m.post) {
                let rewritten = format!("{pre}{{{}{}{}", m.body, escape::CLOSE, m.post);
                debug!(input, "close brace followed by a comma list, treating it as literal");
                return expand_group(&rewritten, false);
            }
            return vec![input.to_string()];
        }
        Group::NumericSequence(seq) => seq.generate(),
        Group::AlphaSequence(seq) => seq.generate(),
        Group::SingleNested(inner) => {
            // x{{a,b}}y ==> x{a}y x{b}y
            let wrapped: Vec<String> = expand_group(&inner, false)
                .into_iter()
                .map(|e| format!("{{{e}}}"))
                .collect();
            if let [only] = wrapped.as_slice() {
                return expand_post(m.post)
                    .into_iter()
                    .map(|p| format!("{pre}{only}{p}"))
                    .collect();
            }
            expand_each(&wrapped)
        }
        Group::CommaList(parts) => expand_each(&parts),
    };

    let post = expand_post(m.post);
    let mut expansions = Vec::with_capacity(alternatives.len() * post.len());
    for alt in &alternatives {
        for p in &post {
            let expansion = format!("{pre}{alt}{p}");
            if !is_top || is_sequence || !expansion.is_empty() {
                expansions.push(expansion);
            }
        }
    }
    expansions
}

fn expand_post(post: &str) -> Vec<String> {
    if post.is_empty() {
        vec![String::new()]
    } else {
        expand_group(post, false)
    }
}

fn expand_each(parts: &[String]) -> Vec<String> {
    parts
        .iter()
        .flat_map(|part| expand_group(part, false))
        .collect()
}
