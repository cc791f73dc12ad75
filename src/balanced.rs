//! Balanced delimiter matching
//!
//!     Finds the first pair of matching `open`/`close` delimiters in a string, taking
//!     nesting of the same delimiters into account. The expander only ever asks for
//!     `{`/`}` but nothing here depends on that.
//!
//!     When the input has more opens than closes, the innermost pair that does close is
//!     returned, so `{a{b}` matches `{b}` with `{a` left in `pre`. Callers rely on this:
//!     text in `pre` is never looked at again for groups.

/// A matched pair of delimiters, split into the three surrounding slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancedMatch<'a> {
    /// Byte offset of the opening delimiter
    pub start: usize,
    /// Byte offset of the closing delimiter
    pub end: usize,
    /// Everything before the opening delimiter
    pub pre: &'a str,
    /// Everything strictly between the delimiters
    pub body: &'a str,
    /// Everything after the closing delimiter
    pub post: &'a str,
}

/// Locate the first balanced `open`..`close` pair in `input`.
pub fn balanced(open: char, close: char, input: &str) -> Option<BalancedMatch<'_>> {
    let (start, end) = range(open, close, input)?;
    Some(BalancedMatch {
        start,
        end,
        pre: &input[..start],
        body: &input[start + open.len_utf8()..end],
        post: &input[end + close.len_utf8()..],
    })
}

/// Byte offsets of the first balanced `open`..`close` pair in `input`.
pub fn range(open: char, close: char, input: &str) -> Option<(usize, usize)> {
    let find_from = |needle: char, from: usize| -> Option<usize> {
        input.get(from..)?.find(needle).map(|idx| idx + from)
    };

    let first_open = input.find(open)?;
    let mut next_close = find_from(close, first_open + open.len_utf8())?;
    if open == close {
        return Some((first_open, next_close));
    }

    let mut next_open = Some(first_open);
    let mut opens: Vec<usize> = Vec::new();
    // Leftmost pair that closed while other opens were still pending
    let mut fallback: Option<(usize, usize)> = None;
    let mut i = first_open;

    loop {
        if Some(i) == next_open {
            opens.push(i);
            next_open = find_from(open, i + open.len_utf8());
        } else if opens.len() == 1 {
            return opens.pop().map(|start| (start, next_close));
        } else {
            if let Some(start) = opens.pop() {
                if fallback.map_or(true, |(left, _)| start < left) {
                    fallback = Some((start, next_close));
                }
            }
            match find_from(close, i + close.len_utf8()) {
                Some(close_idx) => next_close = close_idx,
                // Out of closes with opens pending
                None => return fallback,
            }
        }

        i = match next_open {
            Some(open_idx) if open_idx < next_close => open_idx,
            _ => next_close,
        };
    }
}
