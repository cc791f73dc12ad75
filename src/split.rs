//! Comma splitting for group bodies
//!
//! Basically `body.split(',')`, except nested brace groups stay in one piece:
//! `a,{b,c},d` gives three parts, not four.

use crate::balanced::balanced;

/// Split a group body on commas that are not inside a nested balanced group.
///
/// Joining the result with `,` gives back `body`.
pub fn split_top_level_commas(body: &str) -> Vec<String> {
    if body.is_empty() {
        return vec![String::new()];
    }

    let Some(m) = balanced('{', '}', body) else {
        return body.split(',').map(str::to_string).collect();
    };

    let mut parts: Vec<String> = m.pre.split(',').map(str::to_string).collect();
    if let Some(last) = parts.last_mut() {
        last.push('{');
        last.push_str(m.body);
        last.push('}');
    }

    if !m.post.is_empty() {
        let mut rest = split_top_level_commas(m.post).into_iter();
        if let (Some(last), Some(head)) = (parts.last_mut(), rest.next()) {
            last.push_str(&head);
        }
        parts.extend(rest);
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        assert_eq!(split_top_level_commas(""), vec![""]);
    }

    #[test]
    fn test_flat_list() {
        assert_eq!(split_top_level_commas("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_top_level_commas("a,,"), vec!["a", "", ""]);
    }

    #[test]
    fn test_nested_group_is_one_part() {
        assert_eq!(split_top_level_commas("a,{b,c},d"), vec!["a", "{b,c}", "d"]);
    }

    #[test]
    fn test_nested_group_glued_to_text() {
        assert_eq!(
            split_top_level_commas("x{1,2}y,z{3,4}"),
            vec!["x{1,2}y", "z{3,4}"]
        );
    }

    #[test]
    fn test_single_nested_group() {
        assert_eq!(split_top_level_commas("{a,b}"), vec!["{a,b}"]);
    }

    #[test]
    fn test_unbalanced_brace_splits_naively() {
        assert_eq!(split_top_level_commas("a,{b,c"), vec!["a", "{b", "c"]);
    }

    #[test]
    fn test_rejoining_gives_back_the_body() {
        for body in ["a,{b,{c,d}},e", "{x}{y},z", "p,q{r,s}t,u", ",{,},"] {
            assert_eq!(split_top_level_commas(body).join(","), body);
        }
    }
}
