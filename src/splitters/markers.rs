// Boundary markers: conservative hardword splitting shared by the splitters.

/// Separator inserted between hardwords and between softwords of a split.
pub const SEPARATOR: char = '_';

/// Insert a separator between a digit and an adjacent letter, and between a
/// lowercase letter and a following uppercase letter.
pub fn mark(token: &str) -> String {
    let mut marked = String::with_capacity(token.len() + 4);
    let mut prev: Option<char> = None;

    for ch in token.chars() {
        if let Some(p) = prev {
            let digit_boundary = (p.is_ascii_digit() && ch.is_alphabetic())
                || (p.is_alphabetic() && ch.is_ascii_digit());
            let case_boundary = p.is_lowercase() && ch.is_uppercase();

            if digit_boundary || case_boundary {
                marked.push(SEPARATOR);
            }
        }
        marked.push(ch);
        prev = Some(ch);
    }

    marked
}

/// Split a marked token on separators (and any other non-alphanumeric
/// character), dropping empty segments.
pub fn split_on_markers(marked: &str) -> Vec<&str> {
    marked
        .split(|c: char| c == SEPARATOR || !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Hardwords of a raw token, in order.
pub fn hardwords(token: &str) -> Vec<String> {
    split_on_markers(&mark(token))
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_case_transitions() {
        assert_eq!(mark("getString"), "get_String");
        assert_eq!(mark("GPSstate"), "GPSstate");
        assert_eq!(mark("ASTVisitor"), "ASTVisitor");
    }

    #[test]
    fn test_mark_digits() {
        assert_eq!(mark("utf8Decoder"), "utf_8_Decoder");
        assert_eq!(mark("x86"), "x_86");
        assert_eq!(mark("2d"), "2_d");
    }

    #[test]
    fn test_split_on_markers_drops_empty_segments() {
        assert_eq!(split_on_markers("__foo__bar_"), vec!["foo", "bar"]);
        assert_eq!(split_on_markers("a-b.c"), vec!["a", "b", "c"]);
        assert!(split_on_markers("").is_empty());
    }

    #[test]
    fn test_hardwords_reconstruct_token() {
        for token in ["getString", "snake_case_word", "parseHTTP2Header", "x"] {
            let joined: String = hardwords(token).concat();
            assert_eq!(joined, token.replace('_', ""));
        }
    }
}
