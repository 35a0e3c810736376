use crate::parser::IdentifierSpan;
use crate::splitters::markers;
use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Parse plain text and keep only the words that look like identifiers
pub fn parse(content: &str) -> Result<Vec<IdentifierSpan>> {
    let mut spans = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        for (column, word) in extract_words(line) {
            if looks_like_identifier(word) {
                spans.push(IdentifierSpan {
                    text: word.to_string(),
                    line: line_num + 1,
                    column: column + 1, // 1-indexed
                });
            }
        }
    }

    Ok(spans)
}

/// Word-bound segments, cut again on anything that cannot appear in an
/// identifier (`self.maxSize` is one segment).
fn extract_words(line: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();

    for (start, segment) in line.split_word_bound_indices() {
        let mut offset = 0;
        for piece in segment.split(|c: char| !is_identifier_char(c)) {
            if !piece.is_empty() {
                words.push((start + offset, piece));
            }
            offset += piece.len() + 1;
        }
    }

    words
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Snake case, camel case, or letters mixed with digits. Ordinary prose
/// words and all-caps acronyms are not identifiers.
fn looks_like_identifier(word: &str) -> bool {
    if !word.chars().any(char::is_alphabetic) {
        return false;
    }

    let has_lower = word.chars().any(char::is_lowercase);
    let inner_upper = word.chars().skip(1).any(char::is_uppercase);

    word.contains('_') || markers::mark(word) != word || (has_lower && inner_upper)
}
