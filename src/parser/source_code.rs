use crate::parser::{IdentifierSpan, SourceLang};
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref KEYWORDS: HashSet<&'static str> = [
        // shared by most C-family languages
        "break", "case", "catch", "class", "const", "continue", "default", "do", "else", "enum",
        "extends", "false", "final", "finally", "for", "goto", "if", "implements", "import",
        "interface", "new", "null", "package", "private", "protected", "public", "return",
        "static", "struct", "super", "switch", "this", "throw", "throws", "true", "try", "void",
        "volatile", "while",
        // primitive types
        "bool", "boolean", "byte", "char", "double", "float", "int", "long", "short", "signed",
        "unsigned", "usize", "isize", "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64",
        "f32", "f64", "str", "String",
        // rust
        "as", "async", "await", "crate", "dyn", "extern", "fn", "impl", "in", "let", "loop",
        "match", "mod", "move", "mut", "pub", "ref", "self", "Self", "trait", "type", "unsafe",
        "use", "where", "Some", "None", "Ok", "Err",
        // go
        "chan", "defer", "func", "go", "map", "range", "select", "var", "nil",
        // javascript / typescript
        "export", "from", "function", "instanceof", "typeof", "undefined", "yield", "of",
        "delete",
        // python
        "and", "def", "del", "elif", "except", "global", "is", "lambda", "nonlocal", "not", "or",
        "pass", "raise", "with", "None", "True", "False", "print",
        // c / c++
        "auto", "define", "endif", "ifdef", "ifndef", "include", "inline", "namespace",
        "register", "sizeof", "template", "typedef", "typename", "union", "virtual",
    ]
    .into_iter()
    .collect();
}

#[derive(Debug, Clone, Copy)]
struct Syntax {
    hash_comments: bool,
    single_quote_strings: bool,
    backtick_strings: bool,
    triple_quotes: bool,
}

impl Syntax {
    fn for_lang(lang: SourceLang) -> Self {
        let c_style = Syntax {
            hash_comments: false,
            single_quote_strings: false,
            backtick_strings: false,
            triple_quotes: false,
        };

        match lang {
            SourceLang::Python => Syntax {
                hash_comments: true,
                single_quote_strings: true,
                triple_quotes: true,
                ..c_style
            },
            SourceLang::JavaScript | SourceLang::TypeScript | SourceLang::Jsx | SourceLang::Tsx => {
                Syntax {
                    single_quote_strings: true,
                    backtick_strings: true,
                    ..c_style
                }
            }
            SourceLang::Go => Syntax {
                backtick_strings: true,
                ..c_style
            },
            _ => c_style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Str(char),
    TripleStr(char),
}

/// Parse source code and extract identifiers outside comments and literals
pub fn parse(content: &str, lang: SourceLang) -> Result<Vec<IdentifierSpan>> {
    let code = mask(content, Syntax::for_lang(lang));
    Ok(identifiers_in(&code))
}

/// Identifiers of already-masked code, skipping keywords.
pub(crate) fn identifiers_in(code: &str) -> Vec<IdentifierSpan> {
    let mut spans = Vec::new();

    for (line_num, line) in code.lines().enumerate() {
        for m in IDENTIFIER.find_iter(line) {
            let text = m.as_str();
            if KEYWORDS.contains(text) || !text.chars().any(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            spans.push(IdentifierSpan {
                text: text.to_string(),
                line: line_num + 1,
                column: m.start() + 1,
            });
        }
    }

    spans
}

/// Blank out comments and string literals, keeping newlines and byte
/// offsets intact.
fn mask(content: &str, syntax: Syntax) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut state = State::Code;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            State::Code => {
                if !syntax.hash_comments && ch == '/' && next == Some('/') {
                    state = State::LineComment;
                    blank(&mut out, ch);
                } else if !syntax.hash_comments && ch == '/' && next == Some('*') {
                    state = State::BlockComment;
                    blank(&mut out, ch);
                    blank(&mut out, '*');
                    i += 1;
                } else if syntax.hash_comments && ch == '#' {
                    state = State::LineComment;
                    blank(&mut out, ch);
                } else if syntax.triple_quotes && (ch == '"' || ch == '\'') && is_triple(&chars, i, ch) {
                    state = State::TripleStr(ch);
                    for _ in 0..3 {
                        blank(&mut out, ch);
                    }
                    i += 2;
                } else if ch == '"'
                    || (ch == '`' && syntax.backtick_strings)
                    || (ch == '\'' && (syntax.single_quote_strings || is_char_literal(&chars, i)))
                {
                    state = State::Str(ch);
                    blank(&mut out, ch);
                } else {
                    out.push(ch);
                }
            }
            State::LineComment => {
                if ch == '\n' {
                    state = State::Code;
                }
                blank(&mut out, ch);
            }
            State::BlockComment => {
                if ch == '*' && next == Some('/') {
                    state = State::Code;
                    blank(&mut out, ch);
                    blank(&mut out, '/');
                    i += 1;
                } else {
                    blank(&mut out, ch);
                }
            }
            State::Str(quote) => {
                if ch == '\\' {
                    blank(&mut out, ch);
                    if let Some(escaped) = next {
                        blank(&mut out, escaped);
                        i += 1;
                    }
                } else if ch == quote || (ch == '\n' && quote == '\'') {
                    state = State::Code;
                    blank(&mut out, ch);
                } else {
                    blank(&mut out, ch);
                }
            }
            State::TripleStr(quote) => {
                if ch == quote && is_triple(&chars, i, quote) {
                    state = State::Code;
                    for _ in 0..3 {
                        blank(&mut out, ch);
                    }
                    i += 2;
                } else {
                    blank(&mut out, ch);
                }
            }
        }

        i += 1;
    }

    out
}

fn blank(out: &mut String, ch: char) {
    if ch == '\n' {
        out.push('\n');
    } else {
        out.extend(std::iter::repeat(' ').take(ch.len_utf8()));
    }
}

fn is_triple(chars: &[char], i: usize, quote: char) -> bool {
    chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote)
}

// `'x'` or `'\n'`, as opposed to a lifetime like `'a`.
fn is_char_literal(chars: &[char], i: usize) -> bool {
    chars.get(i + 1) == Some(&'\\') || chars.get(i + 2) == Some(&'\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[IdentifierSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_c_style_comments_and_strings_are_skipped() {
        let content = r#"
// This is a comment with wordsHere
fn main() {
    let maxSize = parse_input("A string with textHere");
    /* block
       commentWord */ let total_count = 0x1F;
}
"#;

        let spans = parse(content, SourceLang::Rust).unwrap();
        assert_eq!(texts(&spans), vec!["main", "maxSize", "parse_input", "total_count"]);

        let total = spans.iter().find(|s| s.text == "total_count").unwrap();
        assert_eq!(total.line, 6);
        assert_eq!(total.column, 27);
    }

    #[test]
    fn test_rust_lifetimes_do_not_open_literals() {
        let content = "fn longest<'a>(first_str: &'a str, c: char) -> bool { c == 'x' || c == '\\n' }";

        let spans = parse(content, SourceLang::Rust).unwrap();
        assert_eq!(texts(&spans), vec!["longest", "a", "first_str", "a", "c", "c", "c"]);
    }

    #[test]
    fn test_python_comments_and_docstrings() {
        let content = r#"
def get_user(userId):
    """Return theUser for userId."""
    # lookupTable is cached
    return lookup_table['userName']
"#;

        let spans = parse(content, SourceLang::Python).unwrap();
        assert_eq!(texts(&spans), vec!["get_user", "userId", "lookup_table"]);
    }

    #[test]
    fn test_javascript_template_strings() {
        let content = "const greeting = `hello ${userName}`; let isReady = 'notAnIdent';";

        let spans = parse(content, SourceLang::JavaScript).unwrap();
        assert_eq!(texts(&spans), vec!["greeting", "isReady"]);
    }

    #[test]
    fn test_escaped_quotes_stay_inside_string() {
        let content = r#"printf("say \"hiThere\" now", argCount);"#;

        let spans = parse(content, SourceLang::C).unwrap();
        assert_eq!(texts(&spans), vec!["printf", "argCount"]);
    }
}
