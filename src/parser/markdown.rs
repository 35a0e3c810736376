use crate::parser::{source_code, IdentifierSpan, SourceLang};
use anyhow::Result;
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// Parse markdown and extract identifiers from code blocks and inline code.
/// Prose is left alone.
pub fn parse(content: &str) -> Result<Vec<IdentifierSpan>> {
    let mut spans = Vec::new();

    let mut code_lang: Option<SourceLang> = None;
    let mut code_start = 0;
    let mut code_buf = String::new();

    for (event, range) in Parser::new(content).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code_lang = Some(match kind {
                    CodeBlockKind::Fenced(info) => SourceLang::from_info(&info),
                    CodeBlockKind::Indented => SourceLang::Other,
                });
                code_buf.clear();
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(lang) = code_lang.take() {
                    let found = source_code::parse(&code_buf, lang)?;
                    spans.extend(relocate(content, code_start, found));
                }
            }
            Event::Text(text) if code_lang.is_some() => {
                if code_buf.is_empty() {
                    code_start = range.start;
                }
                code_buf.push_str(&text);
            }
            Event::Code(code) => {
                // the range includes the backticks
                let offset = content[range.clone()].find(&*code).unwrap_or(0);
                let found = source_code::parse(&code, SourceLang::Other)?;
                spans.extend(relocate(content, range.start + offset, found));
            }
            _ => {}
        }
    }

    Ok(spans)
}

/// Shift spans parsed from a fragment starting at `offset` into document coordinates.
fn relocate(content: &str, offset: usize, found: Vec<IdentifierSpan>) -> Vec<IdentifierSpan> {
    let (base_line, base_column) = line_col(content, offset);

    found
        .into_iter()
        .map(|span| IdentifierSpan {
            column: if span.line == 1 {
                base_column + span.column - 1
            } else {
                span.column
            },
            line: base_line + span.line - 1,
            text: span.text,
        })
        .collect()
}

fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, offset - line_start + 1)
}
