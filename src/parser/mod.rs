pub mod markdown;
pub mod plaintext;
pub mod source_code;

use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Markdown,
    SourceCode(SourceLang),
    PlainText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLang {
    Rust,
    JavaScript,
    TypeScript,
    Python,
    Go,
    Java,
    C,
    Cpp,
    Jsx,
    Tsx,
    Other,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "md" | "mdx" | "markdown" => FileType::Markdown,
            "rs" => FileType::SourceCode(SourceLang::Rust),
            "js" | "mjs" | "cjs" => FileType::SourceCode(SourceLang::JavaScript),
            "ts" | "mts" | "cts" => FileType::SourceCode(SourceLang::TypeScript),
            "jsx" => FileType::SourceCode(SourceLang::Jsx),
            "tsx" => FileType::SourceCode(SourceLang::Tsx),
            "py" | "pyw" => FileType::SourceCode(SourceLang::Python),
            "go" => FileType::SourceCode(SourceLang::Go),
            "java" => FileType::SourceCode(SourceLang::Java),
            "c" | "h" => FileType::SourceCode(SourceLang::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => FileType::SourceCode(SourceLang::Cpp),
            "cs" | "kt" | "swift" | "scala" => FileType::SourceCode(SourceLang::Other),
            _ => FileType::PlainText,
        }
    }
}

impl SourceLang {
    /// Language of a fenced code block, from its info string.
    pub fn from_info(info: &str) -> Self {
        let name = info.split_whitespace().next().unwrap_or("").to_lowercase();

        match name.as_str() {
            "rust" | "rs" => SourceLang::Rust,
            "javascript" | "js" => SourceLang::JavaScript,
            "typescript" | "ts" => SourceLang::TypeScript,
            "jsx" => SourceLang::Jsx,
            "tsx" => SourceLang::Tsx,
            "python" | "py" => SourceLang::Python,
            "go" | "golang" => SourceLang::Go,
            "java" => SourceLang::Java,
            "c" => SourceLang::C,
            "cpp" | "c++" | "cxx" => SourceLang::Cpp,
            _ => SourceLang::Other,
        }
    }
}

/// An identifier found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSpan {
    pub text: String,
    pub line: usize,
    pub column: usize, // 1-indexed, in bytes
}

/// Parse a file and extract the identifiers worth splitting
pub fn parse_file(path: &Path, content: &str) -> Result<Vec<IdentifierSpan>> {
    let file_type = FileType::from_path(path);

    match file_type {
        FileType::Markdown => markdown::parse(content),
        FileType::SourceCode(lang) => source_code::parse(content, lang),
        FileType::PlainText => plaintext::parse(content),
    }
}
