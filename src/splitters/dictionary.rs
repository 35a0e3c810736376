use anyhow::{Context, Result};
use fst::automaton::{Str, Subsequence};
use fst::{Automaton, IntoStreamer, Set, SetBuilder, Streamer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

/// An immutable, sorted word list backed by an FST.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Dictionary {
    /// Load an installed dictionary by name, or from a path when `name`
    /// points at an existing file.
    pub fn load(name: &str) -> Result<Self> {
        let as_path = Path::new(name);
        if as_path.is_file() {
            return Self::load_from_path(as_path);
        }

        let dict_path = Self::get_dictionary_path(name)?;
        if !dict_path.exists() {
            anyhow::bail!(
                "Dictionary '{}' is not installed. Run `identsplit dict download {}` or `identsplit dict build`.",
                name,
                name
            );
        }

        Self::load_from_path(&dict_path)
    }

    /// Load dictionary from a specific path (useful for testing)
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

        let reader = BufReader::new(file);
        let set = Set::new(reader.bytes().collect::<Result<Vec<_>, _>>()?)
            .context("Failed to parse dictionary")?;

        Ok(Self { set })
    }

    /// Build an in-memory dictionary from any word list.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        sorted.sort();
        sorted.dedup();

        let set = Set::from_iter(sorted).context("Failed to build dictionary")?;
        Ok(Self { set })
    }

    /// The built-in programming vocabulary used when no dictionary is configured.
    pub fn embedded() -> Self {
        Self::from_words(EMBEDDED_WORDS).expect("embedded word list builds")
    }

    /// Check if word exists in dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Every word containing `pattern` as an order-preserving subsequence,
    /// in dictionary order.
    pub fn words_with_subsequence(&self, pattern: &str) -> Vec<String> {
        self.collect(Subsequence::new(pattern))
    }

    /// Words starting with `prefix` that also contain `pattern` as a subsequence.
    pub fn words_with_prefix_and_subsequence(&self, prefix: &str, pattern: &str) -> Vec<String> {
        self.collect(Str::new(prefix).starts_with().intersection(Subsequence::new(pattern)))
    }

    fn collect<A: Automaton>(&self, automaton: A) -> Vec<String> {
        let mut results = Vec::new();
        let mut stream = self.set.search(automaton).into_stream();

        while let Some(key) = stream.next() {
            if let Ok(word) = String::from_utf8(key.to_vec()) {
                results.push(word);
            }
        }

        results
    }

    /// Build dictionary from word list
    pub fn build_from_words(words: &[String], output_path: &Path) -> Result<()> {
        let mut sorted_words = words.to_vec();
        sorted_words.sort();
        sorted_words.dedup();

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create dictionary: {}", output_path.display()))?;

        let writer = BufWriter::new(file);
        let mut builder = SetBuilder::new(writer).context("Failed to create FST builder")?;

        for word in sorted_words {
            builder
                .insert(word.as_bytes())
                .context("Failed to insert word into dictionary")?;
        }

        builder.finish().context("Failed to finalize dictionary")?;

        Ok(())
    }

    pub(crate) fn get_dictionary_path(name: &str) -> Result<PathBuf> {
        let data_dir = crate::config::Config::data_dir().context("Failed to get data directory")?;

        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(data_dir.join(format!("{}.dict", name)))
    }
}

// Common English words plus the vocabulary and acronyms that dominate
// identifiers. Single letters are left out on purpose: they would let every
// fully atomized split look like a run of exact matches.
const EMBEDDED_WORDS: &[&str] = &[
    "about", "abstract", "access", "account", "action", "active", "adapter", "add", "address",
    "after", "all", "alloc", "allocate", "allocated", "allow", "also", "and", "any", "api", "app",
    "append", "application", "apply", "area", "args", "argument", "array", "ascii", "ast",
    "async", "attribute", "auth", "await", "back", "base", "be", "before", "begin", "bit", "block",
    "body", "bond", "boolean", "bound", "buffer", "build", "builder", "by", "byte", "bytes",
    "cache", "call", "callback", "can", "car", "case", "char", "check", "child", "class", "clear",
    "client", "close", "code", "column", "command", "compile", "config", "configuration",
    "connect", "connection", "const", "content", "context", "control", "copy", "count", "create",
    "css", "current", "cursor", "data", "date", "day", "debug", "decode", "default", "delete",
    "deploy", "dictionary", "dir", "directory", "do", "document", "dom", "done", "double", "down",
    "element", "else", "empty", "enable", "encode", "end", "entry", "equals", "error", "event",
    "exception", "exit", "expand", "export", "factory", "false", "field", "file", "filter",
    "find", "first", "flag", "float", "for", "format", "frame", "from", "function", "get", "gps",
    "graph", "group", "handle", "handler", "has", "hash", "header", "height", "html", "http",
    "id", "if", "image", "import", "in", "index", "info", "init", "input", "insert", "instance",
    "int", "integer", "is", "it", "item", "iterator", "java", "json", "key", "label", "last",
    "layout", "left", "length", "level", "line", "link", "list", "listener", "load", "local",
    "lock", "log", "long", "loop", "main", "make", "manager", "map", "match", "max", "member",
    "message", "method", "min", "mode", "model", "module", "name", "new", "next", "no", "node",
    "not", "null", "num", "number", "object", "of", "offset", "old", "on", "open", "option",
    "or", "order", "out", "output", "page", "panel", "parameter", "parent", "parse", "parser",
    "path", "point", "pointer", "pool", "position", "previous", "print", "process", "promise",
    "property", "queue", "range", "read", "reader", "record", "remove", "render", "request",
    "reset", "resource", "response", "result", "return", "right", "root", "row", "run", "save",
    "scope", "search", "select", "send", "server", "service", "session", "set", "size", "sort",
    "source", "sql", "start", "state", "static", "status", "stop", "stream", "string", "style",
    "table", "target", "task", "temp", "test", "text", "the", "thread", "time", "timer", "to",
    "token", "tree", "true", "type", "update", "url", "use", "user", "utf", "util", "value",
    "var", "variable", "version", "view", "visit", "visitor", "void", "wait", "width", "window",
    "with", "word", "work", "write", "writer", "xml",
];
