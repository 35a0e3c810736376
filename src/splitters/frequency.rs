use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Word occurrence counts plus the number of tokens observed in the corpus.
///
/// The total is tracked separately from the entries: a table may hold only
/// the words of interest while still describing a much larger corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn new(counts: HashMap<String, u64>, total: u64) -> Self {
        Self { counts, total }
    }

    /// Build a table whose total is the sum of its counts.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (word, count) in counts {
            table.insert(word, count);
        }
        table
    }

    /// Count every word of an observed token stream.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for word in words {
            table.insert(word, 1);
        }
        table
    }

    /// Add `count` occurrences of `word`, growing the total accordingly.
    pub fn insert(&mut self, word: impl Into<String>, count: u64) {
        *self.counts.entry(word.into()).or_insert(0) += count;
        self.total += count;
    }

    /// Occurrences of `word`; zero when unknown.
    pub fn frequency(&self, word: &str) -> f64 {
        self.counts.get(word).copied().unwrap_or(0) as f64
    }

    pub fn total_occurrences(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Load a table from `word count` lines. `#` starts a comment, except for
    /// a `#total N` line which overrides the summed total. `.gz` files are
    /// decompressed on the fly.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open frequency table: {}", path.display()))?;

        let reader: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        Self::read_from(BufReader::new(reader))
            .with_context(|| format!("Failed to parse frequency table: {}", path.display()))
    }

    fn read_from(reader: impl BufRead) -> Result<Self> {
        let mut table = Self::default();
        let mut total_override = None;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if let Some(rest) = line.strip_prefix("#total") {
                let total = rest
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("line {}: invalid total", line_num + 1))?;
                total_override = Some(total);
                continue;
            }
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(count), None) => {
                    let count = count
                        .parse::<u64>()
                        .with_context(|| format!("line {}: invalid count '{}'", line_num + 1, count))?;
                    table.insert(word, count);
                }
                _ => bail!("line {}: expected 'word count', got '{}'", line_num + 1, line),
            }
        }

        if let Some(total) = total_override {
            table.total = total;
        }

        Ok(table)
    }
}
