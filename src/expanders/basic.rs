use crate::splitters::dictionary::Dictionary;
use crate::splitters::SplitError;
use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// The Basic expansion algorithm (Lawrie, Feild and Binkley): a stoplist,
/// known phrases and words from the program source, then the dictionary.
pub struct Basic<'a> {
    source_words: HashSet<String>,
    phrases: HashMap<String, String>,
    stop_list: HashSet<String>,
    dictionary: &'a Dictionary,
}

impl<'a> Basic<'a> {
    pub fn new(
        source_words: HashSet<String>,
        phrases: HashMap<String, String>,
        stop_list: HashSet<String>,
        dictionary: &'a Dictionary,
    ) -> Self {
        Self {
            source_words,
            phrases,
            stop_list,
            dictionary,
        }
    }

    /// Candidate expansions of an abbreviation.
    ///
    /// Falls back to every dictionary word that starts with the token's first
    /// letter and contains all of its letters in order.
    pub fn expand(&self, token: &str) -> Result<Vec<String>, SplitError> {
        let token = token.to_lowercase();

        if self.stop_list.contains(&token) {
            return Ok(vec![token]);
        }

        if let Some(phrase) = self.phrases.get(&token) {
            return Ok(phrase.split('-').map(str::to_string).collect());
        }

        if self.source_words.contains(&token) {
            return Ok(vec![token]);
        }

        let Some(first) = token.chars().next().filter(|c| !c.is_whitespace()) else {
            return Ok(Vec::new());
        };

        Ok(self
            .dictionary
            .words_with_prefix_and_subsequence(first.encode_utf8(&mut [0; 4]), &token))
    }
}

/// Default English stoplist.
pub fn default_stop_list() -> HashSet<String> {
    [
        "a", "about", "an", "and", "are", "as", "at", "be", "but", "by", "do", "for", "from", "has",
        "have", "he", "her", "his", "i", "if", "in", "into", "is", "it", "its", "me", "my", "no",
        "not", "of", "on", "or", "our", "she", "so", "than", "that", "the", "their", "them",
        "then", "there", "these", "they", "this", "to", "up", "us", "was", "we", "what", "when",
        "which", "who", "will", "with", "you", "your",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Read one lowercase word per line; blank lines and `#` comments are skipped.
pub fn load_word_set(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}

/// Read `abbreviation word-word` lines.
pub fn load_phrases(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read phrase list: {}", path.display()))?;

    let mut phrases = HashMap::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (abbreviation, phrase) = line
            .split_once(char::is_whitespace)
            .with_context(|| format!("{}:{}: expected 'abbreviation phrase'", path.display(), line_num + 1))?;
        phrases.insert(abbreviation.to_lowercase(), phrase.trim().to_lowercase());
    }

    Ok(phrases)
}
