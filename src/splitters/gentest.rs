//! GenTest: generate candidate splits of a hardword, expand every softword
//! against a dictionary, and keep the most cohesive candidate.

use crate::splitters::cohesion::{Cohesion, CoverageCohesion};
use crate::splitters::dictionary::Dictionary;
use crate::splitters::markers::SEPARATOR;
use crate::splitters::potential_split::{find_best_split, Expansion, PotentialSplit, Softword};
use crate::splitters::{SplitError, Splitter};
use log::debug;
use std::collections::HashMap;

pub struct GenTest<'a> {
    dictionary: &'a Dictionary,
    cohesion: Box<dyn Cohesion>,
}

impl<'a> GenTest<'a> {
    /// Dictionaries larger than this are refused.
    pub const MAX_DICTIONARY_WORDS: usize = 5_000_000;

    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_cohesion(dictionary, Box::new(CoverageCohesion))
    }

    pub fn with_cohesion(dictionary: &'a Dictionary, cohesion: Box<dyn Cohesion>) -> Self {
        Self {
            dictionary,
            cohesion,
        }
    }

    /// The most cohesive candidate split of a single hardword.
    pub fn best_split(&self, hardword: &str) -> PotentialSplit {
        let mut candidates = generate_potential_splits(hardword);
        let mut memo: HashMap<String, Vec<Expansion>> = HashMap::new();

        for candidate in &mut candidates {
            for softword in &mut candidate.softwords {
                let expansions = memo
                    .entry(softword.word.clone())
                    .or_insert_with(|| self.expansions_of(&softword.word));
                softword.expansions = expansions.clone();
            }
        }

        debug!(
            "gentest: {} candidates for '{}' ({} distinct softwords)",
            candidates.len(),
            hardword,
            memo.len()
        );

        find_best_split(&candidates)
    }

    /// Best dictionary-word form of the token, one expansion per softword,
    /// joined by the separator.
    pub fn expand(&self, token: &str) -> Result<String, SplitError> {
        self.check_dictionary()?;

        let expanded: Vec<String> = gentest_hardwords(token)
            .map(|hardword| self.best_split(hardword).best_expansion())
            .collect();

        Ok(expanded.join(&SEPARATOR.to_string()))
    }

    /// Expand words produced by another splitter, each taken as one softword.
    pub fn expand_words(&self, words: &[String]) -> String {
        words
            .iter()
            .map(|word| {
                let softword = Softword::new(word.as_str(), self.expansions_of(word));
                softword.best_expansion().to_string()
            })
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string())
    }

    fn expansions_of(&self, softword: &str) -> Vec<Expansion> {
        let folded = softword.to_lowercase();
        find_expansions(&folded, self.dictionary)
            .into_iter()
            .map(|word| {
                let cohesion = self.cohesion.cohesion(&folded, &word);
                Expansion::new(word, cohesion)
            })
            .collect()
    }

    fn check_dictionary(&self) -> Result<(), SplitError> {
        let words = self.dictionary.len();
        if words > Self::MAX_DICTIONARY_WORDS {
            return Err(SplitError::DictionaryTooLarge {
                words,
                limit: Self::MAX_DICTIONARY_WORDS,
            });
        }
        Ok(())
    }
}

impl Splitter for GenTest<'_> {
    fn split(&self, token: &str) -> Result<Vec<String>, SplitError> {
        self.check_dictionary()?;

        let mut words = Vec::new();
        for hardword in gentest_hardwords(token) {
            words.extend(self.best_split(hardword).words());
        }
        Ok(words)
    }
}

fn gentest_hardwords(token: &str) -> impl Iterator<Item = &str> {
    token.split(SEPARATOR).filter(|hw| !hw.is_empty())
}

/// Every split of `token` with at most two cuts: the unsplit token first,
/// then for each first gap the single cut followed by every second cut to
/// its right.
pub fn generate_potential_splits(token: &str) -> Vec<PotentialSplit> {
    // Byte offsets of the inter-character gaps.
    let gaps: Vec<usize> = token.char_indices().skip(1).map(|(i, _)| i).collect();

    let mut splits = Vec::with_capacity(1 + gaps.len() + gaps.len() * gaps.len() / 2);
    splits.push(PotentialSplit::new(token));

    for (k, &first) in gaps.iter().enumerate() {
        splits.push(PotentialSplit::new(&cut(token, &[first])));
        for &second in &gaps[k + 1..] {
            splits.push(PotentialSplit::new(&cut(token, &[first, second])));
        }
    }

    splits
}

fn cut(token: &str, positions: &[usize]) -> String {
    let mut marked = String::with_capacity(token.len() + positions.len());
    let mut start = 0;
    for &pos in positions {
        marked.push_str(&token[start..pos]);
        marked.push(SEPARATOR);
        start = pos;
    }
    marked.push_str(&token[start..]);
    marked
}

/// Dictionary words containing `word` as an order-preserving subsequence.
/// Blank input matches nothing.
pub fn find_expansions(word: &str, dictionary: &Dictionary) -> Vec<String> {
    if word.trim().is_empty() {
        return Vec::new();
    }
    dictionary.words_with_subsequence(word)
}
