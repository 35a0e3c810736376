//! Samurai: frequency-driven recursive splitting (Hill et al.).
//!
//! Words are scored from the frequencies of the program under analysis
//! (local table) and of a large corpus (global table). Same-case runs are cut
//! where both halves, or the left half, clearly outscore the whole.

use crate::splitters::affixes::AffixSet;
use crate::splitters::frequency::FrequencyTable;
use crate::splitters::markers;
use crate::splitters::resources::Resources;
use crate::splitters::{SplitError, Splitter};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::iter;

lazy_static! {
    // Uppercase letter followed by lowercase: the start of a capitalised word.
    static ref CAMEL_BOUNDARY: Regex = Regex::new("[A-Z][a-z]").unwrap();
}

/// What to do with the camel cut proposed for each hardword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CamelCutPolicy {
    /// Compute and log the cut, but let the same-case split alone decide.
    #[default]
    Diagnose,
    /// Cut the hardword at the proposed position before the same-case split.
    Apply,
}

/// A cut proposed at an upper→lower boundary, as a byte offset into the hardword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CamelCut {
    /// Before the uppercase letter (`AST|Visitor`).
    AtUpper(usize),
    /// After the uppercase letter (`ASTV|isitor`).
    AfterUpper(usize),
}

impl CamelCut {
    pub fn position(self) -> usize {
        match self {
            CamelCut::AtUpper(pos) | CamelCut::AfterUpper(pos) => pos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamuraiOptions {
    pub camel_cut: CamelCutPolicy,
    /// Lowercase words before frequency and affix lookups.
    pub fold_case: bool,
}

impl Default for SamuraiOptions {
    fn default() -> Self {
        Self {
            camel_cut: CamelCutPolicy::Diagnose,
            fold_case: true,
        }
    }
}

pub struct Samurai<'a> {
    local: &'a FrequencyTable,
    global: &'a FrequencyTable,
    prefixes: &'a AffixSet,
    suffixes: &'a AffixSet,
    options: SamuraiOptions,
}

impl<'a> Samurai<'a> {
    pub fn new(resources: &'a Resources) -> Self {
        Self::with_options(resources, SamuraiOptions::default())
    }

    pub fn with_options(resources: &'a Resources, options: SamuraiOptions) -> Self {
        Self {
            local: &resources.local,
            global: &resources.global,
            prefixes: &resources.prefixes,
            suffixes: &resources.suffixes,
            options,
        }
    }

    /// Score against another local table, e.g. one mined from the files
    /// being analysed.
    pub fn with_local_table(mut self, local: &'a FrequencyTable) -> Self {
        self.local = local;
        self
    }

    /// `local(word) + global(word) / log10(total local occurrences)`.
    ///
    /// When the logarithm is not positive (a local total of 0 or 1) the
    /// global term is taken as 0.
    pub fn score(&self, word: &str) -> f64 {
        let key = self.normalize(word);
        let local = self.local.frequency(&key);
        let global = self.global.frequency(&key);

        let denominator = (self.local.total_occurrences() as f64).log10();
        if denominator <= 0.0 {
            return local;
        }

        local + global / denominator
    }

    /// Propose a cut around the first upper→lower boundary of a hardword.
    pub fn camel_cut(&self, word: &str) -> Option<CamelCut> {
        // Byte offset of the last character; scored slices stop before it.
        let n = word.char_indices().last().map(|(i, _)| i)?;
        if n == 0 {
            return None;
        }

        let i = CAMEL_BOUNDARY.find(word)?.start();
        let camel_score = self.score(&word[i..n]);
        let alt_camel_score = self.score(&word[i + 1..n]);

        if camel_score > alt_camel_score.sqrt() {
            (i > 0).then_some(CamelCut::AtUpper(i))
        } else {
            Some(CamelCut::AfterUpper(i + 1))
        }
    }

    /// Recursively split a run of same-case characters.
    pub fn same_case_split<'t>(&self, token: &'t str, base_score: f64) -> Vec<&'t str> {
        let mut memo = HashMap::new();
        self.split_same_case(token, base_score, &mut memo)
    }

    // Results are pure in (token, base_score); base_score is fixed for the
    // whole recursion, so suffixes are keyed on their text alone.
    fn split_same_case<'t>(
        &self,
        token: &'t str,
        base_score: f64,
        memo: &mut HashMap<&'t str, Vec<&'t str>>,
    ) -> Vec<&'t str> {
        if let Some(cached) = memo.get(token) {
            return cached.clone();
        }

        let mut split = vec![token];
        let mut max_score = -1.0;
        let threshold = self.score(token).max(base_score);

        for (i, _) in token.char_indices().skip(1) {
            let (left, right) = token.split_at(i);
            let score_left = self.score(left);
            let score_right = self.score(right);
            let should_split_left = score_left.sqrt() > threshold;
            let should_split_right = score_right.sqrt() > threshold;

            if self.is_prefix(left) || self.is_suffix(right) {
                continue;
            }

            if should_split_left && should_split_right {
                if score_left + score_right > max_score {
                    max_score = score_left + score_right;
                    split = vec![left, right];
                }
            } else if should_split_left {
                let rest = self.split_same_case(right, base_score, memo);
                if rest.len() > 1 {
                    split = iter::once(left).chain(rest).collect();
                }
            }
        }

        memo.insert(token, split.clone());
        split
    }

    fn split_hardword<'t>(&self, hardword: &'t str) -> Vec<&'t str> {
        let cut = self.camel_cut(hardword);
        if let Some(cut) = cut {
            debug!("samurai: camel cut for '{}' at {:?}", hardword, cut);
        }

        match (self.options.camel_cut, cut) {
            (CamelCutPolicy::Apply, Some(cut)) => {
                let (left, right) = hardword.split_at(cut.position());
                let mut pieces = self.same_case_split(left, self.score(left));
                pieces.extend(self.same_case_split(right, self.score(right)));
                pieces
            }
            _ => self.same_case_split(hardword, self.score(hardword)),
        }
    }

    fn normalize<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if self.options.fold_case {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        }
    }

    fn is_prefix(&self, word: &str) -> bool {
        self.prefixes.contains(&self.normalize(word))
    }

    fn is_suffix(&self, word: &str) -> bool {
        self.suffixes.contains(&self.normalize(word))
    }
}

impl Splitter for Samurai<'_> {
    fn split(&self, token: &str) -> Result<Vec<String>, SplitError> {
        let marked = markers::mark(token);

        let words = markers::split_on_markers(&marked)
            .into_iter()
            .flat_map(|hardword| self.split_hardword(hardword))
            .map(str::to_string)
            .collect();

        Ok(words)
    }
}
