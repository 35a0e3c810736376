use crate::splitters::affixes::AffixSet;
use crate::splitters::dictionary::Dictionary;
use crate::splitters::frequency::FrequencyTable;
use crate::Config;
use anyhow::Result;
use log::debug;
use std::path::Path;

/// Everything the splitters read: frequency tables, affix sets and the word
/// list. Built once, then lent to splitters by reference.
pub struct Resources {
    pub local: FrequencyTable,
    pub global: FrequencyTable,
    pub prefixes: AffixSet,
    pub suffixes: AffixSet,
    pub dictionary: Dictionary,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            local: FrequencyTable::default(),
            global: FrequencyTable::default(),
            prefixes: AffixSet::default_prefixes(),
            suffixes: AffixSet::default_suffixes(),
            dictionary: Dictionary::embedded(),
        }
    }
}

impl Resources {
    /// Load every configured resource, keeping the built-in default for
    /// anything left unconfigured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let local = load_or(config.local_frequencies.as_deref(), FrequencyTable::load, FrequencyTable::default)?;
        let global = load_or(config.global_frequencies.as_deref(), FrequencyTable::load, FrequencyTable::default)?;
        let prefixes = load_or(config.prefixes.as_deref(), AffixSet::load, AffixSet::default_prefixes)?;
        let suffixes = load_or(config.suffixes.as_deref(), AffixSet::load, AffixSet::default_suffixes)?;

        let dictionary = match &config.dictionary {
            Some(name) => Dictionary::load(name)?,
            None => Dictionary::embedded(),
        };

        debug!(
            "resources: local {} words / {} total, global {} words, {} prefixes, {} suffixes, {} dictionary words",
            local.len(),
            local.total_occurrences(),
            global.len(),
            prefixes.len(),
            suffixes.len(),
            dictionary.len()
        );

        Ok(Self {
            local,
            global,
            prefixes,
            suffixes,
            dictionary,
        })
    }
}

fn load_or<T>(
    path: Option<&Path>,
    load: impl FnOnce(&Path) -> Result<T>,
    fallback: impl FnOnce() -> T,
) -> Result<T> {
    match path {
        Some(path) => load(path),
        None => Ok(fallback()),
    }
}
