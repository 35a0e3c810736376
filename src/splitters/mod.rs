pub mod affixes;
pub mod cohesion;
pub mod dictionary;
pub mod frequency;
pub mod gentest;
pub mod markers;
pub mod potential_split;
pub mod resources;
pub mod samurai;

use crate::{Config, SplitReport};
use anyhow::Result;
use cohesion::CohesionKind;
use frequency::FrequencyTable;
use gentest::GenTest;
use ignore::WalkBuilder;
use log::{debug, warn};
use rayon::prelude::*;
use resources::Resources;
use samurai::{Samurai, SamuraiOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Errors surfaced by the splitting algorithms. Splitting itself accepts any
/// string; these cover limits on the supplied resources.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("dictionary has {words} words, more than the supported {limit}")]
    DictionaryTooLarge { words: usize, limit: usize },
}

/// Splits one identifier into an ordered list of words.
pub trait Splitter: Send + Sync {
    fn split(&self, token: &str) -> Result<Vec<String>, SplitError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Samurai,
    GenTest,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "samurai" => Ok(Algorithm::Samurai),
            "gentest" => Ok(Algorithm::GenTest),
            _ => Err(format!("Unknown algorithm: {}", s)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Samurai => write!(f, "samurai"),
            Algorithm::GenTest => write!(f, "gentest"),
        }
    }
}

/// Frequencies of the program under analysis: every identifier is cut into
/// conservative hardwords, lowercased and counted.
pub fn mine_local_table<S: AsRef<str>>(identifiers: &[S]) -> FrequencyTable {
    FrequencyTable::from_words(
        identifiers
            .iter()
            .flat_map(|id| markers::hardwords(id.as_ref()))
            .map(|word| word.to_lowercase()),
    )
}

/// Loads the configured resources once and splits batches of identifiers.
pub struct IdentifierSplitter {
    resources: Resources,
    samurai_options: SamuraiOptions,
    cohesion: CohesionKind,
    min_identifier_length: usize,
    mine_local: bool,
}

impl IdentifierSplitter {
    pub fn new(config: &Config) -> Result<Self> {
        let resources = Resources::from_config(config)?;

        Ok(Self::with_resources(resources, config))
    }

    pub fn with_resources(resources: Resources, config: &Config) -> Self {
        Self {
            resources,
            samurai_options: SamuraiOptions {
                camel_cut: config.camel_cut,
                fold_case: config.fold_case,
            },
            cohesion: config.cohesion,
            min_identifier_length: config.min_identifier_length,
            mine_local: config.mine_local_frequencies && config.local_frequencies.is_none(),
        }
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Split identifiers in parallel; reports come back in input order.
    pub fn split_identifiers(
        &self,
        identifiers: &[String],
        algorithm: Algorithm,
        expand: bool,
    ) -> Result<Vec<SplitReport>> {
        self.split_with(identifiers, algorithm, expand, None)
    }

    /// Extract identifiers from files and directories, then split each
    /// distinct identifier once.
    pub fn split_files(
        &self,
        paths: &[PathBuf],
        algorithm: Algorithm,
        expand: bool,
    ) -> Result<Vec<SplitReport>> {
        let identifiers = self.collect_identifiers(paths)?;

        let mined = if self.mine_local && algorithm == Algorithm::Samurai {
            let table = mine_local_table(&identifiers);
            debug!(
                "mined local table: {} words, {} occurrences",
                table.len(),
                table.total_occurrences()
            );
            Some(table)
        } else {
            None
        };

        self.split_with(&identifiers, algorithm, expand, mined.as_ref())
    }

    fn split_with(
        &self,
        identifiers: &[String],
        algorithm: Algorithm,
        expand: bool,
        local: Option<&FrequencyTable>,
    ) -> Result<Vec<SplitReport>> {
        let gentest = GenTest::with_cohesion(&self.resources.dictionary, self.cohesion.metric());

        let reports = match algorithm {
            Algorithm::Samurai => {
                let mut samurai = Samurai::with_options(&self.resources, self.samurai_options);
                if let Some(local) = local {
                    samurai = samurai.with_local_table(local);
                }
                run(&samurai, identifiers, |_, words| {
                    Ok(expand.then(|| gentest.expand_words(words)))
                })?
            }
            Algorithm::GenTest => run(&gentest, identifiers, |id, _| {
                expand.then(|| gentest.expand(id)).transpose()
            })?,
        };

        Ok(reports)
    }

    fn collect_identifiers(&self, paths: &[PathBuf]) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut identifiers = Vec::new();

        for file in walk(paths) {
            let content = match fs::read_to_string(&file) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping {}: {}", file.display(), e);
                    continue;
                }
            };

            for span in crate::parser::parse_file(&file, &content)? {
                if span.text.chars().count() >= self.min_identifier_length
                    && seen.insert(span.text.clone())
                {
                    identifiers.push(span.text);
                }
            }
        }

        Ok(identifiers)
    }
}

fn run<S, F>(splitter: &S, identifiers: &[String], expansion: F) -> Result<Vec<SplitReport>>
where
    S: Splitter,
    F: Fn(&str, &[String]) -> Result<Option<String>, SplitError> + Sync,
{
    let reports = identifiers
        .par_iter()
        .map(|id| {
            let words = splitter.split(id)?;
            let expansion = expansion(id, &words)?;
            Ok(SplitReport {
                identifier: id.clone(),
                words,
                expansion,
            })
        })
        .collect::<Result<Vec<_>, SplitError>>()?;

    Ok(reports)
}

/// Files named directly plus every file below named directories,
/// honouring ignore files.
fn walk(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        for entry in WalkBuilder::new(path).build() {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|t| t.is_file()) => {
                    files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => warn!("Skipping entry under {}: {}", path.display(), e),
            }
        }
    }

    files
}
