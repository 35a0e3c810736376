pub mod basic;

use crate::splitters::dictionary::Dictionary;
use crate::Config;
use anyhow::Result;
use basic::Basic;
use std::collections::{HashMap, HashSet};

/// Build the Basic expander from the configured word lists.
pub fn basic_from_config<'a>(config: &Config, dictionary: &'a Dictionary) -> Result<Basic<'a>> {
    let source_words = match &config.source_words {
        Some(path) => basic::load_word_set(path)?,
        None => HashSet::new(),
    };
    let phrases = match &config.phrases {
        Some(path) => basic::load_phrases(path)?,
        None => HashMap::new(),
    };
    let stop_list = match &config.stop_list {
        Some(path) => basic::load_word_set(path)?,
        None => basic::default_stop_list(),
    };

    Ok(Basic::new(source_words, phrases, stop_list, dictionary))
}
