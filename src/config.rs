use crate::splitters::cohesion::CohesionKind;
use crate::splitters::samurai::CamelCutPolicy;
use crate::splitters::Algorithm;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub algorithm: Algorithm,

    /// Installed dictionary name or path; the embedded word list when unset.
    pub dictionary: Option<String>,

    pub local_frequencies: Option<PathBuf>,
    pub global_frequencies: Option<PathBuf>,
    pub prefixes: Option<PathBuf>,
    pub suffixes: Option<PathBuf>,

    pub stop_list: Option<PathBuf>,
    pub phrases: Option<PathBuf>,
    pub source_words: Option<PathBuf>,

    pub camel_cut: CamelCutPolicy,
    pub fold_case: bool,
    pub cohesion: CohesionKind,
    pub min_identifier_length: usize,
    pub mine_local_frequencies: bool,
}

/// One config file as written: only the keys it sets are `Some`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub algorithm: Option<Algorithm>,
    pub dictionary: Option<String>,
    pub local_frequencies: Option<PathBuf>,
    pub global_frequencies: Option<PathBuf>,
    pub prefixes: Option<PathBuf>,
    pub suffixes: Option<PathBuf>,
    pub stop_list: Option<PathBuf>,
    pub phrases: Option<PathBuf>,
    pub source_words: Option<PathBuf>,
    pub camel_cut: Option<CamelCutPolicy>,
    pub fold_case: Option<bool>,
    pub cohesion: Option<CohesionKind>,
    pub min_identifier_length: Option<usize>,
    pub mine_local_frequencies: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            dictionary: None,
            local_frequencies: None,
            global_frequencies: None,
            prefixes: None,
            suffixes: None,
            stop_list: None,
            phrases: None,
            source_words: None,
            camel_cut: CamelCutPolicy::default(),
            fold_case: true,
            cohesion: CohesionKind::default(),
            min_identifier_length: 2,
            mine_local_frequencies: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local (or explicit) config > global config > defaults
    pub fn load(
        config_file: Option<PathBuf>,
        algorithm: Option<Algorithm>,
        dictionary: Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global)
        match config_file {
            Some(path) => {
                config = config.merge(ConfigLayer::from_file(&path)?);
            }
            None => {
                let local_path = PathBuf::from(".identsplit.toml");
                if local_path.exists() {
                    config = config.merge(ConfigLayer::from_file(&local_path)?);
                }
            }
        }

        // Apply CLI overrides
        if let Some(algorithm) = algorithm {
            config.algorithm = algorithm;
        }
        if let Some(dictionary) = dictionary {
            config.dictionary = Some(dictionary);
        }

        Ok(config)
    }

    /// Defaults overlaid with a single file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    /// Overlay every key the layer sets; unset keys keep their current value.
    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(algorithm) = layer.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(camel_cut) = layer.camel_cut {
            self.camel_cut = camel_cut;
        }
        if let Some(fold_case) = layer.fold_case {
            self.fold_case = fold_case;
        }
        if let Some(cohesion) = layer.cohesion {
            self.cohesion = cohesion;
        }
        if let Some(min_identifier_length) = layer.min_identifier_length {
            self.min_identifier_length = min_identifier_length;
        }
        if let Some(mine) = layer.mine_local_frequencies {
            self.mine_local_frequencies = mine;
        }

        let paths = [
            (&mut self.local_frequencies, layer.local_frequencies),
            (&mut self.global_frequencies, layer.global_frequencies),
            (&mut self.prefixes, layer.prefixes),
            (&mut self.suffixes, layer.suffixes),
            (&mut self.stop_list, layer.stop_list),
            (&mut self.phrases, layer.phrases),
            (&mut self.source_words, layer.source_words),
        ];
        for (slot, value) in paths {
            if value.is_some() {
                *slot = value;
            }
        }
        if layer.dictionary.is_some() {
            self.dictionary = layer.dictionary;
        }

        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "identsplit").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "identsplit").map(|dirs| dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.algorithm, Algorithm::Samurai);
        assert_eq!(config.camel_cut, CamelCutPolicy::Diagnose);
        assert_eq!(config.min_identifier_length, 2);
        assert!(config.fold_case);
        assert!(config.dictionary.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default().merge(ConfigLayer {
            prefixes: Some(PathBuf::from("base-prefixes.txt")),
            ..Default::default()
        });
        let merged = base.merge(ConfigLayer {
            algorithm: Some(Algorithm::GenTest),
            suffixes: Some(PathBuf::from("suffixes.txt")),
            fold_case: Some(false),
            ..Default::default()
        });

        assert_eq!(merged.algorithm, Algorithm::GenTest);
        assert_eq!(merged.prefixes, Some(PathBuf::from("base-prefixes.txt")));
        assert_eq!(merged.suffixes, Some(PathBuf::from("suffixes.txt")));
        assert!(!merged.fold_case);
    }

    #[test]
    fn test_unset_keys_keep_earlier_layer() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "fold_case = false\nmine_local_frequencies = false\n").unwrap();
        fs::write(&local, "cohesion = \"edit-distance\"\n").unwrap();

        let config = Config::default()
            .merge(ConfigLayer::from_file(&global).unwrap())
            .merge(ConfigLayer::from_file(&local).unwrap());

        assert!(!config.fold_case);
        assert!(!config.mine_local_frequencies);
        assert_eq!(config.cohesion, CohesionKind::EditDistance);
    }

    #[test]
    fn test_explicit_default_value_overrides_earlier_layer() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "algorithm = \"gentest\"\nfold_case = false\n").unwrap();
        fs::write(&local, "algorithm = \"samurai\"\nfold_case = true\n").unwrap();

        let config = Config::default()
            .merge(ConfigLayer::from_file(&global).unwrap())
            .merge(ConfigLayer::from_file(&local).unwrap());

        assert_eq!(config.algorithm, Algorithm::Samurai);
        assert!(config.fold_case);
    }

    #[test]
    fn test_parse_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("identsplit.toml");
        fs::write(
            &path,
            "algorithm = \"gentest\"\ncamel_cut = \"apply\"\ncohesion = \"edit-distance\"\nglobal_frequencies = \"corpus.txt.gz\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.algorithm, Algorithm::GenTest);
        assert_eq!(config.camel_cut, CamelCutPolicy::Apply);
        assert_eq!(config.cohesion, CohesionKind::EditDistance);
        assert_eq!(config.global_frequencies, Some(PathBuf::from("corpus.txt.gz")));
        assert!(config.mine_local_frequencies);
    }

    #[test]
    fn test_load_with_explicit_file_and_cli_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "algorithm = \"gentest\"\nmin_identifier_length = 4\n").unwrap();

        let config = Config::load(Some(path), Some(Algorithm::Samurai), Some("en_US".into())).unwrap();
        assert_eq!(config.algorithm, Algorithm::Samurai);
        assert_eq!(config.min_identifier_length, 4);
        assert_eq!(config.dictionary.as_deref(), Some("en_US"));
    }

    #[test]
    fn test_invalid_toml_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "algorithm = [").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
