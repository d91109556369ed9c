//! randtree.toml discovery and generator defaults

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::output::Format;
use crate::tree::{DEFAULT_BRANCH_COUNTS, DEFAULT_LABELS};

pub const CONFIG_FILE: &str = "randtree.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read randtree.toml: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse randtree.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    generate: Option<GenerateSection>,
}

#[derive(Debug, Deserialize, Default)]
struct GenerateSection {
    labels: Option<[i64; 2]>,
    branches: Option<[usize; 2]>,
    seed: Option<u64>,
    format: Option<Format>,
}

/// Generator defaults, from randtree.toml when one is found
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// File the settings were read from, if any
    pub path: Option<PathBuf>,
    pub labels: RangeInclusive<i64>,
    pub branch_counts: RangeInclusive<usize>,
    pub seed: Option<u64>,
    pub format: Format,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: None,
            labels: DEFAULT_LABELS,
            branch_counts: DEFAULT_BRANCH_COUNTS,
            seed: None,
            format: Format::default(),
        }
    }
}

impl Settings {
    /// Search the current directory and its parents for randtree.toml
    pub fn discover() -> Result<Self, ConfigError> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    #[instrument(level = "debug")]
    pub fn discover_from(start: &Path) -> Result<Self, ConfigError> {
        match Self::find_config(start) {
            Some(path) => Self::load(&path),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Read settings from a specific file. Keys it omits keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        debug!(?path, "Loaded config");

        let section = config.generate.unwrap_or_default();
        let defaults = Self::default();

        Ok(Self {
            path: Some(path.to_path_buf()),
            labels: section
                .labels
                .map(|[lo, hi]| lo..=hi)
                .unwrap_or(defaults.labels),
            branch_counts: section
                .branches
                .map(|[lo, hi]| lo..=hi)
                .unwrap_or(defaults.branch_counts),
            seed: section.seed,
            format: section.format.unwrap_or(defaults.format),
        })
    }

    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::discover_from(dir.path()).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.labels, 0..=20);
        assert_eq!(settings.branch_counts, 2..=6);
    }

    #[test]
    fn test_discovers_file_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[generate]
labels = [-5, 5]
branches = [1, 3]
seed = 42
format = "outline"
"#,
        )
        .unwrap();
        let child = dir.path().join("a").join("b");
        fs::create_dir_all(&child).unwrap();

        let settings = Settings::discover_from(&child).unwrap();

        assert_eq!(settings.path, Some(dir.path().join(CONFIG_FILE)));
        assert_eq!(settings.labels, -5..=5);
        assert_eq!(settings.branch_counts, 1..=3);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.format, Format::Outline);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[generate]\nseed = 7\n").unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.labels, DEFAULT_LABELS);
        assert_eq!(settings.branch_counts, DEFAULT_BRANCH_COUNTS);
        assert_eq!(settings.format, Format::Repr);
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[generate]\nlabels = \"wide\"\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
