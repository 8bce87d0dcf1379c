//! Tour configuration, layered from several sources:
//! 1. Environment variables (`BLOCKS_*`, highest precedence)
//! 2. An explicit `--config` file
//! 3. `blocks.toml` in the project directory
//! 4. Built-in defaults (lowest precedence)

use crate::domain::error::TourError;
use crate::domain::models::LessonId;
use crate::services::iteration::check_year_range;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub const PROJECT_CONFIG_FILE: &str = "blocks.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub tour: TourSection,
    pub leap: LeapSection,
    pub times: TimesSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourSection {
    pub banner: bool,
    /// Lesson ids left out of `blocks tour`.
    pub skip: Vec<String>,
}

impl Default for TourSection {
    fn default() -> Self {
        Self {
            banner: true,
            skip: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeapSection {
    pub start: i32,
    pub end: i32,
}

impl Default for LeapSection {
    fn default() -> Self {
        Self {
            start: 1900,
            end: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesSection {
    pub count: u32,
    pub phrase: String,
}

impl Default for TimesSection {
    fn default() -> Self {
        Self {
            count: 3,
            phrase: "Beetlejuice!".to_string(),
        }
    }
}

impl TourConfig {
    pub fn skipped(&self) -> Result<Vec<LessonId>, TourError> {
        self.tour.skip.iter().map(|s| s.parse()).collect()
    }

    pub fn validate(&self) -> Result<(), TourError> {
        check_year_range(self.leap.start, self.leap.end)?;
        self.skipped()?;
        Ok(())
    }
}

pub struct ConfigLoader {
    project_dir: PathBuf,
    explicit_file: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            explicit_file: None,
            env_prefix: "BLOCKS".to_string(),
        }
    }

    pub fn with_explicit_file(mut self, file: Option<PathBuf>) -> Self {
        self.explicit_file = file;
        self
    }

    pub fn load(self) -> Result<TourConfig> {
        let mut builder = config::Config::builder();

        let defaults = TourConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        let project_file = self.project_dir.join(PROJECT_CONFIG_FILE);
        if project_file.exists() {
            debug!(path = %project_file.display(), "loading project config");
            builder = builder.add_source(
                config::File::from(project_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        if let Some(file) = &self.explicit_file {
            debug!(path = %file.display(), "loading explicit config");
            builder = builder.add_source(
                config::File::from(file.clone())
                    .required(true)
                    .format(config::FileFormat::Toml),
            );
        }

        // BLOCKS_TOUR__BANNER=false -> tour.banner
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("tour.skip"),
        );

        let merged = builder.build().context("Failed to build configuration")?;
        let tour_config: TourConfig = merged
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        tour_config
            .validate()
            .context("Invalid configuration")?;
        Ok(tour_config)
    }
}

#[cfg(test)]
impl ConfigLoader {
    pub fn with_project_dir(mut self, dir: impl AsRef<std::path::Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn loader(dir: &Path) -> ConfigLoader {
        ConfigLoader::new()
            .with_project_dir(dir)
            .with_env_prefix("BLOCKS_UNIT_TEST_UNSET")
    }

    #[test]
    fn defaults_without_any_file() {
        let dir = tempdir().expect("temp dir");
        let config = loader(dir.path()).load().expect("load defaults");
        assert_eq!(config, TourConfig::default());
        assert!(config.tour.banner);
        assert_eq!((config.leap.start, config.leap.end), (1900, 2000));
        assert_eq!(config.times.count, 3);
    }

    #[test]
    fn project_file_overrides_defaults() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[tour]\nbanner = false\nskip = [\"leap-years\"]\n\n[times]\ncount = 5\n",
        )
        .expect("write config");

        let config = loader(dir.path()).load().expect("load project config");
        assert!(!config.tour.banner);
        assert_eq!(config.skipped(), Ok(vec![LessonId::LeapYears]));
        assert_eq!(config.times.count, 5);
        assert_eq!(config.times.phrase, "Beetlejuice!");
    }

    #[test]
    fn explicit_file_wins_over_project_file() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "[leap]\nstart = 1950\n")
            .expect("write project config");
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[leap]\nstart = 1980\nend = 1990\n").expect("write explicit");

        let config = loader(dir.path())
            .with_explicit_file(Some(explicit))
            .load()
            .expect("load");
        assert_eq!((config.leap.start, config.leap.end), (1980, 1990));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let result = loader(dir.path())
            .with_explicit_file(Some(dir.path().join("nope.toml")))
            .load();
        assert!(result.is_err());
    }

    #[test]
    fn reversed_leap_range_fails_validation() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[leap]\nstart = 2000\nend = 1900\n",
        )
        .expect("write config");
        let err = loader(dir.path()).load().unwrap_err();
        assert!(format!("{err:#}").contains("invalid year range"));
    }

    #[test]
    fn huge_leap_range_fails_validation() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[leap]\nstart = -2147483648\nend = 2147483647\n",
        )
        .expect("write config");
        let err = loader(dir.path()).load().unwrap_err();
        assert!(format!("{err:#}").contains("spans more than 10000 years"));
    }

    #[test]
    fn unknown_skip_entry_fails_validation() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[tour]\nskip = [\"closures\"]\n",
        )
        .expect("write config");
        let err = loader(dir.path()).load().unwrap_err();
        assert!(format!("{err:#}").contains("unknown lesson: closures"));
    }
}
