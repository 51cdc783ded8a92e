use crate::cli::output::OutputFormat;
use crate::split::SplitMode;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".caretsplit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub mode: SplitMode,
    pub format: OutputFormat,
    pub color: bool,
}

/// On-disk form: every key is optional so a file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    mode: Option<SplitMode>,
    format: Option<OutputFormat>,
    color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: SplitMode::Quoted,
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        mode: Option<SplitMode>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Result<Self> {
        let global = Self::global_config_path();
        let config = Self::from_paths(global.as_deref(), Path::new(LOCAL_CONFIG_FILE))?;
        Ok(config.with_overrides(mode, format, no_color))
    }

    /// Merge the global and local files on top of the defaults. Missing
    /// files are skipped.
    pub fn from_paths(global: Option<&Path>, local: &Path) -> Result<Self> {
        let mut config = Self::default();

        for path in global.into_iter().chain(Some(local)) {
            if path.exists() {
                debug!(path = %path.display(), "merging config file");
                config = config.merge(Self::from_file(path)?);
            }
        }

        Ok(config)
    }

    pub fn with_overrides(
        mut self,
        mode: Option<SplitMode>,
        format: Option<OutputFormat>,
        no_color: bool,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(format) = format {
            self.format = format;
        }
        if no_color {
            self.color = false;
        }
        self
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(mode) = other.mode {
            self.mode = mode;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        if let Some(color) = other.color {
            self.color = color;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caretsplit").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mode, SplitMode::Quoted);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
    }

    #[test]
    fn test_merge_only_overrides_named_keys() {
        let file: ConfigFile = toml::from_str("mode = \"plain\"").unwrap();
        let merged = Config::default().merge(file);
        assert_eq!(merged.mode, SplitMode::Plain);
        assert_eq!(merged.format, OutputFormat::Text);
        assert!(merged.color);
    }

    #[test]
    fn test_local_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "mode = \"plain\"\ncolor = false\n").unwrap();
        fs::write(&local, "format = \"json\"\nmode = \"quoted\"\n").unwrap();

        let config = Config::from_paths(Some(&global), &local).unwrap();
        assert_eq!(config.mode, SplitMode::Quoted);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        let config =
            Config::from_paths(Some(&dir.path().join("nope.toml")), &dir.path().join("x.toml"))
                .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("bad.toml");
        fs::write(&local, "mode = \"shell\"").unwrap();

        let err = Config::from_paths(None, &local).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config::default().with_overrides(
            Some(SplitMode::Plain),
            Some(OutputFormat::Json),
            true,
        );
        assert_eq!(config.mode, SplitMode::Plain);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }
}
