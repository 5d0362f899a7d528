//! Application settings.
//!
//! Values resolve in priority order: command line, environment variable,
//! `~/.config/bgg-ranks/settings.toml`, built-in default. Each resolved
//! value remembers where it came from so `config show` can explain it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bgg_ranks_api::DEFAULT_BASE_URL;

use crate::error::SettingsError;

pub const ENV_BASE_URL: &str = "BGG_RANKS_BASE_URL";
pub const ENV_IN_DIR: &str = "BGG_RANKS_IN_DIR";
pub const ENV_OUT_DIR: &str = "BGG_RANKS_OUT_DIR";

const DEFAULT_IN_DIR: &str = "./in";
const DEFAULT_OUT_DIR: &str = "./out";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONCURRENCY: usize = 2;

/// Resolved settings passed explicitly to every collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub in_dir: PathBuf,
    pub out_dir: PathBuf,
    pub timeout: Duration,
    /// Maximum number of collections processed at once.
    pub concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            in_dir: PathBuf::from(DEFAULT_IN_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Where a setting's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingSource {
    Default,
    ConfigFile,
    EnvVar(&'static str),
    CommandLine,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::ConfigFile => write!(f, "config file"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::CommandLine => write!(f, "command line"),
        }
    }
}

/// Provenance of each setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingSources {
    pub base_url: SettingSource,
    pub in_dir: SettingSource,
    pub out_dir: SettingSource,
    pub timeout: SettingSource,
    pub concurrency: SettingSource,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub in_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

/// TOML settings file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct SettingsFile {
    pub base_url: Option<String>,
    pub in_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub concurrency: Option<usize>,
}

/// Canonical settings path: `~/.config/bgg-ranks/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bgg-ranks").join("settings.toml")
}

/// Read a settings file. A missing file is an empty one.
pub fn read_settings_file(path: &Path) -> Result<SettingsFile, SettingsError> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

impl Settings {
    /// Load settings from the canonical file, the process environment, and
    /// command-line overrides.
    pub fn load(overrides: &SettingsOverrides) -> Result<(Self, SettingSources), SettingsError> {
        let file = read_settings_file(&settings_path())?;
        Self::resolve(
            file,
            |var| std::env::var(var).ok().filter(|v| !v.is_empty()),
            overrides,
        )
    }

    /// Combine the layers. `env` looks up an environment variable.
    pub fn resolve(
        file: SettingsFile,
        env: impl Fn(&str) -> Option<String>,
        overrides: &SettingsOverrides,
    ) -> Result<(Self, SettingSources), SettingsError> {
        let (base_url, base_url_src) = layer(
            overrides.base_url.clone(),
            ENV_BASE_URL,
            env(ENV_BASE_URL),
            file.base_url,
            DEFAULT_BASE_URL.to_string(),
        );
        let (in_dir, in_dir_src) = layer(
            overrides.in_dir.clone(),
            ENV_IN_DIR,
            env(ENV_IN_DIR).map(PathBuf::from),
            file.in_dir,
            PathBuf::from(DEFAULT_IN_DIR),
        );
        let (out_dir, out_dir_src) = layer(
            overrides.out_dir.clone(),
            ENV_OUT_DIR,
            env(ENV_OUT_DIR).map(PathBuf::from),
            file.out_dir,
            PathBuf::from(DEFAULT_OUT_DIR),
        );

        if base_url.trim().is_empty() {
            return Err(SettingsError::Invalid {
                key: "base_url",
                message: "must not be empty".to_string(),
            });
        }

        let (timeout_secs, timeout_src) = match file.timeout_secs {
            Some(secs) => (secs, SettingSource::ConfigFile),
            None => (DEFAULT_TIMEOUT_SECS, SettingSource::Default),
        };
        if timeout_secs == 0 {
            return Err(SettingsError::Invalid {
                key: "timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }

        let (concurrency, concurrency_src) = match file.concurrency {
            Some(n) => (n.max(1), SettingSource::ConfigFile),
            None => (DEFAULT_CONCURRENCY, SettingSource::Default),
        };

        Ok((
            Self {
                base_url,
                in_dir,
                out_dir,
                timeout: Duration::from_secs(timeout_secs),
                concurrency,
            },
            SettingSources {
                base_url: base_url_src,
                in_dir: in_dir_src,
                out_dir: out_dir_src,
                timeout: timeout_src,
                concurrency: concurrency_src,
            },
        ))
    }
}

fn layer<T>(
    cli: Option<T>,
    var: &'static str,
    env: Option<T>,
    file: Option<T>,
    default: T,
) -> (T, SettingSource) {
    if let Some(v) = cli {
        (v, SettingSource::CommandLine)
    } else if let Some(v) = env {
        (v, SettingSource::EnvVar(var))
    } else if let Some(v) = file {
        (v, SettingSource::ConfigFile)
    } else {
        (default, SettingSource::Default)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
