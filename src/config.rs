use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::db::{default_db_path, tasks::DEFAULT_PATTERN};
use crate::error::{Result, TourError};
use crate::launcher::{DEFAULT_WORKER_COUNT, WORKER_LINE};

pub const ENV_WORKERS: &str = "STDLIB_TOUR_WORKERS";
pub const ENV_DB: &str = "STDLIB_TOUR_DB";

/// Settings resolved from `~/.config/stdlib-tour/config.toml` and the
/// environment. Command-line flags are applied on top by the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct TourConfig {
    pub worker_count: usize,
    pub worker_message: String,
    pub db_path: PathBuf,
    pub pattern: String,
}

/// Raw TOML file structure. Every field is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    worker_count: Option<usize>,
    worker_message: Option<String>,
    db_path: Option<PathBuf>,
    pattern: Option<String>,
}

/// Default config file location.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stdlib-tour")
        .join("config.toml")
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            worker_message: WORKER_LINE.to_string(),
            db_path: default_db_path(),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl TourConfig {
    /// Load configuration from file and environment variables.
    ///
    /// A missing file is fine; a file that does not parse is an error.
    /// Environment variables override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

        let file = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| TourError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            parse_file(&path, &content)?
        } else {
            ConfigFile::default()
        };

        let config = Self::from_file_and_env(file, |name| std::env::var(name).ok())?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn from_file_and_env(
        file: ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let worker_count = match env(ENV_WORKERS) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| TourError::InvalidEnv {
                name: ENV_WORKERS.to_string(),
                value: raw,
            })?,
            None => file.worker_count.unwrap_or(defaults.worker_count),
        };

        let db_path = env(ENV_DB)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or(file.db_path)
            .unwrap_or(defaults.db_path);

        Ok(Self {
            worker_count,
            worker_message: file.worker_message.unwrap_or(defaults.worker_message),
            db_path,
            pattern: file.pattern.unwrap_or(defaults.pattern),
        })
    }
}

fn parse_file(path: &Path, content: &str) -> Result<ConfigFile> {
    toml::from_str(content).map_err(|e| TourError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
