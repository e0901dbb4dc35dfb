//! User configuration, stored as JSON in the platform config directory.

use crate::arcade::TickRates;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "ARCADE_CONFIG";

const APP_NAME: &str = "pocket-arcade";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Milliseconds between snake moves.
    pub snake_tick_ms: u64,
    /// Milliseconds between flappy bird physics steps.
    pub flappy_tick_ms: u64,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Capture mouse clicks.
    pub mouse: bool,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        let rates = TickRates::default();
        Self {
            snake_tick_ms: rates.snake_ms,
            flappy_tick_ms: rates.flappy_ms,
            log_level: "info".to_string(),
            mouse: true,
        }
    }
}

impl ArcadeConfig {
    pub fn tick_rates(&self) -> TickRates {
        TickRates {
            snake_ms: self.snake_tick_ms.max(1),
            flappy_ms: self.flappy_tick_ms.max(1),
        }
    }

    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> io::Result<Self> {
        serde_json::from_str(text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read a config file.
    ///
    /// Returns `Ok(None)` if the file doesn't exist and an `InvalidData`
    /// error if it can't be parsed.
    pub fn load_from(path: &Path) -> io::Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}

/// Where the config lives: `$ARCADE_CONFIG`, else the platform config dir.
pub fn config_path() -> io::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Directory for the log file.
pub fn data_dir() -> io::Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

fn project_dirs() -> io::Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine config directory",
        )
    })
}

/// Outcome of loading the config at startup.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ArcadeConfig,
    pub path: Option<PathBuf>,
    /// Set when a file existed but couldn't be used.
    pub warning: Option<String>,
}

/// Load the config, falling back to defaults.
///
/// Never fails: a missing file gives defaults silently, an unreadable or
/// malformed one gives defaults plus a warning for the log. Logging isn't
/// set up yet at this point, so the caller reports the warning.
pub fn load() -> LoadedConfig {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            return LoadedConfig {
                config: ArcadeConfig::default(),
                path: None,
                warning: Some(format!("no config location: {}", e)),
            }
        }
    };
    let (config, warning) = match ArcadeConfig::load_from(&path) {
        Ok(Some(config)) => (config, None),
        Ok(None) => (ArcadeConfig::default(), None),
        Err(e) => (
            ArcadeConfig::default(),
            Some(format!("ignoring config {}: {}", path.display(), e)),
        ),
    };
    LoadedConfig {
        config,
        path: Some(path),
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_path(name: &str) -> PathBuf {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("pocket-arcade-test-{}-{}", std::process::id(), id))
            .join(name)
    }

    #[test]
    fn test_defaults() {
        let config = ArcadeConfig::default();
        assert_eq!(config.snake_tick_ms, 100);
        assert_eq!(config.flappy_tick_ms, 16);
        assert_eq!(config.log_level, "info");
        assert!(config.mouse);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ArcadeConfig::from_json(r#"{ "snake_tick_ms": 80 }"#).unwrap();
        assert_eq!(config.snake_tick_ms, 80);
        assert_eq!(config.flappy_tick_ms, 16);
        assert!(config.mouse);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = ArcadeConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_wrong_type_is_invalid_data() {
        let err = ArcadeConfig::from_json(r#"{ "mouse": "yes" }"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = temp_path("missing.json");
        assert!(ArcadeConfig::load_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("config.json");
        let config = ArcadeConfig {
            snake_tick_ms: 120,
            flappy_tick_ms: 20,
            log_level: "debug".to_string(),
            mouse: false,
        };
        config.save_to(&path).unwrap();
        let loaded = ArcadeConfig::load_from(&path).unwrap();
        assert_eq!(loaded, Some(config));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_zero_tick_rates_are_clamped() {
        let config = ArcadeConfig {
            snake_tick_ms: 0,
            flappy_tick_ms: 0,
            ..ArcadeConfig::default()
        };
        let rates = config.tick_rates();
        assert_eq!(rates.snake_ms, 1);
        assert_eq!(rates.flappy_ms, 1);
    }
}
