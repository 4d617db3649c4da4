use crate::error::{PropdexError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const HOME_ENV: &str = "PROPDEX_HOME";

pub const DEFAULT_CELL_WIDTH: usize = 18;
pub const MIN_CELL_WIDTH: usize = 4;

/// Keys accepted by `propdex config`, in display order.
pub const KEYS: [&str; 3] = ["data-path", "view", "cell-width"];

/// Which renderer presents the visible sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => write!(f, "table"),
            ViewMode::Cards => write!(f, "cards"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" | "card" => Ok(ViewMode::Cards),
            other => Err(format!("Unknown view '{}' (expected table or cards)", other)),
        }
    }
}

/// User preferences, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropdexConfig {
    /// Dataset to load instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    /// View used when no command is given, and the initial browse view.
    #[serde(default)]
    pub default_view: ViewMode,

    /// Table cell width in display columns.
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
}

fn default_cell_width() -> usize {
    DEFAULT_CELL_WIDTH
}

impl Default for PropdexConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            default_view: ViewMode::Table,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl PropdexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: PropdexConfig = serde_json::from_str(&content)?;
        config.cell_width = config.cell_width.max(MIN_CELL_WIDTH);
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-path" => Some(
                self.data_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "view" => Some(self.default_view.to_string()),
            "cell-width" => Some(self.cell_width.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty `data-path` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-path" => {
                let value = value.trim();
                self.data_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "view" => self.default_view = value.parse()?,
            "cell-width" => {
                let width: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("cell-width must be a number, got '{}'", value))?;
                if width < MIN_CELL_WIDTH {
                    return Err(format!("cell-width must be at least {}", MIN_CELL_WIDTH));
                }
                self.cell_width = width;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

/// `$PROPDEX_HOME` when set, else the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "propdex", "propdex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PropdexError::Config("cannot determine a config directory".to_string()))
}
