use crate::error::{BoardzError, Result};
use crate::store::note_store::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_TRIVIA_API: &str = "https://opentdb.com/api.php";
const DEFAULT_QUIZ_AMOUNT: u32 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Keys accepted by `boardz config`.
pub const CONFIG_KEYS: &[&str] = &[
    "storage-key",
    "github-api",
    "trivia-api",
    "quiz-amount",
    "timeout-secs",
];

/// Configuration for boardz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardzConfig {
    /// Slot key the note snapshot is saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Base URL of the GitHub REST API
    #[serde(default = "default_github_api")]
    pub github_api: String,

    /// Endpoint of the trivia question service
    #[serde(default = "default_trivia_api")]
    pub trivia_api: String,

    /// Number of questions fetched per quiz
    #[serde(default = "default_quiz_amount")]
    pub quiz_amount: u32,

    /// Per-request timeout for remote reads
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_storage_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

fn default_github_api() -> String {
    DEFAULT_GITHUB_API.to_string()
}

fn default_trivia_api() -> String {
    DEFAULT_TRIVIA_API.to_string()
}

fn default_quiz_amount() -> u32 {
    DEFAULT_QUIZ_AMOUNT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for BoardzConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            github_api: default_github_api(),
            trivia_api: default_trivia_api(),
            quiz_amount: DEFAULT_QUIZ_AMOUNT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl BoardzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BoardzError::Io)?;
        let config: BoardzConfig =
            serde_json::from_str(&content).map_err(BoardzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BoardzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BoardzError::Serialization)?;
        fs::write(config_path, content).map_err(BoardzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "github-api" => Some(self.github_api.clone()),
            "trivia-api" => Some(self.trivia_api.clone()),
            "quiz-amount" => Some(self.quiz_amount.to_string()),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. URLs lose any trailing slash.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "storage-key" => {
                if value.is_empty() {
                    return Err(BoardzError::Api("storage-key cannot be empty".into()));
                }
                self.storage_key = value.to_string();
            }
            "github-api" => self.github_api = value.trim_end_matches('/').to_string(),
            "trivia-api" => self.trivia_api = value.to_string(),
            "quiz-amount" => self.quiz_amount = parse_positive(key, value)?,
            "timeout-secs" => self.timeout_secs = parse_positive(key, value)?,
            other => return Err(BoardzError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

fn parse_positive<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(BoardzError::Api(format!(
            "{} must be a positive number, got '{}'",
            key, value
        ))),
    }
}
