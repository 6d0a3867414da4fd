use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://hangman.db?mode=rwc";
pub const DEFAULT_WORDS_PATH: &str = "./words.txt";
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// A word list file, or a directory of `.txt` word lists.
    pub words_path: PathBuf,
    pub leaderboard_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let leaderboard_size = match lookup("LEADERBOARD_SIZE") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid LEADERBOARD_SIZE {:?}", raw))?,
            None => DEFAULT_LEADERBOARD_SIZE,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            words_path: lookup("WORDS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_PATH)),
            leaderboard_size,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}
