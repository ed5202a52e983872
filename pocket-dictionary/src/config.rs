use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use tracing::info;

const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_DB_URL: &str = "sqlite://sqlite.db";
const DEFAULT_AUDIO_PLAYER: &str = "mpv";
const DEFAULT_AUDIO_PLAYER_ARGS: &str = "--no-video --really-quiet";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub database_url: String,
    /// Quiet period before a changed query is looked up, zero looks up on every change
    pub debounce: Duration,
    pub audio_player: String,
    pub audio_player_args: Vec<String>,
}

pub fn load_config() -> Result<Config, ConfigError> {
    info!("Loading configuration");

    // a missing .env file is fine
    dotenv().ok();

    Config::from_vars(|key| env::var(key).ok())
}

impl Config {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = var("DICTIONARY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DB_URL.to_string());

        let debounce = match var("LOOKUP_DEBOUNCE_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::Invalid {
                    key: "LOOKUP_DEBOUNCE_MS",
                    value,
                })?,
            None => Duration::ZERO,
        };

        let audio_player =
            var("AUDIO_PLAYER").unwrap_or_else(|| DEFAULT_AUDIO_PLAYER.to_string());

        let audio_player_args = var("AUDIO_PLAYER_ARGS")
            .unwrap_or_else(|| DEFAULT_AUDIO_PLAYER_ARGS.to_string())
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        Ok(Config {
            api_url,
            database_url,
            debounce,
            audio_player,
            audio_player_args,
        })
    }
}
