use async_trait::async_trait;
use dictionary_api::{get_definition, DICTIONARY_API_URL};
use reqwest::StatusCode;
use serde::Deserialize;

mod dictionary;
mod dictionary_api;

pub use dictionary::{License, Phonetic, WordDefinition, WordEntry, WordMeaning};
pub use reqwest::Url;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("dictionary service answered with {0}")]
    Status(StatusCode),
    #[error("failed to decode the dictionary response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("no definitions found for {word:?}")]
    NotFound {
        word: String,
        details: Option<NotFoundError>,
    },
    #[error("invalid dictionary endpoint {0:?}")]
    InvalidEndpoint(String),
}

/// Body the service sends along with a 404.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotFoundError {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub resolution: String,
}

/// Anything that can resolve a query to its first dictionary entry.
#[async_trait]
pub trait WordLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<WordEntry, DictionaryError>;
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
}

impl Dictionary {
    /// Client for the public English endpoint.
    pub fn new() -> Result<Self, DictionaryError> {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, DictionaryError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| DictionaryError::InvalidEndpoint(base_url.to_owned()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_definition(&self, word: &str) -> Result<WordEntry, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

#[async_trait]
impl WordLookup for Dictionary {
    async fn lookup(&self, word: &str) -> Result<WordEntry, DictionaryError> {
        self.get_definition(word).await
    }
}
