use reqwest::{StatusCode, Url};

use crate::{DictionaryError, NotFoundError, WordEntry};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Appends `word` to the endpoint as a single percent-encoded path segment.
pub(crate) fn entry_url(base: &Url, word: &str) -> Result<Url, DictionaryError> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| DictionaryError::InvalidEndpoint(base.to_string()))?;
        segments.pop_if_empty().push(word);
    }
    Ok(url)
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base: &Url,
    word: &str,
) -> Result<WordEntry, DictionaryError> {
    let url = entry_url(base, word)?;
    tracing::debug!(%url, "requesting definition");
    let res: reqwest::Response = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if status == StatusCode::NOT_FOUND {
        // the body explains the miss, but a missing or odd body is still a miss
        let details = res.json::<NotFoundError>().await.ok();
        return Err(DictionaryError::NotFound {
            word: word.to_owned(),
            details,
        });
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    let entries = res
        .json::<Vec<WordEntry>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    tracing::debug!(word, entries = entries.len(), "decoded definition");
    // only the first entry is shown
    entries
        .into_iter()
        .next()
        .ok_or_else(|| DictionaryError::NotFound {
            word: word.to_owned(),
            details: None,
        })
}
