use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dictionary::{DictionaryError, Phonetic, WordDefinition, WordEntry, WordLookup, WordMeaning};

use crate::audio::{AudioError, AudioPlayer};

/// Entry with one silent and one audible phonetic, defined as "a {word}".
pub fn entry(word: &str) -> WordEntry {
    WordEntry {
        word: word.to_owned(),
        phonetic: None,
        phonetics: vec![
            Phonetic {
                text: Some(format!("/{word}/")),
                audio: Some(String::new()),
                source_url: None,
                license: None,
            },
            Phonetic {
                text: None,
                audio: Some(format!("https://audio.example/{word}.mp3")),
                source_url: None,
                license: None,
            },
        ],
        origin: None,
        meanings: vec![WordMeaning {
            part_of_speech: "noun".to_owned(),
            definitions: vec![WordDefinition {
                definition: format!("a {word}"),
                example: None,
                synonyms: vec![],
                antonyms: vec![],
            }],
            synonyms: vec![],
            antonyms: vec![],
        }],
        license: None,
        source_urls: None,
    }
}

/// Knows every word except those starting with "zzz".
#[derive(Clone, Default)]
pub struct FakeLookup {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub delays: HashMap<String, Duration>,
}

impl FakeLookup {
    pub fn with_delay(mut self, word: &str, delay: Duration) -> Self {
        self.delays.insert(word.to_owned(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WordLookup for FakeLookup {
    async fn lookup(&self, word: &str) -> Result<WordEntry, DictionaryError> {
        self.calls.lock().unwrap().push(word.to_owned());
        if let Some(delay) = self.delays.get(word) {
            tokio::time::sleep(*delay).await;
        }
        if word.starts_with("zzz") {
            Err(DictionaryError::NotFound {
                word: word.to_owned(),
                details: None,
            })
        } else {
            Ok(entry(word))
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingPlayer {
    pub played: Arc<Mutex<Vec<String>>>,
    pub broken: bool,
}

impl AudioPlayer for RecordingPlayer {
    fn play(&self, url: &str) -> Result<(), AudioError> {
        self.played.lock().unwrap().push(url.to_owned());
        if self.broken {
            return Err(AudioError::InvalidUrl(url.to_owned()));
        }
        Ok(())
    }
}
