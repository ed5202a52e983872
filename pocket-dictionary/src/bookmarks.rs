use crate::storage::{Storage, StorageError};

pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Saved words in insertion order, without duplicates (exact, case-sensitive match).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    words: Vec<String>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set keeping the first occurrence of each word.
    pub fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        let mut set = Self::new();
        for word in words {
            if !set.contains(&word) {
                set.words.push(word);
            }
        }
        set
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|saved| saved == word)
    }

    /// Removes `word` if saved, appends it otherwise. Returns whether it is now saved.
    pub fn toggle(&mut self, word: &str) -> bool {
        match self.words.iter().position(|saved| saved == word) {
            Some(index) => {
                self.words.remove(index);
                false
            }
            None => {
                self.words.push(word.to_owned());
                true
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Persists the whole bookmark list as one JSON array under [`BOOKMARKS_KEY`].
#[derive(Clone)]
pub struct BookmarkStore {
    storage: Storage,
}

impl BookmarkStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Never fails: unreadable or undecodable bookmarks load as an empty list.
    pub async fn load(&self) -> BookmarkSet {
        let stored = match self.storage.get_item(BOOKMARKS_KEY).await {
            Ok(Some(stored)) => stored,
            Ok(None) => return BookmarkSet::new(),
            Err(error) => {
                tracing::warn!("Failed to read bookmarks, starting empty: {error}");
                return BookmarkSet::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&stored) {
            Ok(words) => {
                let set = BookmarkSet::from_words(words);
                tracing::debug!(count = set.len(), "loaded bookmarks");
                set
            }
            Err(error) => {
                tracing::warn!("Stored bookmarks are corrupt, starting empty: {error}");
                BookmarkSet::new()
            }
        }
    }

    pub async fn save(&self, bookmarks: &BookmarkSet) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(bookmarks.as_slice())?;
        self.storage.set_item(BOOKMARKS_KEY, &encoded).await
    }
}
