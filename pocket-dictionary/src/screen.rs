use dictionary::{DictionaryError, WordEntry};

use crate::bookmarks::BookmarkSet;

/// The only message a failed lookup ever shows, whatever the cause.
pub const NOT_FOUND_MESSAGE: &str = "Word not found. Please try another word.";

/// What the result area shows. A settled lookup is either an entry or an error, never both.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    Loaded(Box<WordEntry>),
    Failed(String),
}

/// Outcome of the search field changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChange {
    /// Same text as before, nothing to do.
    Unchanged,
    /// Empty or whitespace only. Nothing is looked up and the last result stays on screen.
    Blank,
    /// The query should be looked up.
    Search(String),
}

#[derive(Debug, Default)]
pub struct WordScreen {
    query: String,
    lookup: LookupState,
    pending: Option<String>,
    bookmarks: BookmarkSet,
}

impl WordScreen {
    pub fn new(bookmarks: BookmarkSet) -> Self {
        Self {
            bookmarks,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn lookup_state(&self) -> &LookupState {
        &self.lookup
    }

    /// Query of the newest lookup still in flight.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn bookmarks(&self) -> &BookmarkSet {
        &self.bookmarks
    }

    pub fn entry(&self) -> Option<&WordEntry> {
        match &self.lookup {
            LookupState::Loaded(entry) => Some(&**entry),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        match &self.lookup {
            LookupState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) -> QueryChange {
        let text = text.into();
        if text == self.query {
            return QueryChange::Unchanged;
        }
        self.query = text;
        if self.query.trim().is_empty() {
            QueryChange::Blank
        } else {
            QueryChange::Search(self.query.clone())
        }
    }

    pub fn start_lookup(&mut self, query: &str) {
        self.pending = Some(query.to_owned());
    }

    /// Applies a finished lookup if it was issued for the current query.
    /// Returns `false` when the response is stale and was dropped.
    pub fn finish_lookup(
        &mut self,
        query: &str,
        result: Result<WordEntry, DictionaryError>,
    ) -> bool {
        if self.pending.as_deref() == Some(query) {
            self.pending = None;
        }
        if query != self.query {
            tracing::debug!(
                stale = query,
                current = self.query.as_str(),
                "dropping response for an outdated query"
            );
            return false;
        }
        self.lookup = match result {
            Ok(entry) => LookupState::Loaded(Box::new(entry)),
            Err(error) => {
                tracing::warn!("Lookup for {query:?} failed: {error}");
                LookupState::Failed(NOT_FOUND_MESSAGE.to_owned())
            }
        };
        true
    }

    /// Bookmarks or un-bookmarks the text currently in the search field.
    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarks.toggle(&self.query)
    }

    pub fn is_bookmarked(&self) -> bool {
        self.bookmarks.contains(&self.query)
    }

    /// Audio of the phonetic at `index` in the loaded entry.
    pub fn audio_url(&self, index: usize) -> Option<&str> {
        self.entry()?.phonetics.get(index)?.audio_url()
    }
}
