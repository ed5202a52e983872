use std::sync::Arc;
use std::time::Duration;

use dictionary::{DictionaryError, WordEntry, WordLookup};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::{sleep_until, Instant};

use crate::audio::AudioPlayer;
use crate::bookmarks::BookmarkStore;
use crate::render::{render, render_bookmarks};
use crate::screen::{QueryChange, WordScreen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    QueryChanged(String),
    ToggleBookmark,
    /// Index of the phonetic whose recording should play.
    PlayAudio(usize),
    ShowBookmarks,
    Quit,
}

struct Completion {
    query: String,
    result: Result<WordEntry, DictionaryError>,
}

/// Drives a [`WordScreen`] from user events and lookup completions on a single task.
pub struct Controller<L, P> {
    screen: WordScreen,
    lookup: Arc<L>,
    store: BookmarkStore,
    player: P,
    debounce: Duration,
    scheduled: Option<(String, Instant)>,
    lookups: JoinSet<Completion>,
    frames: mpsc::UnboundedSender<String>,
}

impl<L, P> Controller<L, P>
where
    L: WordLookup + 'static,
    P: AudioPlayer,
{
    /// Loads saved bookmarks and publishes the first frame.
    pub async fn mount(
        lookup: L,
        store: BookmarkStore,
        player: P,
        debounce: Duration,
        frames: mpsc::UnboundedSender<String>,
    ) -> Self {
        let bookmarks = store.load().await;
        let controller = Self {
            screen: WordScreen::new(bookmarks),
            lookup: Arc::new(lookup),
            store,
            player,
            debounce,
            scheduled: None,
            lookups: JoinSet::new(),
            frames,
        };
        controller.publish();
        controller
    }

    /// Runs until [`ScreenEvent::Quit`] or until every event sender is gone.
    pub async fn run(mut self, mut events: mpsc::Receiver<ScreenEvent>) -> WordScreen {
        loop {
            let deadline = self.scheduled.as_ref().map(|(_, at)| *at);
            tokio::select! {
                event = events.recv() => match event {
                    Some(ScreenEvent::Quit) | None => break,
                    Some(event) => self.handle(event).await,
                },
                Some(joined) = self.lookups.join_next() => match joined {
                    Ok(done) => self.complete(done),
                    Err(error) => tracing::error!("Lookup task failed: {error}"),
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some((query, _)) = self.scheduled.take() {
                        self.issue(query);
                    }
                }
            }
        }
        if let Some(query) = self.screen.pending() {
            tracing::debug!(query, "abandoning lookup in flight");
        }
        self.lookups.abort_all();
        self.screen
    }

    async fn handle(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::QueryChanged(text) => {
                match self.screen.set_query(text) {
                    QueryChange::Unchanged => return,
                    QueryChange::Blank => self.scheduled = None,
                    QueryChange::Search(query) if self.debounce.is_zero() => self.issue(query),
                    QueryChange::Search(query) => {
                        self.scheduled = Some((query, Instant::now() + self.debounce));
                    }
                }
                self.publish();
            }
            ScreenEvent::ToggleBookmark => {
                let saved = self.screen.toggle_bookmark();
                tracing::info!(word = self.screen.query(), saved, "toggled bookmark");
                self.publish();
                if let Err(error) = self.store.save(self.screen.bookmarks()).await {
                    tracing::warn!("Failed to save bookmarks: {error}");
                }
            }
            ScreenEvent::PlayAudio(index) => match self.screen.audio_url(index) {
                Some(url) => {
                    if let Err(error) = self.player.play(url) {
                        tracing::error!("Error playing audio: {error}");
                    }
                }
                None => tracing::warn!(index, "no recording for this pronunciation"),
            },
            ScreenEvent::ShowBookmarks => self.send(render_bookmarks(self.screen.bookmarks())),
            ScreenEvent::Quit => {}
        }
    }

    fn issue(&mut self, query: String) {
        tracing::debug!(query = query.as_str(), "looking up");
        self.screen.start_lookup(&query);
        let lookup = Arc::clone(&self.lookup);
        self.lookups.spawn(async move {
            let result = lookup.lookup(&query).await;
            Completion { query, result }
        });
    }

    fn complete(&mut self, done: Completion) {
        if self.screen.finish_lookup(&done.query, done.result) {
            self.publish();
        }
    }

    fn publish(&self) {
        self.send(render(&self.screen));
    }

    fn send(&self, frame: String) {
        // nobody watching is fine
        let _ = self.frames.send(frame);
    }
}
