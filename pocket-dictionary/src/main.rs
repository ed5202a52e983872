use std::thread;

use bookmarks::BookmarkStore;
use controller::{Controller, ScreenEvent};
use dictionary::Dictionary;
use input::{input, parse_line, Input};
use storage::Storage;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::audio::CommandPlayer;
mod audio;
mod bookmarks;
mod config;
mod controller;
mod input;
mod render;
mod screen;
mod storage;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the screen, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocket_dictionary=info,dictionary=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting pocket dictionary");

    let config = config::load_config()?;
    let storage = Storage::initialize(&config.database_url).await?;
    let dict = Dictionary::with_base_url(&config.api_url)?;
    let player = CommandPlayer::new(config.audio_player, config.audio_player_args);

    let (frames_tx, mut frames_rx) = mpsc::unbounded_channel::<String>();
    let printer = tokio::spawn(async move {
        while let Some(frame) = frames_rx.recv().await {
            println!("\n{frame}");
        }
    });

    let controller = Controller::mount(
        dict,
        BookmarkStore::new(storage.clone()),
        player,
        config.debounce,
        frames_tx,
    )
    .await;

    let (events_tx, events_rx) = mpsc::channel(64);
    read_stdin(events_tx);
    let screen = controller.run(events_rx).await;

    printer.await?;
    storage.close().await;
    info!(bookmarks = screen.bookmarks().len(), "Goodbye");
    Ok(())
}

/// Feeds stdin lines to the screen from a plain thread so a blocked read never holds up shutdown.
fn read_stdin(events: mpsc::Sender<ScreenEvent>) {
    thread::spawn(move || loop {
        let line = match input("") {
            Ok(line) if !line.is_empty() => line,
            // end of input
            Ok(_) => break,
            Err(error) => {
                tracing::error!("Failed to read input: {error}");
                break;
            }
        };
        match parse_line(&line) {
            Input::Events(batch) => {
                for event in batch {
                    if events.blocking_send(event).is_err() {
                        return;
                    }
                }
            }
            Input::Unknown(command) => {
                println!("Unknown command {command}.");
            }
        }
    });
}
