use std::process::Stdio;

use dictionary::Url;
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("not a playable audio url: {0:?}")]
    InvalidUrl(String),
    #[error("failed to start audio player {player:?}: {source}")]
    Spawn {
        player: String,
        #[source]
        source: std::io::Error,
    },
}

/// Plays a pronunciation clip. Fire-and-forget: no completion, no stop.
pub trait AudioPlayer: Send {
    fn play(&self, url: &str) -> Result<(), AudioError>;
}

/// Streams clips through an external command line player such as `mpv` or `ffplay`.
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

fn is_playable(url: &str) -> bool {
    match Url::parse(url) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&self, url: &str) -> Result<(), AudioError> {
        if !is_playable(url) {
            return Err(AudioError::InvalidUrl(url.to_owned()));
        }
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AudioError::Spawn {
                player: self.program.clone(),
                source,
            })?;
        tracing::debug!(url, player = self.program.as_str(), "playing audio");

        let url = url.to_owned();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    tracing::error!("Error playing audio {url}: player exited with {status}");
                }
                Ok(_) => {}
                Err(error) => tracing::error!("Error playing audio {url}: {error}"),
            }
        });
        Ok(())
    }
}
