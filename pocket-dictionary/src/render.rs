use dictionary::WordEntry;

use crate::bookmarks::BookmarkSet;
use crate::screen::{LookupState, WordScreen};

pub const PLACEHOLDER: &str = "Type a word to get its definition.";

pub fn render(screen: &WordScreen) -> String {
    let mut lines = vec!["Dictionary".to_string()];
    let marker = if screen.is_bookmarked() { "[*]" } else { "[ ]" };
    lines.push(format!("Search: {}  {marker} bookmark", screen.query()));

    match screen.lookup_state() {
        LookupState::Failed(message) => lines.push(message.clone()),
        LookupState::Loaded(entry) => render_entry(entry, &mut lines),
        LookupState::Idle => lines.push(PLACEHOLDER.to_string()),
    }
    lines.join("\n")
}

fn render_entry(entry: &WordEntry, lines: &mut Vec<String>) {
    for (index, phonetic) in entry.phonetics.iter().enumerate() {
        let text = phonetic.display_text();
        let audio = phonetic.audio_url().is_some();
        match (text, audio) {
            (Some(text), true) => lines.push(format!("  {text}  (:play {})", index + 1)),
            (Some(text), false) => lines.push(format!("  {text}")),
            (None, true) => lines.push(format!("  (:play {})", index + 1)),
            (None, false) => {}
        }
    }

    lines.push("Definitions:".to_string());
    for meaning in &entry.meanings {
        lines.push(format!("    {}", meaning.part_of_speech));
        // one definition per part of speech keeps the screen short
        if let Some(definition) = meaning.definitions.first() {
            lines.push(format!("      {}", definition.definition));
            if let Some(example) = &definition.example {
                lines.push(format!("      Example: {example}"));
            }
        }
    }

    if let Some(source) = entry.first_source_url() {
        lines.push(format!("Source: {source}"));
    }
    if let Some(license) = &entry.license {
        lines.push(format!("License: {}", license.name));
    }
}

pub fn render_bookmarks(bookmarks: &BookmarkSet) -> String {
    if bookmarks.is_empty() {
        return "No bookmarks yet.".to_string();
    }
    let mut lines = vec!["Bookmarks:".to_string()];
    for (index, word) in bookmarks.iter().enumerate() {
        lines.push(format!("  {}. {word}", index + 1));
    }
    lines.join("\n")
}
