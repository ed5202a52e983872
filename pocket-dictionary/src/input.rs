use std::io::{self, Write};

use crate::controller::ScreenEvent;

pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Events(Vec<ScreenEvent>),
    Unknown(String),
}

/// Turns one line typed into the search field into screen events.
pub fn parse_line(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return Input::Events(vec![ScreenEvent::QueryChanged(line.to_owned())]);
    };
    let (name, argument) = command.split_once(' ').unwrap_or((command, ""));
    let event = match name {
        "q" | "quit" | "exit" => ScreenEvent::Quit,
        "b" | "bookmark" => ScreenEvent::ToggleBookmark,
        "list" | "bookmarks" => ScreenEvent::ShowBookmarks,
        "clear" => ScreenEvent::QueryChanged(String::new()),
        "p" | "play" => match argument.trim().parse::<usize>() {
            Ok(number) if number > 0 => ScreenEvent::PlayAudio(number - 1),
            _ => return Input::Unknown(line.to_owned()),
        },
        "type" if !argument.is_empty() => return Input::Events(keystrokes(argument)),
        _ => return Input::Unknown(line.to_owned()),
    };
    Input::Events(vec![event])
}

/// One query change per typed character, the way a search field reports them.
fn keystrokes(text: &str) -> Vec<ScreenEvent> {
    text.char_indices()
        .map(|(start, ch)| ScreenEvent::QueryChanged(text[..start + ch.len_utf8()].to_owned()))
        .collect()
}
