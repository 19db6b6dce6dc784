//! Line-oriented host: screens are printed as numbered lists and input is
//! read one command per line.

use log::warn;
use std::fmt::{self, Write as _};
use std::io::{BufRead, Write};
use txtview_core::controller::APP_TITLE;
use txtview_core::host::{Dialogs, Surface};
use txtview_core::types::ShortcutsConfig;
use txtview_core::{Event, MenuItem, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Quit,
}

/// Parses one input line. Positions are 1-based on screen.
///
/// `<n>` selects, `<favorite> <n>` toggles a favorite, and the back and quit
/// keys map to [`Event::Back`] and [`Command::Quit`]. A bare favorite key
/// toggles the open file and is only accepted while `reading`.
pub fn parse_command(line: &str, shortcuts: &ShortcutsConfig, reading: bool) -> Option<Command> {
    let line = line.trim();

    if line == shortcuts.quit {
        return Some(Command::Quit);
    }
    if line == shortcuts.back {
        return Some(Command::Event(Event::Back));
    }
    if let Some(rest) = line.strip_prefix(shortcuts.favorite.as_str()) {
        let rest = rest.trim();
        if rest.is_empty() {
            return reading.then_some(Command::Event(Event::MarkFavorite(0)));
        }
        return parse_position(rest).map(|index| Command::Event(Event::MarkFavorite(index)));
    }

    parse_position(line).map(|index| Command::Event(Event::Select(index)))
}

fn parse_position(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok()?.checked_sub(1)
}

pub fn render(screen: &Screen, shortcuts: &ShortcutsConfig) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = render_into(&mut out, screen, shortcuts);
    out
}

fn render_into(out: &mut String, screen: &Screen, shortcuts: &ShortcutsConfig) -> fmt::Result {
    let back = &shortcuts.back;
    let favorite = &shortcuts.favorite;

    match screen {
        Screen::MainMenu => {
            writeln!(out, "== {APP_TITLE} ==")?;
            for (position, item) in MenuItem::ALL.iter().enumerate() {
                writeln!(out, "  {}. {}", position + 1, item.label())?;
            }
            writeln!(out, "[number] select  [{back}] exit")
        }
        Screen::List(list) => {
            writeln!(out, "== {} ==", list.header())?;
            if list.entries.is_empty() {
                writeln!(out, "  ({})", list.empty_text())?;
            }
            for (position, name) in list.entries.iter().enumerate() {
                writeln!(out, "  {}. {name}", position + 1)?;
            }
            writeln!(out, "[number] open  [{favorite} number] favorite  [{back}] back")
        }
        Screen::Content { name, body } => {
            writeln!(out, "== {name} ==")?;
            writeln!(out, "{body}")?;
            writeln!(out, "[{favorite}] favorite  [{back}] back")
        }
        Screen::Info { body } => {
            writeln!(out, "== Info ==")?;
            writeln!(out, "{body}")?;
            writeln!(out, "[{back}] back")
        }
    }
}

pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    output: W,
    shortcuts: ShortcutsConfig,
    reading: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, shortcuts: ShortcutsConfig) -> Self {
        Self {
            input,
            output,
            shortcuts,
            reading: false,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
        {
            warn!("Failed to write to terminal: {e}");
        }
    }

    /// Returns `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!("Failed to read from terminal: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Surface for Terminal<R, W> {
    fn show(&mut self, screen: &Screen) {
        self.reading = matches!(screen, Screen::Content { .. });
        let text = render(screen, &self.shortcuts);
        self.print(&format!("\n{text}"));
    }

    fn next_event(&mut self) -> Option<Event> {
        loop {
            self.print("> ");
            let line = self.read_line()?;
            match parse_command(&line, &self.shortcuts, self.reading) {
                Some(Command::Event(event)) => return Some(event),
                Some(Command::Quit) => return None,
                None => self.print(&format!("Unknown command: {}\n", line.trim())),
            }
        }
    }
}

impl<R: BufRead, W: Write> Dialogs for Terminal<R, W> {
    fn show_message(&mut self, title: &str, body: &str) {
        self.print(&format!("\n[{title}]\n{body}\n(press Enter) "));
        let _ = self.read_line();
    }
}
