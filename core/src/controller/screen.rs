use crate::types::FileName;

pub const APP_TITLE: &str = "TXT Viewer";

pub const INFO_TEXT: &str = "TXT Viewer\n\
\n\
Browse: text files in the viewer folder.\n\
Recents: files opened this session.\n\
Favorites: files you marked.\n\
\n\
Mark a file as favorite from any list or while reading it.\n\
Add files to the folder with QFlipper.";

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Browse,
    Recents,
    Favorites,
    Info,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Browse,
        MenuItem::Recents,
        MenuItem::Favorites,
        MenuItem::Info,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Browse => "Browse",
            MenuItem::Recents => "Recents",
            MenuItem::Favorites => "Favorites",
            MenuItem::Info => "Info",
        }
    }
}

/// Which collection a list screen was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Browse,
    Recents,
    Favorites,
}

impl ListKind {
    pub fn header(self) -> &'static str {
        match self {
            ListKind::Browse => "Browse Files",
            ListKind::Recents => "Recent Files",
            ListKind::Favorites => "Favorites",
        }
    }

    pub fn empty_text(self) -> &'static str {
        match self {
            ListKind::Browse => "No files",
            ListKind::Recents => "No recent files",
            ListKind::Favorites => "No favorites",
        }
    }
}

/// A list screen, rebuilt from its source collection on every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedList {
    pub kind: ListKind,
    pub entries: Vec<FileName>,
}

impl DisplayedList {
    pub fn new(kind: ListKind, entries: &[FileName]) -> Self {
        Self {
            kind,
            entries: entries.to_vec(),
        }
    }

    pub fn header(&self) -> &'static str {
        self.kind.header()
    }

    pub fn empty_text(&self) -> &'static str {
        self.kind.empty_text()
    }

    pub fn get(&self, index: usize) -> Option<&FileName> {
        self.entries.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    List(DisplayedList),
    Content { name: FileName, body: String },
    Info { body: &'static str },
}

/// Discrete input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Activate the item at this position on the current screen.
    Select(usize),
    /// Toggle the favorite mark on the item at this position. On the content
    /// screen the open file is toggled and the index is ignored.
    MarkFavorite(usize),
    Back,
}

/// Transient message for the host's dialog service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Result of handling one [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Notify(Notice),
    Exit,
}
