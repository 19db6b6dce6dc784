//! Menu state machine: maps host events onto catalog, list and loader
//! operations and decides which screen is shown next.

use crate::catalog::FileCatalog;
use crate::host::Storage;
use crate::loader::ContentLoader;
use crate::names::{FavoritesList, RecentsList};
use crate::types::{AppConfig, FileName};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

mod screen;

pub use screen::{
    APP_TITLE, DisplayedList, Event, INFO_TEXT, ListKind, MenuItem, Notice, Outcome, Screen,
};

/// Owns the session's collections and the navigation history.
///
/// Events that make no sense on the current screen, and selections past the
/// end of the displayed list, leave everything untouched.
pub struct ViewController<S: Storage> {
    storage: S,
    root: PathBuf,
    loader: ContentLoader,
    catalog: FileCatalog,
    recents: RecentsList,
    favorites: FavoritesList,
    current: Screen,
    history: Vec<Screen>,
}

impl<S: Storage> ViewController<S> {
    pub fn new(storage: S, config: &AppConfig) -> Self {
        let root = config.general.root_dir.clone();
        Self {
            storage,
            loader: ContentLoader::from_config(root.clone(), &config.viewer),
            root,
            catalog: FileCatalog::new(),
            recents: RecentsList::with_limit(config.viewer.recents_limit),
            favorites: FavoritesList::new(),
            current: Screen::MainMenu,
            history: Vec::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.current
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn catalog(&self) -> &FileCatalog {
        &self.catalog
    }

    pub fn recents(&self) -> &RecentsList {
        &self.recents
    }

    pub fn favorites(&self) -> &FavoritesList {
        &self.favorites
    }

    /// Number of screens `Back` can return through before exiting.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        debug!("Handling {event:?}");
        match event {
            Event::Back => self.back(),
            Event::Select(index) => self.select(index),
            Event::MarkFavorite(index) => self.mark_favorite(index),
        }
    }

    fn back(&mut self) -> Outcome {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                // Favorites may have been toggled on a deeper screen.
                self.refresh_favorites_list();
                Outcome::Continue
            }
            None => Outcome::Exit,
        }
    }

    fn select(&mut self, index: usize) -> Outcome {
        match &self.current {
            Screen::MainMenu => match MenuItem::from_index(index) {
                Some(item) => self.open_menu_item(item),
                None => Outcome::Continue,
            },
            Screen::List(list) => {
                let kind = list.kind;
                match list.get(index).cloned() {
                    Some(name) => self.open_file(kind, name),
                    None => Outcome::Continue,
                }
            }
            Screen::Content { .. } | Screen::Info { .. } => Outcome::Continue,
        }
    }

    fn open_menu_item(&mut self, item: MenuItem) -> Outcome {
        match item {
            MenuItem::Browse => {
                let (entries, outcome) = match self.catalog.rescan(&self.storage, &self.root) {
                    Ok(entries) => (entries.to_vec(), Outcome::Continue),
                    Err(e) => {
                        warn!("Browse failed: {e}");
                        let body = format!("Could not read {}", self.root.display());
                        (
                            Vec::new(),
                            Outcome::Notify(Notice::new(ListKind::Browse.header(), body)),
                        )
                    }
                };
                self.push(Screen::List(DisplayedList {
                    kind: ListKind::Browse,
                    entries,
                }));
                outcome
            }
            MenuItem::Recents => {
                let list = DisplayedList::new(ListKind::Recents, self.recents.all());
                self.push(Screen::List(list));
                Outcome::Continue
            }
            MenuItem::Favorites => {
                let list = DisplayedList::new(ListKind::Favorites, self.favorites.all());
                self.push(Screen::List(list));
                Outcome::Continue
            }
            MenuItem::Info => {
                self.push(Screen::Info { body: INFO_TEXT });
                Outcome::Continue
            }
        }
    }

    fn open_file(&mut self, kind: ListKind, name: FileName) -> Outcome {
        match self.loader.load(&self.storage, &name) {
            Ok(content) => {
                info!("Opened {name} ({} bytes)", content.bytes().len());
                self.recents.add(name.clone());
                self.push(Screen::Content {
                    name,
                    body: content.display_text(),
                });
                Outcome::Continue
            }
            Err(e) => {
                warn!("Open failed: {e}");
                Outcome::Notify(Notice::new(kind.header(), e.to_string()))
            }
        }
    }

    fn mark_favorite(&mut self, index: usize) -> Outcome {
        let name = match &self.current {
            Screen::List(list) => list.get(index).cloned(),
            Screen::Content { name, .. } => Some(name.clone()),
            Screen::MainMenu | Screen::Info { .. } => None,
        };
        let Some(name) = name else {
            return Outcome::Continue;
        };

        let marked = self.favorites.toggle(name.clone());
        debug!("Favorite {name}: {marked}");

        self.refresh_favorites_list();
        Outcome::Continue
    }

    /// Rebuilds the current screen from `favorites` if it is the Favorites list.
    fn refresh_favorites_list(&mut self) {
        if let Screen::List(list) = &mut self.current
            && list.kind == ListKind::Favorites
        {
            *list = DisplayedList::new(ListKind::Favorites, self.favorites.all());
        }
    }

    fn push(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.current, screen);
        self.history.push(previous);
    }
}
