//! One run of the viewer, from startup to exit.

use crate::controller::{APP_TITLE, Outcome, ViewController};
use crate::host::{Dialogs, Storage, Surface};
use crate::session::error::SessionError;
use crate::types::AppConfig;
use log::{info, warn};

pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum SessionError {
        #[error("could not create folder {}: {source}", .path.display())]
        DirectoryUnavailable {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
    }
}

pub struct Session<S: Storage> {
    controller: ViewController<S>,
    show_welcome: bool,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S, config: &AppConfig) -> Self {
        Self {
            controller: ViewController::new(storage, config),
            show_welcome: config.general.show_welcome,
        }
    }

    pub fn controller(&self) -> &ViewController<S> {
        &self.controller
    }

    /// Creates the root folder so the user has somewhere to drop files.
    pub fn prepare_root(&self) -> Result<(), SessionError> {
        let root = self.controller.root();
        self.controller
            .storage()
            .mkdir(root)
            .map_err(|source| SessionError::DirectoryUnavailable {
                path: root.to_path_buf(),
                source,
            })
    }

    pub fn welcome_text(&self) -> String {
        format!(
            "Folder {} created.\nAdd text files there using QFlipper.",
            self.controller.root().display()
        )
    }

    /// Prepares the root folder, then drives the event loop until the user
    /// backs out of the main menu or the host stops delivering events.
    pub fn run<H: Surface + Dialogs>(&mut self, host: &mut H) {
        info!("Session started, root {}", self.controller.root().display());

        match self.prepare_root() {
            Ok(()) if self.show_welcome => host.show_message(APP_TITLE, &self.welcome_text()),
            Ok(()) => {}
            Err(e) => {
                warn!("{e}");
                host.show_message(APP_TITLE, &e.to_string());
            }
        }

        loop {
            host.show(self.controller.screen());
            let Some(event) = host.next_event() else {
                break;
            };

            match self.controller.handle(event) {
                Outcome::Continue => {}
                Outcome::Notify(notice) => host.show_message(&notice.title, &notice.body),
                Outcome::Exit => break,
            }
        }

        info!(
            "Session ended with {} recent and {} favorite files",
            self.controller.recents().len(),
            self.controller.favorites().len()
        );
    }
}
