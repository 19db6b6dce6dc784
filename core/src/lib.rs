//! Menu-driven text file viewer core.
//!
//! The host owns the window system, the storage driver and modal dialogs.
//! This crate owns everything in between:
//!
//! - [`catalog::FileCatalog`]: plain files found by the latest directory scan
//! - [`names::NameList`]: session-scoped recents and favorites
//! - [`loader::ContentLoader`]: chunked file reads with a size cap
//! - [`controller::ViewController`]: menu selections to screens
//! - [`session::Session`]: startup and the event loop against a [`host`]

pub mod catalog;
pub mod controller;
pub mod host;
pub mod loader;
pub mod names;
pub mod session;
pub mod types;

pub use controller::{DisplayedList, Event, ListKind, MenuItem, Notice, Outcome, Screen, ViewController};
pub use session::Session;
pub use types::{AppConfig, FileName};
