//! Contracts for the services the host firmware provides.
//!
//! The viewer never touches a real window system or storage driver directly;
//! it talks to these traits. [`FsStorage`] backs [`Storage`] with `std::fs`
//! for desktop hosts and [`MemoryStorage`] keeps everything in memory.

use crate::controller::{Event, Screen};
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::Path;

mod fs;
mod memory;

pub use fs::{FsEntries, FsStorage};
pub use memory::{MemoryFile, MemoryStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// One record yielded while enumerating a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Host storage service.
pub trait Storage {
    type Entries: Iterator<Item = io::Result<DirEntry>>;
    type File: Read;

    /// Creates `path`. An already existing directory is not an error.
    fn mkdir(&self, path: &Path) -> io::Result<()>;

    /// Opens `path` for enumeration. Entries come back in the storage's own order.
    fn open_directory(&self, path: &Path) -> io::Result<Self::Entries>;

    /// Opens `path` for reading.
    fn open_file(&self, path: &Path) -> io::Result<Self::File>;
}

/// Host modal dialog service. Returns once the user dismisses the message.
pub trait Dialogs {
    fn show_message(&mut self, title: &str, body: &str);
}

/// Host display: draws screens and reports user input.
pub trait Surface {
    fn show(&mut self, screen: &Screen);

    /// Blocks until the next input event. `None` means the host is shutting down.
    fn next_event(&mut self) -> Option<Event>;
}
