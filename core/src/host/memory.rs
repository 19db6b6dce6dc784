use super::{DirEntry, EntryKind, Storage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::vec;

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Unreadable,
    Directory,
}

/// [`Storage`] kept entirely in memory.
///
/// Directory listings preserve insertion order, which makes enumeration
/// order deterministic for simulators and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    dirs: RefCell<HashMap<PathBuf, Vec<(OsString, Node)>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, creating its parent directory listing if needed.
    /// Writing the same path again replaces the contents in place.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        self.insert(path.as_ref(), Node::File(contents.into()));
    }

    /// Adds a file that opens fine but fails on the first read.
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), Node::Unreadable);
    }

    /// Adds a sub-directory entry and an empty listing for it.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.insert(path, Node::Directory);
        self.dirs
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default();
    }

    pub fn contains_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains_key(path.as_ref())
    }

    fn insert(&self, path: &Path, node: Node) {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };

        let mut dirs = self.dirs.borrow_mut();
        let listing = dirs.entry(parent.to_path_buf()).or_default();
        match listing.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing)) => *existing = node,
            None => listing.push((name.to_os_string(), node)),
        }
    }

    fn lookup(&self, path: &Path) -> Option<Node> {
        let parent = path.parent()?;
        let name = path.file_name()?;
        self.dirs
            .borrow()
            .get(parent)?
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, node)| node.clone())
    }
}

impl Storage for MemoryStorage {
    type Entries = vec::IntoIter<io::Result<DirEntry>>;
    type File = MemoryFile;

    fn mkdir(&self, path: &Path) -> io::Result<()> {
        if matches!(self.lookup(path), Some(Node::File(_) | Node::Unreadable)) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "a file exists at this path",
            ));
        }
        self.add_dir(path);
        Ok(())
    }

    fn open_directory(&self, path: &Path) -> io::Result<Self::Entries> {
        let dirs = self.dirs.borrow();
        let listing = dirs
            .get(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;

        let entries: Vec<_> = listing
            .iter()
            .map(|(name, node)| {
                let kind = match node {
                    Node::File(_) | Node::Unreadable => EntryKind::File,
                    Node::Directory => EntryKind::Directory,
                };
                Ok(DirEntry::new(name.clone(), kind))
            })
            .collect();
        Ok(entries.into_iter())
    }

    fn open_file(&self, path: &Path) -> io::Result<Self::File> {
        match self.lookup(path) {
            Some(Node::File(contents)) => Ok(MemoryFile::Data(Cursor::new(contents))),
            Some(Node::Unreadable) => Ok(MemoryFile::Broken),
            Some(Node::Directory) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "is a directory",
            )),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}

/// Readable handle returned by [`MemoryStorage::open_file`].
#[derive(Debug)]
pub enum MemoryFile {
    Data(Cursor<Vec<u8>>),
    Broken,
}

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            MemoryFile::Data(cursor) => cursor.read(buf),
            MemoryFile::Broken => Err(io::Error::other("device read error")),
        }
    }
}
