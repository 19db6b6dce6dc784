use super::{DirEntry, EntryKind, Storage};
use std::fs::{File, ReadDir};
use std::io;
use std::path::Path;

/// [`Storage`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    type Entries = FsEntries;
    type File = File;

    fn mkdir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn open_directory(&self, path: &Path) -> io::Result<Self::Entries> {
        Ok(FsEntries(std::fs::read_dir(path)?))
    }

    fn open_file(&self, path: &Path) -> io::Result<Self::File> {
        File::open(path)
    }
}

pub struct FsEntries(ReadDir);

impl Iterator for FsEntries {
    type Item = io::Result<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.0.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e)),
        };

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => return Some(Err(e)),
        };

        // Symlinks are classified by what they point at; dangling ones are neither.
        let kind = if file_type.is_symlink() {
            match std::fs::metadata(entry.path()) {
                Ok(metadata) if metadata.is_file() => EntryKind::File,
                Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
                _ => EntryKind::Other,
            }
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        };

        Some(Ok(DirEntry::new(entry.file_name(), kind)))
    }
}
