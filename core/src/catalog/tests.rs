use super::*;
use crate::host::{FsStorage, MemoryStorage};
use std::path::PathBuf;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) const ROOT: &str = "/ext/txt_viewer";

    pub(super) fn names(catalog: &FileCatalog) -> Vec<&str> {
        catalog.entries().iter().map(|name| name.as_str()).collect()
    }

    pub(super) fn root() -> PathBuf {
        PathBuf::from(ROOT)
    }
}

mod rescan_memory {
    use super::common::{ROOT, names, root};
    use super::*;

    #[test]
    fn test_rescan_preserves_enumeration_order() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/zeta.txt"), "z");
        storage.add_file(format!("{ROOT}/alpha.txt"), "a");
        storage.add_file(format!("{ROOT}/mid.txt"), "m");

        let mut catalog = FileCatalog::new();
        catalog.rescan(&storage, &root()).unwrap();

        assert_eq!(names(&catalog), ["zeta.txt", "alpha.txt", "mid.txt"]);
    }

    #[test]
    fn test_rescan_excludes_directories() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/a.txt"), "a");
        storage.add_dir(format!("{ROOT}/nested"));
        storage.add_file(format!("{ROOT}/nested/inner.txt"), "inner");
        storage.add_file(format!("{ROOT}/b.txt"), "b");

        let mut catalog = FileCatalog::new();
        let entries = catalog.rescan(&storage, &root()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(names(&catalog), ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_rescan_empty_directory() {
        let storage = MemoryStorage::new();
        storage.add_dir(ROOT);

        let mut catalog = FileCatalog::new();
        catalog.rescan(&storage, &root()).unwrap();

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rescan_discards_previous_entries() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/a.txt"), "a");
        storage.add_file(format!("{ROOT}/b.txt"), "b");

        let mut catalog = FileCatalog::new();
        for _ in 0..3 {
            catalog.rescan(&storage, &root()).unwrap();
        }

        assert_eq!(names(&catalog), ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_rescan_missing_directory_fails_and_clears() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/a.txt"), "a");

        let mut catalog = FileCatalog::new();
        catalog.rescan(&storage, &root()).unwrap();
        assert_eq!(catalog.len(), 1);

        let result = catalog.rescan(&storage, Path::new("/ext/missing"));
        assert!(matches!(result, Err(CatalogError::ScanFailed { .. })));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_get_resolves_by_position() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/first.txt"), "1");
        storage.add_file(format!("{ROOT}/second.txt"), "2");

        let mut catalog = FileCatalog::new();
        catalog.rescan(&storage, &root()).unwrap();

        assert_eq!(catalog.get(1).unwrap().as_str(), "second.txt");
        assert!(catalog.get(2).is_none());
    }
}

mod rescan_fs {
    use super::common::names;
    use super::*;

    #[test]
    fn test_rescan_lists_plain_files_only() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("one.txt"), "1").unwrap();
        std::fs::write(temp_dir.path().join("two.txt"), "2").unwrap();
        std::fs::create_dir(temp_dir.path().join("subdir")).unwrap();
        std::fs::write(temp_dir.path().join("subdir").join("deep.txt"), "d").unwrap();

        let mut catalog = FileCatalog::new();
        catalog.rescan(&FsStorage, temp_dir.path()).unwrap();

        let mut found = names(&catalog);
        found.sort();
        assert_eq!(found, ["one.txt", "two.txt"]);
    }

    #[test]
    fn test_rescan_nonexistent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let mut catalog = FileCatalog::new();
        let err = catalog.rescan(&FsStorage, &missing).unwrap_err();

        assert!(err.to_string().contains("could not read"));
        assert!(catalog.is_empty());
    }
}
