use super::*;
use crate::host::{FsStorage, MemoryStorage};
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) const CHUNK: usize = 16;

    pub(super) fn name(s: &str) -> FileName {
        FileName::try_from(s).unwrap()
    }

    /// Deterministic non-repeating-ish content so misplaced chunks show up.
    pub(super) fn sample_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| b'a' + (i % 26) as u8).collect()
    }

    pub(super) fn fs_loader(temp_dir: &TempDir) -> ContentLoader {
        ContentLoader::new(temp_dir.path(), CHUNK, 1024 * 1024)
    }
}

mod load_fs {
    use super::common::{CHUNK, fs_loader, name, sample_bytes};
    use super::*;

    #[test]
    fn test_load_matches_disk_across_chunk_boundaries() {
        let temp_dir = TempDir::new().unwrap();
        let loader = fs_loader(&temp_dir);

        for len in [0, 1, CHUNK - 1, CHUNK, CHUNK + 1, CHUNK * 3 + 5] {
            let file_name = format!("len_{len}.txt");
            let expected = sample_bytes(len);
            std::fs::write(temp_dir.path().join(&file_name), &expected).unwrap();

            let content = loader.load(&FsStorage, &name(&file_name)).unwrap();
            assert_eq!(content.bytes(), expected.as_slice(), "length {len}");
            assert!(!content.is_truncated());
        }
    }

    #[test]
    fn test_load_hello() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

        let content = fs_loader(&temp_dir)
            .load(&FsStorage, &name("a.txt"))
            .unwrap();
        assert_eq!(content.text(), "hello");
        assert_eq!(content.display_text(), "hello");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = fs_loader(&temp_dir).load(&FsStorage, &name("ghost.txt"));

        match result {
            Err(LoadError::NotFound(missing)) => assert_eq!(missing.as_str(), "ghost.txt"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_path_stays_inside_root() {
        let temp_dir = TempDir::new().unwrap();
        let loader = fs_loader(&temp_dir);

        let path = loader.path_for(&name("notes.txt"));
        assert_eq!(path.parent(), Some(temp_dir.path()));
    }
}

mod load_memory {
    use super::common::{CHUNK, name, sample_bytes};
    use super::*;

    const ROOT: &str = "/ext/txt_viewer";

    #[test]
    fn test_load_truncates_at_cap() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/big.txt"), sample_bytes(100));

        let loader = ContentLoader::new(ROOT, CHUNK, 40);
        let content = loader.load(&storage, &name("big.txt")).unwrap();

        assert_eq!(content.bytes(), &sample_bytes(100)[..40]);
        assert!(content.is_truncated());
        assert!(content.display_text().ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_load_exactly_at_cap_is_not_truncated() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/exact.txt"), sample_bytes(40));

        let loader = ContentLoader::new(ROOT, CHUNK, 40);
        let content = loader.load(&storage, &name("exact.txt")).unwrap();

        assert_eq!(content.bytes().len(), 40);
        assert!(!content.is_truncated());
    }

    #[test]
    fn test_load_with_single_byte_chunks() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/a.txt"), "chunked read");

        let loader = ContentLoader::new(ROOT, 1, 1024);
        let content = loader.load(&storage, &name("a.txt")).unwrap();

        assert_eq!(content.text(), "chunked read");
    }

    #[test]
    fn test_zero_sizes_are_clamped() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/a.txt"), "xy");

        let loader = ContentLoader::new(ROOT, 0, 0);
        let content = loader.load(&storage, &name("a.txt")).unwrap();

        assert_eq!(content.bytes(), b"x");
        assert!(content.is_truncated());
    }

    #[test]
    fn test_load_read_failure() {
        let storage = MemoryStorage::new();
        storage.add_unreadable_file(format!("{ROOT}/bad.txt"));

        let loader = ContentLoader::new(ROOT, CHUNK, 1024);
        let result = loader.load(&storage, &name("bad.txt"));

        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn test_load_directory_is_open_failure() {
        let storage = MemoryStorage::new();
        storage.add_dir(format!("{ROOT}/folder"));

        let loader = ContentLoader::new(ROOT, CHUNK, 1024);
        let result = loader.load(&storage, &name("folder"));

        assert!(matches!(result, Err(LoadError::Open { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_rendered_lossy() {
        let storage = MemoryStorage::new();
        storage.add_file(format!("{ROOT}/bin.dat"), vec![b'o', b'k', 0xff]);

        let loader = ContentLoader::new(ROOT, CHUNK, 1024);
        let content = loader.load(&storage, &name("bin.dat")).unwrap();

        assert_eq!(content.bytes(), &[b'o', b'k', 0xff]);
        assert_eq!(content.text(), "ok\u{fffd}");
    }
}
