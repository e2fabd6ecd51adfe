use crate::store::fs_backend::FsBackend;
use crate::store::mem_backend::MemBackend;
use crate::store::NoteStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Empty store over an in-memory backend.
pub fn mem_store() -> NoteStore<MemBackend> {
    NoteStore::open(MemBackend::new()).expect("memory backend never fails to load")
}

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("keeper");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn backend(&self) -> FsBackend {
        FsBackend::new(self.root.clone())
    }

    pub fn open_store(&self) -> NoteStore<FsBackend> {
        NoteStore::open(self.backend()).expect("failed to open store")
    }
}
