use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use super::StorageBackend;

/// Stores each key in its own file inside a folder
///
/// Writes go to a temporary file that is then renamed over the old one so a
/// crash never leaves a half written value behind.
#[derive(Debug, Clone)]
pub struct FileBackend {
    folder: PathBuf,
}

impl FileBackend {
    /// Creates `folder` if it does not exist yet
    pub fn new<P: Into<PathBuf>>(folder: P) -> anyhow::Result<Self> {
        let folder = folder.into();
        fs::create_dir_all(&folder)
            .with_context(|| format!("failed to create storage folder: {folder:?}"))?;
        Ok(Self { folder })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    fn file_for(&self, key: &str) -> PathBuf {
        debug_assert!(
            !key.contains(['/', '\\']),
            "storage keys are used as file names: {key:?}"
        );
        self.folder.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.file_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {path:?}")),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.file_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).with_context(|| format!("failed to write {tmp_path:?}"))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("failed to move {tmp_path:?} to {path:?}"))
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        let path = self.file_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove {path:?}")),
        }
    }
}
