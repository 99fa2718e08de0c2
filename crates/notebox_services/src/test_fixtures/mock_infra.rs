//! In-memory infrastructure for note service tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bytes::Bytes;
use notebox_app::domain::Environment;
use notebox_app::{
    DirectoryReaderInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra, FileReaderInfra,
    FileRemoverInfra, FileWriterInfra,
};

#[derive(Debug)]
pub struct MockInfra {
    env: Environment,
    files: Mutex<BTreeMap<PathBuf, Bytes>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MockInfra {
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            env: Environment::default().notes_dir(notes_dir.into()),
            files: Mutex::new(BTreeMap::new()),
            dirs: Mutex::new(BTreeSet::new()),
        }
    }

    pub fn add_file(&self, path: PathBuf, content: &str) {
        if let Some(parent) = path.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path, Bytes::from(content.to_string()));
    }

    pub fn add_dir(&self, path: PathBuf) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

impl EnvironmentInfra for MockInfra {
    fn get_environment(&self) -> Environment {
        self.env.clone()
    }

    fn get_env_var(&self, _key: &str) -> Option<String> {
        None
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for MockInfra {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String> {
        let files = self.files.lock().unwrap();
        match files.get(path) {
            Some(content) => String::from_utf8(content.to_vec())
                .map_err(|e| anyhow::anyhow!("Invalid UTF-8 in file: {path:?}: {e}")),
            None => Err(anyhow::anyhow!("File not found: {path:?}")),
        }
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for MockInfra {
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        if self.has_dir(path) {
            return Err(anyhow::anyhow!("Is a directory: {path:?}"));
        }
        if let Some(parent) = path.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents);
        Ok(())
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for MockInfra {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        match self.files.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(anyhow::anyhow!("File not found: {path:?}")),
        }
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for MockInfra {
    async fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self.files.lock().unwrap().contains_key(path))
    }

    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self.is_file(path).await? || self.has_dir(path))
    }
}

#[async_trait::async_trait]
impl FileDirectoryInfra for MockInfra {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        self.add_dir(path.to_path_buf());
        Ok(())
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for MockInfra {
    async fn list_directory_entries(
        &self,
        directory: &Path,
    ) -> anyhow::Result<Vec<(PathBuf, bool)>> {
        if !self.has_dir(directory) {
            return Err(anyhow::anyhow!("Directory not found: {directory:?}"));
        }

        let is_child = |path: &Path| path.parent() == Some(directory);
        let files = self.files.lock().unwrap();
        let dirs = self.dirs.lock().unwrap();

        let mut entries: Vec<(PathBuf, bool)> = files
            .keys()
            .filter(|p| is_child(p.as_path()))
            .map(|p| (p.clone(), false))
            .chain(
                dirs.iter()
                    .filter(|p| is_child(p.as_path()))
                    .map(|p| (p.clone(), true)),
            )
            .collect();
        // Directory enumeration order is unspecified.
        entries.reverse();
        Ok(entries)
    }
}
