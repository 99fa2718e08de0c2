use std::path::{Path, PathBuf};

use bytes::Bytes;
use notebox_domain::Environment;

/// Repository for accessing system environment information
pub trait EnvironmentInfra: Send + Sync {
    fn get_environment(&self) -> Environment;
    fn get_env_var(&self, key: &str) -> Option<String>;
}

#[async_trait::async_trait]
pub trait FileReaderInfra: Send + Sync {
    /// Reads the content of a file at the specified path.
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String>;
}

#[async_trait::async_trait]
pub trait FileWriterInfra: Send + Sync {
    /// Writes the content of a file at the specified path, creating parent
    /// directories as needed.
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait FileRemoverInfra: Send + Sync {
    async fn remove(&self, path: &Path) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait FileInfoInfra: Send + Sync {
    async fn is_file(&self, path: &Path) -> anyhow::Result<bool>;
    async fn exists(&self, path: &Path) -> anyhow::Result<bool>;
}

#[async_trait::async_trait]
pub trait FileDirectoryInfra: Send + Sync {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()>;
}

/// Directory reader infrastructure for listing directory entries.
#[async_trait::async_trait]
pub trait DirectoryReaderInfra: Send + Sync {
    /// Lists the direct children of a directory as `(path, is_dir)` pairs
    /// without reading file contents.
    async fn list_directory_entries(&self, directory: &Path)
    -> anyhow::Result<Vec<(PathBuf, bool)>>;
}

#[async_trait::async_trait]
pub trait UserInfra: Send + Sync {
    /// Prompts the user with a question and returns the response. `None`
    /// means the prompt was cancelled or input reached end of file.
    async fn prompt_question(&self, question: &str) -> anyhow::Result<Option<String>>;

    /// Prompts the user to select a single option from a list
    async fn select_one<T: std::fmt::Display + Send + 'static>(
        &self,
        message: &str,
        options: Vec<T>,
    ) -> anyhow::Result<Option<T>>;
}
