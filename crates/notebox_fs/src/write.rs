use std::path::Path;

use anyhow::{Context, Result};

impl crate::NoteboxFS {
    pub async fn write<T: AsRef<Path>, U: AsRef<[u8]>>(path: T, contents: U) -> Result<()> {
        let path = path.as_ref();
        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("Failed to write file {}", path.display()))
    }

    pub async fn create_dir_all<T: AsRef<Path>>(path: T) -> Result<()> {
        let path = path.as_ref();
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create dir {}", path.display()))
    }

    pub async fn remove_file<T: AsRef<Path>>(path: T) -> Result<()> {
        let path = path.as_ref();
        tokio::fs::remove_file(path)
            .await
            .with_context(|| format!("Failed to remove file {}", path.display()))
    }
}
