use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

impl crate::NoteboxFS {
    /// Lists the direct children of `path` as `(path, is_dir)` pairs, in
    /// the order the operating system returns them.
    pub async fn read_dir<T: AsRef<Path>>(path: T) -> Result<Vec<(PathBuf, bool)>> {
        let path = path.as_ref();
        let mut entries = tokio::fs::read_dir(path)
            .await
            .with_context(|| format!("Failed to read dir {}", path.display()))?;

        let mut result = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to read dir entry in {}", path.display()))?
        {
            let is_dir = entry
                .file_type()
                .await
                .with_context(|| format!("Failed to stat {}", entry.path().display()))?
                .is_dir();
            result.push((entry.path(), is_dir));
        }

        Ok(result)
    }
}
