use std::path::Path;

use anyhow::{Context, Result};

impl crate::NoteboxFS {
    pub async fn read_utf8<T: AsRef<Path>>(path: T) -> Result<String> {
        let path = path.as_ref();
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::NoteboxFS;

    #[tokio::test]
    async fn test_read_utf8_missing_file_has_context() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let actual = NoteboxFS::read_utf8(&path).await.unwrap_err().to_string();
        let expected = format!("Failed to read file {}", path.display());

        assert_eq!(actual, expected);
    }
}
