use std::path::Path;

use bytes::Bytes;
use notebox_app::FileWriterInfra;

/// Low-level file write service
///
/// Writes whole files and creates missing parent directories. A write
/// always replaces the previous content of the file.
pub struct NoteboxFileWriteService;

impl NoteboxFileWriteService {
    pub fn new() -> Self {
        Self
    }

    /// Creates parent directories for the given file path if they don't exist
    async fn create_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if !notebox_fs::NoteboxFS::exists(path)
            && let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            notebox_fs::NoteboxFS::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

impl Default for NoteboxFileWriteService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for NoteboxFileWriteService {
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.create_parent_dirs(path).await?;
        notebox_fs::NoteboxFS::write(path, contents).await
    }
}
