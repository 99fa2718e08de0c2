use std::path::Path;

use anyhow::Result;
use notebox_app::FileInfoInfra;

pub struct NoteboxFileMetaService;

#[async_trait::async_trait]
impl FileInfoInfra for NoteboxFileMetaService {
    async fn is_file(&self, path: &Path) -> Result<bool> {
        Ok(notebox_fs::NoteboxFS::is_file(path))
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        Ok(notebox_fs::NoteboxFS::exists(path))
    }
}
