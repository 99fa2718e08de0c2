use std::path::Path;

use anyhow::Result;
use notebox_app::FileReaderInfra;

pub struct NoteboxFileReadService;

impl Default for NoteboxFileReadService {
    fn default() -> Self {
        Self
    }
}

impl NoteboxFileReadService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for NoteboxFileReadService {
    async fn read_utf8(&self, path: &Path) -> Result<String> {
        notebox_fs::NoteboxFS::read_utf8(path).await
    }
}
