use std::path::Path;

use notebox_app::FileRemoverInfra;

/// Low-level file remove service
#[derive(Default)]
pub struct NoteboxFileRemoveService;

impl NoteboxFileRemoveService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for NoteboxFileRemoveService {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        notebox_fs::NoteboxFS::remove_file(path).await
    }
}
