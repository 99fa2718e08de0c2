use std::path::Path;

use notebox_app::FileDirectoryInfra;

#[derive(Default)]
pub struct NoteboxCreateDirsService;

#[async_trait::async_trait]
impl FileDirectoryInfra for NoteboxCreateDirsService {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        notebox_fs::NoteboxFS::create_dir_all(path).await
    }
}
