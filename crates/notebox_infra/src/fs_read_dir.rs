use std::path::{Path, PathBuf};

use notebox_app::DirectoryReaderInfra;

#[derive(Default)]
pub struct NoteboxDirectoryReaderService;

#[async_trait::async_trait]
impl DirectoryReaderInfra for NoteboxDirectoryReaderService {
    async fn list_directory_entries(
        &self,
        directory: &Path,
    ) -> anyhow::Result<Vec<(PathBuf, bool)>> {
        notebox_fs::NoteboxFS::read_dir(directory).await
    }
}
