use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use notebox_app::{
    DirectoryReaderInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra, FileReaderInfra,
    FileRemoverInfra, FileWriterInfra, UserInfra,
};
use notebox_domain::Environment;

use crate::env::NoteboxEnvironmentInfra;
use crate::fs_create_dirs::NoteboxCreateDirsService;
use crate::fs_meta::NoteboxFileMetaService;
use crate::fs_read::NoteboxFileReadService;
use crate::fs_read_dir::NoteboxDirectoryReaderService;
use crate::fs_remove::NoteboxFileRemoveService;
use crate::fs_write::NoteboxFileWriteService;
use crate::inquire::NoteboxInquire;

/// Production infrastructure: the local disk, the process environment and
/// the terminal.
#[derive(Clone)]
pub struct NoteboxInfra {
    file_read_service: Arc<NoteboxFileReadService>,
    file_write_service: Arc<NoteboxFileWriteService>,
    file_remove_service: Arc<NoteboxFileRemoveService>,
    environment_service: Arc<NoteboxEnvironmentInfra>,
    file_meta_service: Arc<NoteboxFileMetaService>,
    create_dirs_service: Arc<NoteboxCreateDirsService>,
    directory_reader_service: Arc<NoteboxDirectoryReaderService>,
    inquire_service: Arc<NoteboxInquire>,
}

impl NoteboxInfra {
    pub fn new(cwd: PathBuf, notes_dir: Option<PathBuf>, log_dir: Option<PathBuf>) -> Self {
        Self {
            file_read_service: Arc::new(NoteboxFileReadService::new()),
            file_write_service: Arc::new(NoteboxFileWriteService::new()),
            file_remove_service: Arc::new(NoteboxFileRemoveService::new()),
            environment_service: Arc::new(NoteboxEnvironmentInfra::new(cwd, notes_dir, log_dir)),
            file_meta_service: Arc::new(NoteboxFileMetaService),
            create_dirs_service: Arc::new(NoteboxCreateDirsService),
            directory_reader_service: Arc::new(NoteboxDirectoryReaderService),
            inquire_service: Arc::new(NoteboxInquire::new()),
        }
    }
}

impl EnvironmentInfra for NoteboxInfra {
    fn get_environment(&self) -> Environment {
        self.environment_service.get_environment()
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        self.environment_service.get_env_var(key)
    }
}

#[async_trait::async_trait]
impl FileReaderInfra for NoteboxInfra {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String> {
        self.file_read_service.read_utf8(path).await
    }
}

#[async_trait::async_trait]
impl FileWriterInfra for NoteboxInfra {
    async fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.file_write_service.write(path, contents).await
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for NoteboxInfra {
    async fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.is_file(path).await
    }

    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.exists(path).await
    }
}

#[async_trait::async_trait]
impl FileRemoverInfra for NoteboxInfra {
    async fn remove(&self, path: &Path) -> anyhow::Result<()> {
        self.file_remove_service.remove(path).await
    }
}

#[async_trait::async_trait]
impl FileDirectoryInfra for NoteboxInfra {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        self.create_dirs_service.create_dirs(path).await
    }
}

#[async_trait::async_trait]
impl DirectoryReaderInfra for NoteboxInfra {
    async fn list_directory_entries(
        &self,
        directory: &Path,
    ) -> anyhow::Result<Vec<(PathBuf, bool)>> {
        self.directory_reader_service
            .list_directory_entries(directory)
            .await
    }
}

#[async_trait::async_trait]
impl UserInfra for NoteboxInfra {
    async fn prompt_question(&self, question: &str) -> anyhow::Result<Option<String>> {
        self.inquire_service.prompt_question(question).await
    }

    async fn select_one<T: std::fmt::Display + Send + 'static>(
        &self,
        message: &str,
        options: Vec<T>,
    ) -> anyhow::Result<Option<T>> {
        self.inquire_service.select_one(message, options).await
    }
}
