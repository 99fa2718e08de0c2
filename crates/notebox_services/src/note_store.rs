use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use notebox_app::domain::{Environment, Note, Title};
use notebox_app::{
    DirectoryReaderInfra, EnvironmentInfra, FileDirectoryInfra, FileInfoInfra, FileReaderInfra,
    FileRemoverInfra, FileWriterInfra, NoteService,
};
use tracing::debug;

/// Note storage backed by one `<title>.<extension>` file per note inside
/// the configured notes directory.
pub struct NoteboxNoteService<F> {
    infra: Arc<F>,
}

impl<F> NoteboxNoteService<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }
}

impl<F: EnvironmentInfra> NoteboxNoteService<F> {
    fn environment(&self) -> Environment {
        self.infra.get_environment()
    }
}

/// Recovers the title from a directory entry, skipping anything that is not
/// a note file. The stem is the title verbatim, so every title written by
/// `create` is found again, including ones such as `.bashrc` or `a.txt`.
fn title_from_path(path: &Path, extension: &str) -> Option<Title> {
    if path.extension()?.to_str()? != extension {
        return None;
    }
    Title::new(path.file_stem()?.to_str()?).ok()
}

#[async_trait::async_trait]
impl<
    F: EnvironmentInfra
        + FileReaderInfra
        + FileWriterInfra
        + FileRemoverInfra
        + FileInfoInfra
        + FileDirectoryInfra
        + DirectoryReaderInfra,
> NoteService for NoteboxNoteService<F>
{
    async fn create(&self, title: &Title, body: &str) -> anyhow::Result<()> {
        let env = self.environment();
        if !self.infra.exists(&env.notes_dir).await? {
            debug!(dir = %env.notes_dir.display(), "Creating notes directory");
            self.infra.create_dirs(&env.notes_dir).await?;
        }

        let path = env.note_path(title);
        self.infra
            .write(&path, Bytes::from(body.to_string()))
            .await?;
        debug!(%title, path = %path.display(), bytes = body.len(), "Note written");
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<Title>> {
        let env = self.environment();
        if !self.infra.exists(&env.notes_dir).await? {
            debug!(dir = %env.notes_dir.display(), "Notes directory missing");
            return Ok(vec![]);
        }

        let mut titles: Vec<Title> = self
            .infra
            .list_directory_entries(&env.notes_dir)
            .await?
            .into_iter()
            .filter(|(_, is_dir)| !is_dir)
            .filter_map(|(path, _)| title_from_path(&path, &env.extension))
            .collect();
        titles.sort();
        titles.dedup();

        debug!(count = titles.len(), "Listed notes");
        Ok(titles)
    }

    async fn read(&self, title: &Title) -> anyhow::Result<Option<Note>> {
        let path = self.environment().note_path(title);
        if !self.infra.is_file(&path).await? {
            debug!(%title, "Note not found");
            return Ok(None);
        }

        let body = self.infra.read_utf8(&path).await?;
        Ok(Some(Note::new(title.clone(), body)))
    }

    async fn delete(&self, title: &Title) -> anyhow::Result<bool> {
        let path = self.environment().note_path(title);
        if !self.infra.is_file(&path).await? {
            debug!(%title, "Nothing to delete");
            return Ok(false);
        }

        self.infra.remove(&path).await?;
        debug!(%title, path = %path.display(), "Note deleted");
        Ok(true)
    }
}
