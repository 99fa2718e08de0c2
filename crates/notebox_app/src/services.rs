use notebox_domain::{Note, Title};

/// Storage for notes, one plain-text file per title.
///
/// Implementations keep no cache: every call reflects what is on disk at
/// the time of the call.
#[async_trait::async_trait]
pub trait NoteService: Send + Sync {
    /// Writes `body` under `title`, replacing any previous note with the
    /// same title.
    async fn create(&self, title: &Title, body: &str) -> anyhow::Result<()>;

    /// Titles of every stored note, sorted.
    async fn list(&self) -> anyhow::Result<Vec<Title>>;

    /// The note stored under `title`, or `None` if there is none.
    async fn read(&self, title: &Title) -> anyhow::Result<Option<Note>>;

    /// Removes the note stored under `title`. Returns `false` if there was
    /// nothing to remove.
    async fn delete(&self, title: &Title) -> anyhow::Result<bool>;
}
