use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use notebox_app::{NoteService, UserInfra};
use notebox_domain::Title;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::cli::TopLevelCommand;
use crate::menu::MenuItem;

const MENU_PROMPT: &str = "Notes Menu";
const TITLE_PROMPT: &str = "Enter note title: ";
const BODY_PROMPT: &str = "Enter note content: ";

/// Command dispatcher between the user and the note store.
///
/// Questions go through `U`, results are written to `W`. Missing notes and
/// invalid titles are reported on `W` and are not errors; only
/// infrastructure failures are returned.
pub struct UI<S, U, W> {
    notes: Arc<S>,
    user: Arc<U>,
    out: W,
}

impl<S: NoteService, U: UserInfra, W: Write> UI<S, U, W> {
    pub fn new(notes: Arc<S>, user: Arc<U>, out: W) -> Self {
        Self { notes, user, out }
    }

    /// Runs a single subcommand, or the interactive menu when there is none.
    pub async fn execute(&mut self, command: Option<TopLevelCommand>) -> Result<()> {
        match command {
            None => self.run().await,
            Some(TopLevelCommand::Create { title, body }) => {
                let Some(title) = self.parse_title(&title)? else {
                    return Ok(());
                };
                let body = match body {
                    Some(body) => body,
                    None => match self.user.prompt_question(BODY_PROMPT).await? {
                        Some(body) => body,
                        None => return Ok(()),
                    },
                };
                self.create_with(&title, &body).await
            }
            Some(TopLevelCommand::List) => self.list().await,
            Some(TopLevelCommand::View { title }) => match self.parse_title(&title)? {
                Some(title) => self.view_with(&title).await,
                None => Ok(()),
            },
            Some(TopLevelCommand::Delete { title }) => match self.parse_title(&title)? {
                Some(title) => self.delete_with(&title).await,
                None => Ok(()),
            },
        }
    }

    /// Interactive menu loop. Ends on `Exit` or when the prompt is
    /// cancelled.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let choice = self
                .user
                .select_one(MENU_PROMPT, MenuItem::iter().collect::<Vec<_>>())
                .await?;
            debug!(?choice, "Menu selection");

            match choice {
                Some(MenuItem::Create) => self.create().await?,
                Some(MenuItem::List) => self.list().await?,
                Some(MenuItem::View) => self.view().await?,
                Some(MenuItem::Delete) => self.delete().await?,
                Some(MenuItem::Exit) | None => break,
            }
        }

        writeln!(self.out, "Goodbye!")?;
        Ok(())
    }

    pub async fn create(&mut self) -> Result<()> {
        let Some(title) = self.ask_title().await? else {
            return Ok(());
        };
        let Some(body) = self.user.prompt_question(BODY_PROMPT).await? else {
            return Ok(());
        };
        self.create_with(&title, &body).await
    }

    pub async fn create_with(&mut self, title: &Title, body: &str) -> Result<()> {
        self.notes.create(title, body).await?;
        writeln!(self.out, "Note '{title}' created successfully.")?;
        Ok(())
    }

    pub async fn list(&mut self) -> Result<()> {
        let titles = self.notes.list().await?;
        if titles.is_empty() {
            writeln!(self.out, "No notes found.")?;
            return Ok(());
        }

        writeln!(self.out, "Available notes:")?;
        for title in titles {
            writeln!(self.out, "- {title}")?;
        }
        Ok(())
    }

    pub async fn view(&mut self) -> Result<()> {
        match self.ask_title().await? {
            Some(title) => self.view_with(&title).await,
            None => Ok(()),
        }
    }

    pub async fn view_with(&mut self, title: &Title) -> Result<()> {
        match self.notes.read(title).await? {
            Some(note) => {
                writeln!(self.out, "\n--- {} ---", note.title)?;
                writeln!(self.out, "{}", note.body)?;
            }
            None => writeln!(self.out, "Note '{title}' not found.")?,
        }
        Ok(())
    }

    pub async fn delete(&mut self) -> Result<()> {
        match self.ask_title().await? {
            Some(title) => self.delete_with(&title).await,
            None => Ok(()),
        }
    }

    pub async fn delete_with(&mut self, title: &Title) -> Result<()> {
        if self.notes.delete(title).await? {
            writeln!(self.out, "Note '{title}' deleted successfully.")?;
        } else {
            writeln!(self.out, "Note '{title}' not found.")?;
        }
        Ok(())
    }

    async fn ask_title(&mut self) -> Result<Option<Title>> {
        match self.user.prompt_question(TITLE_PROMPT).await? {
            Some(raw) => self.parse_title(&raw),
            None => Ok(None),
        }
    }

    fn parse_title(&mut self, raw: &str) -> Result<Option<Title>> {
        match Title::new(raw) {
            Ok(title) => Ok(Some(title)),
            Err(error) => {
                debug!(%error, "Rejected title");
                writeln!(self.out, "{error}")?;
                Ok(None)
            }
        }
    }
}
