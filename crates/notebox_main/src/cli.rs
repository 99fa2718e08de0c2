use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"), about = "Keep plain-text notes in a directory")]
pub struct Cli {
    /// Directory that stores the notes.
    ///
    /// Overrides `NOTEBOX_DIR`. Defaults to `notes` in the working directory
    /// and is created on the first write.
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Also write JSON logs to a daily rolling file in this directory.
    ///
    /// Overrides `NOTEBOX_LOG_DIR`.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose logging output on stderr.
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,

    /// Top-level subcommands. Without one, the interactive menu starts.
    #[command(subcommand)]
    pub subcommands: Option<TopLevelCommand>,
}

impl Cli {
    /// Determines whether the CLI should start the interactive menu.
    pub fn is_interactive(&self) -> bool {
        self.subcommands.is_none()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TopLevelCommand {
    /// Create a note, replacing any note with the same title.
    Create {
        /// Title of the note, also its file name.
        title: String,

        /// Content of the note. Prompted for when omitted.
        body: Option<String>,
    },

    /// List the titles of all notes.
    #[command(alias = "ls")]
    List,

    /// Print a note.
    #[command(alias = "show")]
    View {
        /// Title of the note.
        title: String,
    },

    /// Delete a note.
    #[command(alias = "rm")]
    Delete {
        /// Title of the note.
        title: String,
    },
}
