use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Default directory, relative to the working directory, that holds notes.
pub const DEFAULT_NOTES_DIR: &str = "notes";

/// Suffix every note file carries on disk.
pub const NOTE_EXTENSION: &str = "txt";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
pub struct Environment {
    /// Directory that exclusively owns the note files.
    pub notes_dir: PathBuf,
    /// Optional directory for JSON log files.
    pub log_dir: Option<PathBuf>,
    /// Extension of note files, without the leading dot.
    pub extension: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            notes_dir: PathBuf::from(DEFAULT_NOTES_DIR),
            log_dir: None,
            extension: NOTE_EXTENSION.to_string(),
        }
    }
}

impl Environment {
    pub fn note_path(&self, title: &crate::Title) -> PathBuf {
        self.notes_dir.join(title.file_name(&self.extension))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Title;

    #[test]
    fn test_note_path() {
        let fixture = Environment::default().notes_dir("/tmp/store");
        let actual = fixture.note_path(&Title::new("Groceries").unwrap());
        let expected = PathBuf::from("/tmp/store/Groceries.txt");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_log_dir_setter_strips_option() {
        let actual = Environment::default().log_dir("/var/log/notebox");
        assert_eq!(actual.log_dir, Some(PathBuf::from("/var/log/notebox")));
    }
}
