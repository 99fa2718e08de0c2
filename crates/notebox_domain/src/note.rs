use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, TitleViolation};

/// The identifier of a note, also its filename stem.
///
/// A title is the user input taken verbatim and is guaranteed to be safe to
/// join onto the store directory: it is not blank, is not `.` or `..`, and
/// holds no path separators or NUL bytes. Case and whitespace are kept, so
/// `Todo`, `todo` and ` Todo` are different notes.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn new(title: impl AsRef<str>) -> crate::Result<Self> {
        let raw = title.as_ref();

        let violation = if raw.trim().is_empty() {
            Some(TitleViolation::Empty)
        } else if raw.contains(['/', '\\']) {
            Some(TitleViolation::PathSeparator)
        } else if raw.contains('\0') {
            Some(TitleViolation::NulByte)
        } else if raw == "." || raw == ".." {
            Some(TitleViolation::Reserved)
        } else {
            None
        };

        match violation {
            Some(reason) => Err(Error::InvalidTitle { title: raw.to_string(), reason }),
            None => Ok(Self(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename of the note on disk, e.g. `Groceries.txt`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Title {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Title {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

/// A titled block of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: Title,
    pub body: String,
}

impl Note {
    pub fn new(title: Title, body: impl Into<String>) -> Self {
        Self { title, body: body.into() }
    }
}
