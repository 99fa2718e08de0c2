use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid note title '{title}': {reason}")]
    InvalidTitle { title: String, reason: TitleViolation },
}

/// Why a string cannot be used as a note title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TitleViolation {
    #[display("title is empty")]
    Empty,
    #[display("title contains a path separator")]
    PathSeparator,
    #[display("title contains a NUL byte")]
    NulByte,
    #[display("title refers to a directory")]
    Reserved,
}

pub type Result<T> = std::result::Result<T, Error>;
