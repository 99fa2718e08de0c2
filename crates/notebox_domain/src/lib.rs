mod environment;
mod error;
mod note;

pub use environment::*;
pub use error::*;
pub use note::*;
