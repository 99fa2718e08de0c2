mod log;
mod note_store;

#[cfg(test)]
pub mod test_fixtures;

pub use log::*;
pub use note_store::*;
