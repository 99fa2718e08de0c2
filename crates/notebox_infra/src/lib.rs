mod env;
mod fs_create_dirs;
mod fs_meta;
mod fs_read;
mod fs_read_dir;
mod fs_remove;
mod fs_write;
mod inquire;
mod notebox_infra;

pub use env::{NoteboxEnvironmentInfra, load_dot_env};
pub use inquire::NoteboxInquire;
pub use notebox_infra::*;
