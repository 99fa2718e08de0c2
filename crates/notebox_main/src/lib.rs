mod cli;
mod menu;
mod ui;

pub use cli::{Cli, TopLevelCommand};
pub use menu::MenuItem;
pub use ui::UI;
