use std::panic;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use notebox_app::EnvironmentInfra;
use notebox_infra::{NoteboxInfra, load_dot_env};
use notebox_main::{Cli, UI};
use notebox_services::{NoteboxNoteService, init_tracing};
use tracing::{debug, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set up panic hook for better error display
    panic::set_hook(Box::new(|panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unexpected error occurred".to_string()
        };

        eprintln!("{} {message}", "ERROR:".red().bold());
        std::process::exit(1);
    }));

    if let Err(error) = run(Cli::parse()).await {
        eprintln!("{} {error:#}", "ERROR:".red().bold());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let dot_env = load_dot_env(&cwd);
    let infra = Arc::new(NoteboxInfra::new(cwd, cli.dir.clone(), cli.log_dir.clone()));
    let env = infra.get_environment();

    let _guard = init_tracing(cli.verbose, env.log_dir.clone())?;
    match dot_env {
        Ok(true) => debug!("Loaded .env"),
        Ok(false) => {}
        Err(error) => warn!(error = %format!("{error:#}"), "Ignoring unreadable .env file"),
    }
    info!(
        notes_dir = %env.notes_dir.display(),
        interactive = cli.is_interactive(),
        "Starting notebox"
    );

    let notes = Arc::new(NoteboxNoteService::new(infra.clone()));
    let mut ui = UI::new(notes, infra, std::io::stdout());
    ui.execute(cli.subcommands).await
}
