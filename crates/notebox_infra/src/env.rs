use std::path::{Path, PathBuf};

use anyhow::Context;
use notebox_app::EnvironmentInfra;
use notebox_domain::{DEFAULT_NOTES_DIR, Environment};

const NOTES_DIR_VAR: &str = "NOTEBOX_DIR";
const LOG_DIR_VAR: &str = "NOTEBOX_LOG_DIR";

/// Loads `<cwd>/.env` into the process environment. Returns `false` when
/// there is no such file.
pub fn load_dot_env(cwd: &Path) -> anyhow::Result<bool> {
    let path = cwd.join(".env");
    match dotenvy::from_path(&path) {
        Ok(()) => Ok(true),
        Err(error) if error.not_found() => Ok(false),
        Err(error) => Err(error).with_context(|| format!("Failed to load {}", path.display())),
    }
}

/// Resolves configuration from command-line overrides, the process
/// environment (after loading `.env`), and built-in defaults, in that order.
pub struct NoteboxEnvironmentInfra {
    cwd: PathBuf,
    notes_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

impl NoteboxEnvironmentInfra {
    pub fn new(cwd: PathBuf, notes_dir: Option<PathBuf>, log_dir: Option<PathBuf>) -> Self {
        Self { cwd, notes_dir, log_dir }
    }

    fn resolve(&self, lookup: impl Fn(&str) -> Option<String>) -> Environment {
        let notes_dir = self
            .notes_dir
            .clone()
            .or_else(|| lookup(NOTES_DIR_VAR).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR));

        let log_dir = self
            .log_dir
            .clone()
            .or_else(|| lookup(LOG_DIR_VAR).filter(|v| !v.is_empty()).map(PathBuf::from))
            .map(|dir| self.cwd.join(dir));

        let env = Environment::default().notes_dir(self.cwd.join(notes_dir));
        match log_dir {
            Some(dir) => env.log_dir(dir),
            None => env,
        }
    }
}

impl EnvironmentInfra for NoteboxEnvironmentInfra {
    fn get_environment(&self) -> Environment {
        self.resolve(|key| self.get_env_var(key))
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
