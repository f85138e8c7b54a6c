mod config;
mod store;

pub use config::Config;
pub use store::{MemoryStore, SqliteStore, Storage};

use std::path::PathBuf;

/// Returns `~/.config/serenite[-dev]/` based on SERENITE_ENV.
///
/// Set SERENITE_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SERENITE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("serenite-dev")
    } else {
        base_dir.join("serenite")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
