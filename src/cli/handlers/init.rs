use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::{BookshelfConfig, CONFIG_FILE, RemoteSettings};
use crate::error::LibraryError;

pub fn handle_init(cwd: &Path, remote: bool) -> Result<()> {
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(LibraryError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = if remote {
        BookshelfConfig::remote(RemoteSettings::placeholder())
    } else {
        BookshelfConfig::default()
    };
    config.save(&config_path)?;

    println!(
        "{} bookshelf project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    if remote {
        println!(
            "  {} edit the sheet URLs under store.remote before serving",
            "Note:".yellow()
        );
    }

    Ok(())
}
