//! Path utilities for yt-pick
//!
//! Respects XDG Base Directory Specification

use crate::error::{Result, YtPickError};
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

const APP_NAME: &str = "yt-pick";

/// Get config directory path
/// Respects XDG_CONFIG_HOME, defaults to ~/.config/yt-pick
pub fn get_config_dir() -> String {
    let base = env::var("XDG_CONFIG_HOME")
        .unwrap_or_else(|_| {
            dirs::config_dir()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| format!("{}/.config", env::var("HOME").unwrap_or_default()))
        });

    format!("{}/{}", base, APP_NAME)
}

/// Get config file path
pub fn get_config_path() -> String {
    format!("{}/config.json", get_config_dir())
}

/// Resolve the download directory, falling back to ~/Downloads
pub fn resolve_output_dir(configured: &str) -> PathBuf {
    if !configured.is_empty() {
        return PathBuf::from(configured);
    }
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Ensure a directory exists
pub async fn ensure_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path).await?;
    Ok(())
}

/// Change into the output directory so relative names from the probe tool
/// line up with what the download tool writes. The directory is never created.
pub fn enter_output_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(YtPickError::OutputDirMissing(dir.to_path_buf()));
    }
    let dir = dir.canonicalize()?;
    println!("{}", format!("$ cd {}", dir.display()).dimmed());
    env::set_current_dir(&dir)?;
    Ok(dir)
}
