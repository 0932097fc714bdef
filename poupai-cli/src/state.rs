use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$POUPAI_HOME`, or `~/.poupai`
pub fn poupai_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("POUPAI_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".poupai"))
}

pub fn ensure_poupai_home() -> Result<PathBuf> {
    let dir = poupai_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
