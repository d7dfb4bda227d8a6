use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$RECEIPTWISE_HOME`, else `~/.receiptwise`
pub fn receiptwise_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("RECEIPTWISE_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".receiptwise"))
}

pub fn ensure_receiptwise_home() -> Result<PathBuf> {
    let dir = receiptwise_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
