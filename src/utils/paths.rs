use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn get_brain_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".smartbrain"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let brain_dir = get_brain_dir()?;
    Ok(brain_dir.join("config.toml"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    let brain_dir = get_brain_dir()?;
    Ok(brain_dir.join("logs"))
}
