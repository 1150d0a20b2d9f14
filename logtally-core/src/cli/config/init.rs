use crate::conf::LogtallyConfig;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

pub fn init(path: PathBuf) -> Result<()> {
    write_default_config(&path)?;

    println!("✔ Wrote default config to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  logtally config check {}", path.display());
    println!("  logtally access.log");

    Ok(())
}

/// Serialize the default config to `path`, refusing to overwrite anything.
pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let contents = toml::to_string_pretty(&LogtallyConfig::default())
        .context("failed to serialize default config")?;

    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
