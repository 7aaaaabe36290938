use crate::data::{AppSettings, Persistable};
use anyhow::{bail, Result};
use std::path::Path;

pub fn run(force: bool) -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    run_in_dir(&dir, force)?;
    println!(
        "Wrote {}",
        dir.join(AppSettings::filename()).display()
    );
    Ok(())
}

/// Writes a default settings file into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(AppSettings::filename());
    if path.exists() && !force {
        bail!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        );
    }
    AppSettings::default().save_to(dir)?;
    log::info!("wrote default settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_in_dir_writes_defaults() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path(), false).unwrap();
        let loaded = AppSettings::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_run_in_dir_creates_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("config");
        run_in_dir(&nested, false).unwrap();
        assert!(nested.join("settings.yaml").exists());
    }

    #[test]
    fn test_run_in_dir_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("settings.yaml"), "title: Mine\n").unwrap();
        assert!(run_in_dir(tmp.path(), false).is_err());
        let loaded = AppSettings::load_from(tmp.path()).unwrap();
        assert_eq!(loaded.title, "Mine");
    }

    #[test]
    fn test_run_in_dir_force_overwrites() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("settings.yaml"), "title: Mine\n").unwrap();
        run_in_dir(tmp.path(), true).unwrap();
        let loaded = AppSettings::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }
}
