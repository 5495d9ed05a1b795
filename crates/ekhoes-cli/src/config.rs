//! Configuration file handling.
//!
//! The config is a small YAML file next to the token file in the per-user
//! config directory. It is written once on first run with a default server
//! URL and loaded read-only at every start after that.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Name of the config file inside the config directory.
const CONFIG_FILE: &str = "conf.yml";

/// Server URL written on first run.
pub const DEFAULT_URL: &str = "https://websocket.ekhoes.com";

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

/// Resolve the per-user config directory.
pub fn config_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "ekhoes").context("could not determine config directory")?;
    Ok(dirs.config_dir().to_path_buf())
}

/// True if the config file already exists in the given directory.
pub fn is_initialized(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).is_file()
}

/// Write the default config on first run.
///
/// Creates the directory owner-only (0700) and the file owner-read/write
/// (0600). Refuses to overwrite an existing config.
pub fn bootstrap(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).context("failed to create config directory")?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(dir)?.permissions();
        perms.set_mode(0o700);
        fs::set_permissions(dir, perms)?;
    }

    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("config file {} already exists", path.display());
    }

    let yaml = serde_yaml::to_string(&Config::default())?;
    fs::write(&path, yaml).context("failed to write config file")?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load the config from the given directory.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    let yaml = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&yaml).context("invalid config file")?;
    debug!(path = %path.display(), url = %config.url, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().join("ekhoes");

        bootstrap(&dir).unwrap();

        assert!(is_initialized(&dir));
        let config = load(&dir).unwrap();
        assert_eq!(config.url, DEFAULT_URL);
    }

    #[test]
    fn bootstrap_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().join("ekhoes");

        bootstrap(&dir).unwrap();
        assert!(bootstrap(&dir).is_err());
    }

    #[test]
    fn load_parses_edited_url() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "url: http://localhost:8443\n").unwrap();

        let config = load(dir.path()).unwrap();
        assert_eq!(config.url, "http://localhost:8443");
    }

    #[cfg(unix)]
    #[test]
    fn bootstrap_sets_owner_only_modes() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().join("ekhoes");

        bootstrap(&dir).unwrap();

        let dir_mode = fs::metadata(&dir).unwrap().permissions().mode();
        let file_mode = fs::metadata(dir.join(CONFIG_FILE))
            .unwrap()
            .permissions()
            .mode();

        assert_eq!(dir_mode & 0o777, 0o700);
        assert_eq!(file_mode & 0o777, 0o600);
    }
}
