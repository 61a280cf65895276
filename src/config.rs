use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional on-disk configuration, loaded from `bookmarkd.toml`.
///
/// Every field may be omitted; CLI flags take precedence over config
/// values, which take precedence over built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookmarkdConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("bookmarkd.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".bookmarkd").join("bookmarks.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<BookmarkdConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: BookmarkdConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &BookmarkdConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config(Some(&dir.path().join("bookmarkd.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookmarkd.toml");

        let config = BookmarkdConfig {
            database: Some("bookmarks.db".to_string()),
            port: Some(9090),
        };
        write_config(&path, &config, false).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("bookmarks.db"));
        assert_eq!(loaded.port, Some(9090));
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookmarkd.toml");

        let config = BookmarkdConfig::default();
        write_config(&path, &config, false).unwrap();
        assert!(write_config(&path, &config, false).is_err());
        assert!(write_config(&path, &config, true).is_ok());
    }
}
