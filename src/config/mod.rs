mod schema;

pub use schema::{Config, HistoryConfig, SiteConfig, DEFAULT_CLICK_LIMIT, DEFAULT_QUIZ_LIMIT};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the config directory path (~/.config/career-compass/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("career-compass"))
}

/// Get the default config file path (~/.config/career-compass/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory at {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/career-compass/config.yaml), and a missing default file
///   yields the default configuration.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        debug!("No config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let path = env::temp_dir().join("career_compass_test_missing_config.yaml");
        let _ = fs::remove_file(&path);
        let result = load_config(Some(path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = env::temp_dir().join("career_compass_test_config.yaml");
        fs::write(&path, "quiz:\n  confirm_threshold: 0.4\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.quiz_threshold(), 0.4);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_yaml_errors() {
        let path = env::temp_dir().join("career_compass_test_bad_config.yaml");
        fs::write(&path, "quiz: [unclosed\n").unwrap();

        let result = load_config(Some(path.clone()));
        assert!(result.is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = env::temp_dir().join("career_compass_test_nested_dir");
        let _ = fs::remove_dir_all(&dir);
        let file = dir.join("inner").join("history.json");

        ensure_parent_dir(&file).unwrap();
        assert!(dir.join("inner").is_dir());

        let _ = fs::remove_dir_all(&dir);
    }
}
