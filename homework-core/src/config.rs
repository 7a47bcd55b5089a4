//! Global homework configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::DOCUMENT_FILE;
use crate::error::{HomeworkError, HomeworkResult};

static DEFAULT_DATA_DIR: &str = "~/homework";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_true() -> bool {
    true
}

/// Configuration at ~/.config/homework/config.toml
///
/// Every key can also be set through the environment with a `HOMEWORK_`
/// prefix, e.g. `HOMEWORK_DATA_DIR=/tmp/hw`.
#[derive(Debug, Deserialize, Clone)]
pub struct HomeworkConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Ask before running a reset
    #[serde(default = "default_true")]
    pub confirm_reset: bool,
}

impl Default for HomeworkConfig {
    fn default() -> Self {
        HomeworkConfig {
            data_dir: default_data_dir(),
            confirm_reset: true,
        }
    }
}

impl HomeworkConfig {
    pub fn config_path() -> HomeworkResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HomeworkError::Config("Could not determine config directory".into()))?
            .join("homework");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template on first run.
    pub fn load() -> HomeworkResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> HomeworkResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("HOMEWORK").try_parsing(true))
            .build()
            .map_err(|e| HomeworkError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HomeworkError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// Where the homework document is stored.
    pub fn document_path(&self) -> PathBuf {
        self.data_path().join(DOCUMENT_FILE)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HomeworkResult<()> {
        let contents = format!(
            "\
# homework configuration

# Where your homework data lives:
# data_dir = \"{}\"

# Ask for confirmation before `homework reset`:
# confirm_reset = true
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HomeworkError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HomeworkError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // load_from reads HOMEWORK_* variables; tests that load hold this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn default_template_loads_as_defaults() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("homework/config.toml");
        HomeworkConfig::create_default_config(&path).unwrap();

        let config = HomeworkConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("~/homework"));
        assert!(config.confirm_reset);
    }

    #[test]
    fn reads_values_from_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/srv/hw\"\nconfirm_reset = false\n").unwrap();

        let config = HomeworkConfig::load_from(&path).unwrap();
        assert_eq!(config.document_path(), PathBuf::from("/srv/hw/homework.json"));
        assert!(!config.confirm_reset);
    }

    #[test]
    fn environment_overrides_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/srv/hw\"\nconfirm_reset = true\n").unwrap();

        unsafe {
            std::env::set_var("HOMEWORK_DATA_DIR", "/srv/2024");
            std::env::set_var("HOMEWORK_CONFIRM_RESET", "false");
        }
        let config = HomeworkConfig::load_from(&path);
        unsafe {
            std::env::remove_var("HOMEWORK_DATA_DIR");
            std::env::remove_var("HOMEWORK_CONFIRM_RESET");
        }

        let config = config.unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/2024"));
        assert!(!config.confirm_reset);
    }
}
