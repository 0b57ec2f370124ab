use crate::errors::{AppError, AppResult};
use crate::models::checkin::DEFAULT_TIMESTAMP_FORMAT;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_roster")]
    pub roster: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default)]
    pub show_ids: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_roster() -> String {
    Config::roster_file().to_string_lossy().to_string()
}
fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            roster: default_roster(),
            timestamp_format: default_timestamp_format(),
            show_ids: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcheckin")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcheckin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcheckin.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcheckin.sqlite")
    }

    /// Return the default location of the roster document
    pub fn roster_file() -> PathBuf {
        Self::config_dir().join("attendees.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.roster = expand_tilde(&cfg.roster).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Initialize the configuration directory and file.
    ///
    /// Returns the config that was written (or would have been, in test mode).
    pub fn init_all(
        custom_db: Option<String>,
        custom_roster: Option<String>,
        is_test: bool,
    ) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let resolve = |name: String| {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        };

        let config = Config {
            database: custom_db
                .map(resolve)
                .unwrap_or_else(Self::database_file)
                .to_string_lossy()
                .to_string(),
            roster: custom_roster
                .map(resolve)
                .unwrap_or_else(Self::roster_file)
                .to_string_lossy()
                .to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
