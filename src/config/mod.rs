use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Which session store backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Remote,
    Memory,
}

/// Connection details for the remote sheet service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub url: String,
    #[serde(default = "default_sheet")]
    pub sheet: String,
    pub api_key: String,
}

/// Owner credentials for the login gate. When absent the gate is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub owner_user: String,
    pub owner_pass: String,
}

/// Form defaults applied when `add` / `timer log` flags are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_project")]
    pub project: String,
    #[serde(default = "default_task_type")]
    pub task_type: String,
    #[serde(default = "default_focus")]
    pub focus_rating: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    pub database: String,
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    #[serde(default = "Defaults::default")]
    pub defaults: Defaults,
}

fn default_sheet() -> String {
    "sessions".to_string()
}
fn default_project() -> String {
    "Personal".to_string()
}
fn default_task_type() -> String {
    "Coding".to_string()
}
fn default_focus() -> i64 {
    3
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project: default_project(),
            task_type: default_task_type(),
            focus_rating: default_focus(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Sqlite,
            database: Self::database_file().to_string_lossy().to_string(),
            remote: None,
            auth: None,
            defaults: Defaults::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("focuslog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".focuslog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("focuslog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("focuslog.sqlite")
    }

    /// Return the full path of the persisted timer state
    pub fn timer_file() -> PathBuf {
        Self::config_dir().join("timer.yml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("malformed config file: {e}")))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
