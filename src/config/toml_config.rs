use crate::core::{ConfigProvider, DoctorBaseError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate, LOG_LEVELS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "doctorbase.toml";
pub const DEFAULT_USER_PREFS_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prefs_file_path: Option<String>,
    /// Takes precedence over the path remembered in the user prefs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_base_file_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                user_prefs_file_path: Some(DEFAULT_USER_PREFS_FILE.to_string()),
                doctor_base_file_path: None,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DoctorBaseError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DoctorBaseError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `path`, falling back to defaults when the file is missing or
    /// unusable. A missing file is created with the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            return match Self::from_file(path).and_then(|c| c.validate().map(|_| c)) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        "Config file at {} is not in the correct format, using defaults: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            };
        }

        tracing::info!("Config file {} not found, using defaults", path.display());
        let config = Self::default();
        if let Err(e) = config.save(path) {
            tracing::warn!("Failed to save config file {}: {}", path.display(), e);
        }
        config
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| DoctorBaseError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DoctorBaseError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let prefs_path = validation::validate_required_field(
            "storage.user_prefs_file_path",
            &self.storage.user_prefs_file_path,
        )?;
        validation::validate_path("storage.user_prefs_file_path", prefs_path)?;
        validation::validate_file_extension("storage.user_prefs_file_path", prefs_path, &["json"])?;

        if let Some(path) = &self.storage.doctor_base_file_path {
            validation::validate_path("storage.doctor_base_file_path", path)?;
            validation::validate_file_extension("storage.doctor_base_file_path", path, &["json"])?;
        }

        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        Ok(())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format
    }
}

impl ConfigProvider for AppConfig {
    fn user_prefs_file_path(&self) -> &str {
        self.storage
            .user_prefs_file_path
            .as_deref()
            .unwrap_or(DEFAULT_USER_PREFS_FILE)
    }

    fn doctor_base_file_path(&self) -> Option<&str> {
        self.storage.doctor_base_file_path.as_deref()
    }

    fn log_level(&self) -> &str {
        &self.logging.level
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
