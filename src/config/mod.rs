pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "doctorbase")]
#[command(about = "Patient and appointment records for a single practice")]
pub struct CliConfig {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = toml_config::DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Use this doctor base file instead of the configured one
    #[arg(long)]
    pub data_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Folds command-line overrides into the loaded TOML configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(data_file) = &self.data_file {
            config.storage.doctor_base_file_path = Some(data_file.clone());
        }
        if self.verbose {
            config.logging.level = "debug".to_string();
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_cli_defaults() {
        let cli = CliConfig::parse_from(["doctorbase"]);
        assert_eq!(cli.config, toml_config::DEFAULT_CONFIG_FILE);
        assert!(cli.data_file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = CliConfig::parse_from(["doctorbase", "--data-file", "other.json", "-v"]);
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);

        assert_eq!(config.doctor_base_file_path(), Some("other.json"));
        assert_eq!(config.log_level(), "debug");
    }
}
