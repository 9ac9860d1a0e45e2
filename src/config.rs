use crate::error::ConfigError;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::PathBuf;

/// Maximum depth to traverse when searching for config file relative to executable
pub const MAX_DIRECTORY_TRAVERSAL_DEPTH: usize = 5;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for the filesig tool
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Default directories for `scan` when none are given on the command line
    #[serde(default)]
    pub paths: Vec<String>,
    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Creates a new Config instance by loading from the config file
    fn new() -> Result<Self, ConfigError> {
        let config_path = find_config_file()?;
        let config_str =
            std::fs::read_to_string(&config_path).map_err(ConfigError::IoError)?;

        let mut config: Config =
            toml::from_str(&config_str).map_err(ConfigError::ParseError)?;

        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirError)?;
        let home_dir_str = home_dir.to_str().ok_or_else(|| {
            ConfigError::InvalidPath("Home directory path is not valid UTF-8".into())
        })?;

        // Replace {USER_HOME} in all paths
        config.paths = config
            .paths
            .iter()
            .map(|path| path.replace("{USER_HOME}", home_dir_str))
            .collect();

        config.validate()?;
        config.validate_paths();

        Ok(config)
    }

    /// Validates the configuration for logical constraints
    fn validate(&self) -> Result<(), ConfigError> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "Invalid log level '{}'. Must be one of: {:?}",
                self.log_level, valid_log_levels
            )));
        }
        Ok(())
    }

    /// Warns about configured scan paths that do not exist or are not
    /// directories. Not fatal: paths may appear later, and most commands
    /// never touch them.
    fn validate_paths(&self) {
        for path in &self.paths {
            let path_buf = PathBuf::from(path);
            if !path_buf.exists() {
                eprintln!("Warning: Path does not exist: {}", path);
            } else if !path_buf.is_dir() {
                eprintln!("Warning: Path is not a directory: {}", path);
            }
        }
    }
}

/// Finds the configuration file using the search strategy:
/// 1. Environment variable FILESIG_CONFIG
/// 2. User config directory (primary location for deployed installs)
/// 3. Relative to executable (for development/portable use)
/// 4. Creates default config in the user config directory if none found
fn find_config_file() -> Result<PathBuf, ConfigError> {
    // First check environment variable
    if let Ok(config_path) = std::env::var("FILESIG_CONFIG") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    // Check the user config directory
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::InvalidPath("Could not get config directory".into()))?;
    let app_config_dir = config_dir.join("filesig");
    let user_config_path = app_config_dir.join("config.toml");

    if user_config_path.exists() {
        return Ok(user_config_path);
    }

    // Fall back to searching relative to the executable
    let mut dir = std::env::current_exe().map_err(ConfigError::IoError)?;
    dir.pop(); // Remove the executable name to get the directory

    for _ in 0..MAX_DIRECTORY_TRAVERSAL_DEPTH {
        let config_path = dir.join("config.toml");
        if config_path.exists() {
            return Ok(config_path);
        }

        if !dir.pop() {
            break;
        }
    }

    // If no config file found, create one in the user config directory
    std::fs::create_dir_all(&app_config_dir).map_err(ConfigError::IoError)?;
    std::fs::write(&user_config_path, default_config_contents())
        .map_err(ConfigError::IoError)?;

    Ok(user_config_path)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_config_contents() -> String {
    format!(
        r#"# config.toml

# Default directories for `filesig scan` when none are given on the
# command line. Use {{USER_HOME}} as a shortcut to your user folder.
paths = []

# Logging configuration
# Options: error, warn, info, debug, trace
log_level = "{}"
"#,
        DEFAULT_LOG_LEVEL
    )
}

/// Global configuration instance loaded lazily
pub static CONFIG: Lazy<Result<Config, ConfigError>> = Lazy::new(Config::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.paths.is_empty());
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_explicit_values_parse() {
        let config: Config = toml::from_str(
            r#"
paths = ["/srv/uploads", "/tmp/incoming"]
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.paths.len(), 2);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config: Config = toml::from_str(r#"log_level = "loud""#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&default_config_contents()).unwrap();
        assert!(config.validate().is_ok());
    }
}
