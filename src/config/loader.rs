//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BootstrapConfig;
use super::secret::secret_string;
use crate::domain::errors::BootstrapError;
use crate::domain::ids::DatabaseId;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "BOOTSTRAP";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BootstrapConfig
/// 4. Applies environment variable overrides (BOOTSTRAP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a `Configuration` error if the file is missing or unreadable, a
/// referenced variable is unset, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use cosmos_bootstrap::config::load_config;
///
/// let config = load_config("bootstrap.toml").expect("Failed to load config");
/// println!("database: {}", config.cosmos.database_id);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BootstrapConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BootstrapError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BootstrapError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text, applying substitution, overrides and validation
pub fn parse_config(contents: &str) -> Result<BootstrapConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: BootstrapConfig = toml::from_str(&contents)
        .map_err(|e| BootstrapError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        BootstrapError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BootstrapError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(BootstrapError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(section: &str, key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{section}_{key}")).ok()
}

/// Applies environment variable overrides using the BOOTSTRAP_* prefix
///
/// Environment variables follow the pattern: BOOTSTRAP_<SECTION>_<KEY>
/// For example: BOOTSTRAP_COSMOS_DATABASE_ID, BOOTSTRAP_APPLICATION_LOG_LEVEL
fn apply_env_overrides(config: &mut BootstrapConfig) -> Result<()> {
    if let Some(val) = env_override("APPLICATION", "LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("COSMOS", "DATABASE_ID") {
        config.cosmos.database_id = DatabaseId::new(val).map_err(|e| {
            BootstrapError::Configuration(format!("{ENV_PREFIX}_COSMOS_DATABASE_ID: {e}"))
        })?;
    }
    if let Some(val) = env_override("COSMOS", "ACCOUNT_URL") {
        config.cosmos.account_url = val;
    }
    if let Some(val) = env_override("COSMOS", "AUTH_KEY") {
        config.cosmos.auth_key = secret_string(val);
    }

    if let Some(val) = env_override("LOGGING", "LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
