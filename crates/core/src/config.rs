//! Configuration path utilities for adjust.
//!
//! This module resolves where adjustments are read from and where last values
//! are stored, expanding shell variables like `~` in paths.

/// Default path for the adjustments definition file
const DEFAULT_CONFIG_PATH: &str = "~/.adjustments";
/// Default path for storing the last value of each adjustment
const DEFAULT_LAST_VALUES_PATH: &str = "~/.adjust/last_values.yml";

/// Shell used to run adjustment commands, as `system(3)` does
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Resolved locations used for one run of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub config_path: String,
    pub last_values_path: String,
    pub shell: String,
}

impl Config {
    /// Builds the configuration from optional overrides, falling back to the
    /// defaults for anything not given.
    ///
    /// # Examples
    ///
    /// ```
    /// use adjust_core::config::Config;
    ///
    /// let config = Config::resolve(&Some("/etc/adjustments".to_string()), &None);
    /// assert_eq!(config.config_path, "/etc/adjustments");
    /// assert!(config.last_values_path.ends_with("last_values.yml"));
    /// ```
    pub fn resolve(config_path_arg: &Option<String>, last_values_path_arg: &Option<String>) -> Self {
        Self {
            config_path: get_config_path(config_path_arg),
            last_values_path: get_last_values_path(last_values_path_arg),
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

/// Resolves the adjustments file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// `~/.adjustments`. Shell expansions like `~` are resolved.
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Resolves the last values file path.
pub fn get_last_values_path(last_values_path_arg: &Option<String>) -> String {
    let last_values_path = match last_values_path_arg {
        Some(last_values_path) => last_values_path,
        None => DEFAULT_LAST_VALUES_PATH,
    };

    shellexpand::tilde(last_values_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/adjustments".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/adjustments");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".adjustments"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let tilde_path = Some("~/my-adjustments".to_string());
        let result = get_config_path(&tilde_path);
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-adjustments"));
    }

    #[test]
    fn test_get_last_values_path_with_custom_path() {
        let custom_path = Some("/custom/last_values.yml".to_string());
        let result = get_last_values_path(&custom_path);
        assert_eq!(result, "/custom/last_values.yml");
    }

    #[test]
    fn test_get_last_values_path_with_none() {
        let result = get_last_values_path(&None);
        assert!(result.ends_with(".adjust/last_values.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_resolve_uses_default_shell() {
        let config = Config::resolve(&None, &None);
        assert_eq!(config.shell, "/bin/sh");
        assert_eq!(config.config_path, get_config_path(&None));
        assert_eq!(config.last_values_path, get_last_values_path(&None));
    }
}
