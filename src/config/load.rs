use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then lets environment
/// variables (prefix `M2__`) override it, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("M2")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeline.entry_count == 0 {
            return Err("timeline.entry_count must be >= 1".to_string());
        }
        if self.timeline.entry_interval_minutes == 0 {
            return Err("timeline.entry_interval_minutes must be >= 1".to_string());
        }
        if self.timeline.refresh_after_minutes == 0 {
            return Err("timeline.refresh_after_minutes must be >= 1".to_string());
        }
        if self.deep_link.scheme.trim().is_empty() {
            return Err("deep_link.scheme must not be empty".to_string());
        }
        if self.shared.lovely_key == self.shared.random_key {
            return Err("shared.lovely_key and shared.random_key must differ".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `M2_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("M2_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/m2-widgets/config.toml`
/// or `~/.config/m2-widgets/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("m2-widgets").join("config.toml"))
}
