//! File-based configuration loading

use super::config::{Config, DEFAULT_CONFIG_FILE};
use super::env_loader::apply_env_overrides;
use crate::error::{OperateError, OperateResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Config path used when none is given: `./operate_config.json` if present,
/// otherwise `<config dir>/operate/config.json`.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join("operate").join("config.json"))
        .unwrap_or(local)
}

/// Load the file at `path` (or the default location) and apply environment overrides
pub fn load_config(path: Option<&Path>) -> OperateResult<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    let mut config = load_from_file(&path)?;
    apply_env_overrides(&mut config)?;
    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> OperateResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        OperateError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            OperateError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            OperateError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            OperateError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

/// Write a configuration file as pretty JSON, creating parent directories
pub fn save_to_file(config: &Config, path: &Path) -> OperateResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| OperateError::io_with_path(e.to_string(), parent.display().to_string()))?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)
        .map_err(|e| OperateError::io_with_path(e.to_string(), path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Provider;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.json");
        let config_json = r#"{
            "providers": {
                "openai": { "api_key": "test_key" }
            },
            "max_loops": 5,
            "settle_delay_ms": 250,
            "logging": { "level": "info", "format": "json" }
        }"#;
        fs::write(&config_path, config_json).unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.max_loops, 5);
        assert_eq!(config.settle_delay_ms, 250);
        assert_eq!(config.api_key(Provider::OpenAi).as_deref(), Some("test_key"));
        assert_eq!(config.logging.level, "info");
        // unspecified fields keep their defaults
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");
        fs::write(
            &config_path,
            "max_loops = 3\n\n[voice]\ncommand = [\"whisper-listen\", \"--once\"]\n",
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.max_loops, 3);
        assert_eq!(
            config.voice.command,
            Some(vec!["whisper-listen".to_string(), "--once".to_string()])
        );
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.yaml");
        fs::write(&config_path, "providers:\n  ollama:\n    base_url: http://box:11434/v1\n").unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.base_url(Provider::Ollama), "http://box:11434/v1");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON config"));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.json");
        let mut config = Config::default();
        config.max_loops = 7;

        save_to_file(&config, &config_path).unwrap();
        assert_eq!(load_from_file(&config_path).unwrap().max_loops, 7);
    }
}
