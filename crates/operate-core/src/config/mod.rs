//! Configuration management

mod env_loader;
mod file_loader;
mod logging_config;
#[allow(clippy::module_inception)] // config module in config directory is intentional
mod config;
mod validation;

pub use config::{Config, ProviderSettings, ScreenshotConfig, VoiceConfig, DEFAULT_CONFIG_FILE};
pub use env_loader::{apply_env_overrides, apply_env_overrides_from};
pub use file_loader::{default_config_path, load_config, load_from_file, save_to_file};
pub use logging_config::{LogFormat, LoggingConfig};
