use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path: impl Into<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    pub board: BoardConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.board.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err("window size must be a finite number".to_string());
        }
        if self.width < 320.0 || self.height < 240.0 {
            return Err("window must be at least 320x240".to_string());
        }
        if self.width > 4096.0 || self.height > 4096.0 {
            return Err("window must not exceed 4096x4096".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub min_cell_size: f32,
    pub max_cell_size: f32,
    pub show_hover: bool,
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.min_cell_size.is_finite() || !self.max_cell_size.is_finite() {
            return Err("cell sizes must be finite numbers".to_string());
        }
        if self.min_cell_size < 20.0 {
            return Err("min_cell_size must be at least 20".to_string());
        }
        if self.max_cell_size < self.min_cell_size {
            return Err("max_cell_size must not be smaller than min_cell_size".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 640.0,
                height: 440.0,
            },
            board: BoardConfig {
                min_cell_size: 40.0,
                max_cell_size: 120.0,
                show_hover: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigSerializer, MemoryConfigProvider};

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized() {
        let config = Config::default();
        let serializer = YamlConfigSerializer;
        let content = serializer.serialize(&config).unwrap();
        let parsed: Config = serializer.deserialize(&content).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_inverted_cell_sizes_cant_be_read() {
        let content = r#"
            window:
              width: 640.0
              height: 440.0
            board:
              min_cell_size: 90.0
              max_cell_size: 60.0
              show_hover: false
        "#;
        let manager: ConfigManager<_, Config> =
            ConfigManager::new(MemoryConfigProvider::with_content(content), YamlConfigSerializer);
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_missing_section_cant_be_read() {
        let content = r#"
            window:
              width: 640.0
              height: 440.0
        "#;
        let manager: ConfigManager<_, Config> =
            ConfigManager::new(MemoryConfigProvider::with_content(content), YamlConfigSerializer);
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_nan_cell_size_cant_be_read() {
        let content = r#"
            window:
              width: 640.0
              height: 440.0
            board:
              min_cell_size: .nan
              max_cell_size: 120.0
              show_hover: true
        "#;
        let manager: ConfigManager<_, Config> =
            ConfigManager::new(MemoryConfigProvider::with_content(content), YamlConfigSerializer);
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("finite"));
    }

    #[test]
    fn test_infinite_max_cell_size_is_rejected() {
        let config = Config {
            board: BoardConfig {
                max_cell_size: f32::INFINITY,
                ..Config::default().board
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_window_size_cant_be_read() {
        let content = r#"
            window:
              width: .nan
              height: 440.0
            board:
              min_cell_size: 40.0
              max_cell_size: 120.0
              show_hover: true
        "#;
        let manager: ConfigManager<_, Config> =
            ConfigManager::new(MemoryConfigProvider::with_content(content), YamlConfigSerializer);
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_tiny_window_is_rejected() {
        let config = Config {
            window: WindowConfig {
                width: 100.0,
                height: 100.0,
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
