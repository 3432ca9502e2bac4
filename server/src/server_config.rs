use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_server_config.yaml";

pub fn get_config_manager(
    path: impl Into<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Directory with the browser page; the bundled `static/` directory when unset.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .map_err(|e| format!("Invalid bind_address '{}': {}", self.bind_address, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn static_dir(&self) -> PathBuf {
        self.static_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address must not be empty".to_string());
        }
        self.socket_addr()?;
        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }
        if let Some(dir) = &self.static_dir
            && dir.as_os_str().is_empty()
        {
            return Err("static_dir must not be empty when set".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: None,
        }
    }
}
