mod content_provider;
mod manager;
mod serializer;

pub use content_provider::{ConfigContentProvider, FileContentConfigProvider, MemoryConfigProvider};
pub use manager::ConfigManager;
pub use serializer::{ConfigSerializer, YamlConfigSerializer};

/// Range and consistency checks run before a config is accepted or written.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
