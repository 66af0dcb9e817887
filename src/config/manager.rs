use super::{driver::DriverConfig, evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::BlobError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Environment variables `CHROMABLOB__<SECTION>__<FIELD>` override file values.
pub const ENV_PREFIX: &str = "CHROMABLOB";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub driver: DriverConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), BlobError> {
        self.evolution.validate().map_err(|e| section_error::<EvolutionConfig>(e))?;
        self.driver.validate().map_err(|e| section_error::<DriverConfig>(e))?;
        Ok(())
    }
}

fn section_error<S: ConfigSection>(err: BlobError) -> BlobError {
    match err {
        BlobError::Configuration(msg) => {
            BlobError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, layer environment overrides on top, and validate.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BlobError> {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Toml))
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        self.replace(config)
    }

    /// Defaults with environment overrides only.
    pub fn load_from_env(&self) -> Result<(), BlobError> {
        let config: AppConfig = config::Config::builder()
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        self.replace(config)
    }

    fn replace(&self, config: AppConfig) -> Result<(), BlobError> {
        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);
        *self.write_lock()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BlobError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, BlobError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| BlobError::Configuration("Config lock poisoned".to_string()))
    }

    /// Apply `f` and validate; the previous config is restored if validation fails.
    pub fn update<F>(&self, f: F) -> Result<(), BlobError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write_lock()?;
        let previous = config.clone();
        f(&mut config);
        if let Err(e) = config.validate() {
            *config = previous;
            return Err(e);
        }
        Ok(())
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, BlobError> {
        self.config
            .write()
            .map_err(|_| BlobError::Configuration("Config lock poisoned".to_string()))
    }
}
