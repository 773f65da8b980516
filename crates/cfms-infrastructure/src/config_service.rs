//! Loads `config.toml`, creating it with defaults on first run.

use crate::paths::CfmsPaths;
use crate::storage::AtomicFile;
use cfms_core::Result;
use cfms_core::config::CfmsConfig;
use std::path::PathBuf;

pub struct ConfigService {
    file: AtomicFile,
}

impl ConfigService {
    /// Creates a service for the config file resolved by `paths`.
    ///
    /// # Errors
    ///
    /// Fails if the config directory cannot be determined.
    pub fn new(paths: &CfmsPaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    /// Reads the file only, writing defaults if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or invalid TOML.
    pub fn load_file(&self) -> Result<CfmsConfig> {
        match self.file.load()? {
            Some(content) => Ok(toml::from_str(&content)?),
            None => {
                let config = CfmsConfig::default();
                self.file.save(&toml::to_string_pretty(&config)?)?;
                tracing::info!(
                    "[ConfigService] Wrote default config to {}",
                    self.file.path().display()
                );
                Ok(config)
            }
        }
    }

    /// Reads the file, applies `CFMS_*` environment overrides and validates.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, invalid TOML, or an unusable configuration.
    pub fn load(&self) -> Result<CfmsConfig> {
        let mut config = self.load_file()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        tracing::debug!("[ConfigService] Using endpoint {}", config.endpoint);
        Ok(config)
    }

    /// Persists `config` after validating it.
    ///
    /// # Errors
    ///
    /// Fails on an unusable configuration or an I/O error.
    pub fn save(&self, config: &CfmsConfig) -> Result<()> {
        config.validate()?;
        self.file.save(&toml::to_string_pretty(config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfms_core::CfmsError;
    use cfms_core::config::DEFAULT_ENDPOINT;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CfmsPaths::new(Some(temp_dir.path()));
        let service = ConfigService::new(&paths).unwrap();

        let config = service.load_file().unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(paths.config_file().unwrap().exists());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let mut config = CfmsConfig::default();
        config.sap_client = "351".to_string();
        service.save(&config).unwrap();

        assert_eq!(service.load_file().unwrap().sap_client, "351");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "endpoint = [").unwrap();

        let err = ConfigService::with_path(path).load_file().unwrap_err();
        assert!(matches!(err, CfmsError::Serialization { .. }));
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let mut config = CfmsConfig::default();
        config.probe_bill = "nope".to_string();
        assert!(service.save(&config).is_err());
    }
}
