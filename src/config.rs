//! Configuration for itemql
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{ItemError, Result};

/// Main configuration for an itemql instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// The JSON file holding the whole collection
    pub data_file: PathBuf,

    /// Write an empty collection when the data file does not exist yet
    pub create_if_missing: bool,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Path of the single query endpoint
    pub endpoint: String,

    /// Largest accepted query document (bytes)
    pub max_document_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("dummyFile.json"),
            create_if_missing: true,
            listen_addr: "127.0.0.1:8080".to_string(),
            endpoint: "/Item".to_string(),
            max_document_bytes: 64 * 1024, // 64 KB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the settings that would otherwise fail late
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ItemError::Config("data file path is empty".to_string()));
        }
        if !self.endpoint.starts_with('/') {
            return Err(ItemError::Config(format!(
                "endpoint must start with '/': {:?}",
                self.endpoint
            )));
        }
        if self.max_document_bytes == 0 {
            return Err(ItemError::Config(
                "max_document_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Create the data file on open when it is missing
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.config.create_if_missing = create;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the endpoint path
    pub fn endpoint(mut self, path: impl Into<String>) -> Self {
        self.config.endpoint = path.into();
        self
    }

    /// Set the maximum query document size (in bytes)
    pub fn max_document_bytes(mut self, bytes: usize) -> Self {
        self.config.max_document_bytes = bytes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
