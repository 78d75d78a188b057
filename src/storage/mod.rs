//! Storage layer for cashflow-cli
//!
//! JSON file storage of the planning file with atomic writes and automatic
//! directory creation.

pub mod configuration;
pub mod file_io;
pub mod init;

pub use configuration::ConfigurationRepository;
pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use init::initialize_storage;

use crate::config::paths::CashflowPaths;
use crate::error::CashflowError;

/// Main storage coordinator
pub struct Storage {
    paths: CashflowPaths,
    pub configuration: ConfigurationRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: CashflowPaths) -> Result<Self, CashflowError> {
        paths.ensure_directories()?;

        Ok(Self {
            configuration: ConfigurationRepository::new(paths.configuration_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &CashflowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), CashflowError> {
        self.configuration.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), CashflowError> {
        self.configuration.save()
    }

    /// Check if a planning file exists on disk
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
