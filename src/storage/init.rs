//! Storage initialization
//!
//! First-run setup of the data directory and planning file.

use crate::config::paths::CashflowPaths;
use crate::error::CashflowError;
use crate::models::CashFlowConfiguration;

use super::file_io::write_json_atomic;

/// Create the data directory and, if absent, a planning file
///
/// With `sample` set the planning file is seeded with a representative
/// contractor plan instead of an empty configuration. Returns `false` when a
/// planning file already existed and was left untouched.
pub fn initialize_storage(paths: &CashflowPaths, sample: bool) -> Result<bool, CashflowError> {
    paths.ensure_directories()?;

    if paths.configuration_file().exists() {
        tracing::info!(
            path = %paths.configuration_file().display(),
            "Planning file already exists"
        );
        return Ok(false);
    }

    let configuration = if sample {
        CashFlowConfiguration::sample()
    } else {
        CashFlowConfiguration::default()
    };
    write_json_atomic(paths.configuration_file(), &configuration)?;
    tracing::info!(sample, "Created planning file");
    Ok(true)
}
