use std::io;
use std::path::PathBuf;

use carousel::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("manifest {0} contains no images")]
    EmptyManifest(PathBuf),

    #[error("cell_width_px must be a positive number (got {0})")]
    InvalidCellWidth(f32),

    #[error("invalid carousel configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
