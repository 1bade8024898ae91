use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the phone lookup library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Data file could not be located at the resolved path. Fatal: the
    /// service cannot answer queries without a loaded directory.
    #[error("phone number data file not found at {path}")]
    DataFileNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for reader-level CSV failures. Individual malformed rows
    /// are skipped during load and never surface here.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_not_found_display_includes_path() {
        let err = Error::DataFileNotFound {
            path: PathBuf::from("/data/phone_numbers.csv"),
        };
        assert!(err.to_string().contains("/data/phone_numbers.csv"));
        assert!(err.to_string().contains("not found"));
    }
}
