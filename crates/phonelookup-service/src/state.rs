//! Application state for the lookup service.
//!
//! This module provides the shared state structure that axum handlers use
//! to access the loaded phone directory.

use std::path::Path;
use std::sync::Arc;

use phonelookup_lib::{Error as LibError, PhoneDirectory};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to load the phone directory (missing or unreadable file).
    DirectoryLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryLoad(e) => write!(f, "failed to load phone directory: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryLoad(e) => Some(e),
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::DirectoryLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (using `Arc` internally) and shared via axum's
/// `State` extractor. The directory is fully built before the state is
/// handed to the router, so concurrent handlers only ever observe the
/// complete mapping.
#[derive(Clone)]
pub struct AppState {
    directory: Arc<PhoneDirectory>,
}

impl AppState {
    /// Load application state from the CSV data file.
    ///
    /// A missing file is fatal: startup must abort because the service
    /// cannot answer queries without data.
    pub fn load(data_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let data_path = data_path.as_ref();

        tracing::info!(path = %data_path.display(), "loading phone directory");
        let directory = PhoneDirectory::load(data_path)?;
        tracing::info!(
            record_count = directory.len(),
            "phone directory loaded successfully"
        );

        Ok(Self {
            directory: Arc::new(directory),
        })
    }

    /// Create application state from a pre-loaded directory.
    ///
    /// This is useful for testing or when loading from bundled bytes.
    pub fn from_directory(directory: PhoneDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    /// Access the loaded phone directory.
    pub fn directory(&self) -> &PhoneDirectory {
        &self.directory
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("record_count", &self.directory.len())
            .finish()
    }
}
