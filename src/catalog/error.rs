//! Catalog loader error types
//!
//! Loaders report why they could not produce the catalog this cycle. The
//! browser logs these and retries on the next cycle; they never reach the
//! caller of `render`.
//!
//! # Error Types
//!
//! - **`NotReady`**: The catalog is still being produced (logged at trace)
//! - **`Failed`**: Any other loader failure (logged at warn)
//! - **`Io`**: Reading the catalog failed (logged at warn)

use thiserror::Error;

/// Errors a catalog loader may report
///
/// None of these are fatal to the browser; they only delay the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog is still being produced
    #[error("Catalog is not ready yet")]
    NotReady,

    /// The loader failed for some other reason
    #[error("Catalog load failed: {0}")]
    Failed(String),

    /// IO error while reading the catalog
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type returned by catalog loaders
pub type CatalogResult<D> = std::result::Result<Vec<D>, CatalogError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
