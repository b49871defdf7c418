//! Catalog loading and snapshot caching
//!
//! The catalog of available definitions can be slow to produce, so the
//! browser never blocks on it. [`LoadCache`] polls the loader once per cycle
//! while a load is outstanding and treats an empty or failed answer as
//! "not ready yet". There is no terminal failure state.
//!
//! When the catalog is declared static, the first successful load is kept
//! for the lifetime of the cache (or until [`LoadCache::invalidate`]).
//! Otherwise a loaded snapshot is handed out once and then dropped.

mod error;

pub use error::{CatalogError, CatalogResult};

use std::sync::Arc;

/// Snapshot and loading flag for the available catalog
#[derive(Debug)]
pub struct LoadCache<D> {
    snapshot: Option<Arc<[D]>>,
    loading: bool,
    is_static: bool,
}

impl<D> LoadCache<D> {
    /// Create an empty cache
    ///
    /// With `is_static` set, a loaded snapshot is retained and reused.
    #[must_use]
    pub const fn new(is_static: bool) -> Self {
        Self {
            snapshot: None,
            loading: false,
            is_static,
        }
    }

    /// True while a load is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// True when the catalog was declared immutable
    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// True when a snapshot is held
    #[must_use]
    pub const fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Start polling the loader, unless a static snapshot already exists
    pub fn begin_loading(&mut self) {
        if self.is_static() && self.has_snapshot() {
            return;
        }
        tracing::debug!(is_static = self.is_static, "catalog load started");
        self.loading = true;
    }

    /// Stop an outstanding load
    ///
    /// A one-shot snapshot that was loaded but never handed out is dropped
    /// too; a static snapshot is kept.
    pub fn cancel(&mut self) {
        if self.loading {
            tracing::debug!("catalog load cancelled");
        }
        self.loading = false;
        if !self.is_static() {
            self.snapshot = None;
        }
    }

    /// Drop any held snapshot so the next request reloads
    pub fn invalidate(&mut self) {
        tracing::debug!("catalog snapshot invalidated");
        self.snapshot = None;
    }

    /// Poll the loader once if a load is outstanding
    ///
    /// Returns true when this call completed the load, which is the
    /// caller's cue to schedule a single refresh.
    pub fn poll<L>(&mut self, loader: &mut L) -> bool
    where
        L: FnMut() -> CatalogResult<D> + ?Sized,
    {
        if !self.loading {
            return false;
        }
        match fetch(loader) {
            Some(catalog) => {
                tracing::debug!(len = catalog.len(), "catalog load completed");
                self.loading = false;
                self.snapshot = Some(catalog);
                true
            }
            None => false,
        }
    }

    /// Catalog to search, if one is available this cycle
    ///
    /// Returns `None` while loading; the caller falls back to owned
    /// definitions. A static snapshot is shared, a one-shot snapshot is
    /// consumed, and with no snapshot the loader is called directly. If that
    /// direct call comes back empty, loading restarts.
    pub fn catalog<L>(&mut self, loader: &mut L) -> Option<Arc<[D]>>
    where
        L: FnMut() -> CatalogResult<D> + ?Sized,
    {
        if self.loading {
            return None;
        }
        if self.is_static {
            if let Some(snapshot) = &self.snapshot {
                return Some(Arc::clone(snapshot));
            }
        } else if let Some(snapshot) = self.snapshot.take() {
            return Some(snapshot);
        }

        let fresh = fetch(loader);
        match &fresh {
            Some(catalog) if self.is_static => self.snapshot = Some(Arc::clone(catalog)),
            Some(_) => {}
            None => self.loading = true,
        }
        fresh
    }
}

fn fetch<D, L>(loader: &mut L) -> Option<Arc<[D]>>
where
    L: FnMut() -> CatalogResult<D> + ?Sized,
{
    match loader() {
        Ok(catalog) if catalog.is_empty() => {
            tracing::trace!("catalog empty, will retry");
            None
        }
        Ok(catalog) => Some(catalog.into()),
        Err(CatalogError::NotReady) => {
            tracing::trace!("catalog not ready, will retry");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog load failed, will retry");
            None
        }
    }
}
