//! Shared application state for the activities API.
//!
//! [`AppState`] owns the [`ActivityDirectory`] behind a
//! [`RwLock`](tokio::sync::RwLock). Listing takes the read lock; a signup
//! holds the write lock across its checks and the append, so concurrent
//! signups can never overfill a roster or double-book an email.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mergington_directory::ActivityDirectory;
use tokio::sync::RwLock;

/// Directory the landing page is served from when none is configured.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. Each test
/// builds its own instance, so no state leaks between tests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The activity directory.
    pub directory: Arc<RwLock<ActivityDirectory>>,
    /// Filesystem directory mounted under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create application state around `directory`, serving static files
    /// from [`DEFAULT_STATIC_DIR`].
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Serve static files from `dir` instead of the default.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.static_dir = dir.as_ref().to_path_buf();
        self
    }
}
