//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable server config and the myth word pools; there is no
//! mutable state, so handlers never lock.

use std::sync::Arc;

use crate::config::Config;
use crate::services::myth::MythBook;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub myths: Arc<MythBook>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_myths(config, MythBook::default())
    }

    #[must_use]
    pub fn with_myths(config: Config, myths: MythBook) -> Self {
        Self { config: Arc::new(config), myths: Arc::new(myths) }
    }
}
