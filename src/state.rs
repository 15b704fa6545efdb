//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: the Auth API handle and the parsed config. No
//! per-user data lives here; every request derives what it needs from its
//! own cookie and a fresh Auth API call.

use std::sync::Arc;

use crate::api::AuthApi;
use crate::config::AppConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn AuthApi>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, config: AppConfig) -> Self {
        Self { api, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
