use std::sync::Arc;

use crate::config::Config;
use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Per-session profile slot. Redis when `REDIS_URL` is set, memory otherwise.
    pub profiles: Arc<dyn ProfileStore>,
    pub config: Config,
}
