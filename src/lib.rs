pub mod clients { pub mod dataset; pub mod fixtures; }
pub mod config;
pub mod telemetry;
pub mod state;
pub mod error;
pub mod domain { pub mod profile; pub mod scan; }
pub mod services { pub mod export; pub mod housekeeping; pub mod normalize; pub mod rate_limit; pub mod scanner; }
pub mod web { pub mod router; pub mod handlers; pub mod utils; }

use std::sync::Arc;

use crate::clients::dataset::{ProfileSource, StaticDataset};
use crate::services::{housekeeping, rate_limit::RateLimiter};
use crate::state::AppState;

pub fn build_state(cfg: &crate::config::Config, dataset: Arc<dyn ProfileSource>) -> AppState {
    let limiter = RateLimiter::new(cfg.rate_limit_max_requests, cfg.rate_limit_window());
    AppState {
        dataset,
        limiter: Arc::new(tokio::sync::Mutex::new(limiter)),
        scan_delay: cfg.scan_delay(),
    }
}

/// Wires the bundled dataset, the limiter sweep task and the router.
/// Must be called inside a tokio runtime.
pub fn build_app(cfg: crate::config::Config) -> (axum::Router, u16) {
    let state = build_state(&cfg, Arc::new(StaticDataset::new()));
    housekeeping::start_cleanup(state.limiter.clone(), cfg.sweep_every());

    tracing::info!(
        profiles = state.dataset.profile_count(),
        max_requests = cfg.rate_limit_max_requests,
        window_secs = cfg.rate_limit_window_secs,
        "app initialized"
    );
    (crate::web::router::build_router(state), cfg.port)
}
