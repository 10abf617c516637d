use crate::clients::dataset::ProfileSource;
use crate::services::rate_limit::RateLimiter;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<dyn ProfileSource>,
    pub limiter: Arc<Mutex<RateLimiter>>,
    pub scan_delay: Duration,
}
