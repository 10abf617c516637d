use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::info;

use crate::services::rate_limit::RateLimiter;

/// Periodically drops expired rate-limit windows so the map stays bounded
/// by the number of clients active within one window.
pub fn start_cleanup(limiter: Arc<Mutex<RateLimiter>>, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            sleep(every).await;
            sweep_limiter(&limiter).await;
        }
    })
}

pub(crate) async fn sweep_limiter(limiter: &Mutex<RateLimiter>) -> usize {
    let mut guard = limiter.lock().await;
    let removed = guard.sweep();
    if removed > 0 {
        info!(removed, remaining = guard.len(), "swept rate-limit entries");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sweep_reports_removed_entries() {
        let limiter = Mutex::new(RateLimiter::new(8, Duration::ZERO));
        {
            let mut guard = limiter.lock().await;
            guard.check("a");
            guard.check("b");
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(sweep_limiter(&limiter).await, 2);
        assert!(limiter.lock().await.is_empty());
    }
}
