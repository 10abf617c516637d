use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Upper bound on a window so `Instant + window` cannot overflow.
pub const MAX_WINDOW: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy)]
struct RateLimitEntry {
    count: u32,
    reset: Instant,
}

/// Fixed-window counter per client key. Each key's window starts at its
/// first request after the previous one expired.
pub struct RateLimiter {
    entries: HashMap<String, RateLimitEntry>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self { entries: HashMap::new(), max_requests, window: window.min(MAX_WINDOW) }
    }

    pub fn window(&self) -> Duration { self.window }

    pub fn check(&mut self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    pub fn check_at(&mut self, key: &str, now: Instant) -> bool {
        if let Some(entry) = self.entries.get_mut(key) {
            if entry.reset >= now {
                if entry.count >= self.max_requests { return false; }
                entry.count += 1;
                return true;
            }
        }
        self.entries.insert(key.to_string(), RateLimitEntry { count: 1, reset: now + self.window });
        true
    }

    /// Drops expired windows. Returns how many entries were removed.
    pub fn sweep(&mut self) -> usize {
        self.sweep_at(Instant::now())
    }

    pub fn sweep_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.reset >= now);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
