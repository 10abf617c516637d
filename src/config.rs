use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_requests")]
    pub rate_limit_max_requests: u32,
    #[serde(default = "default_window_secs")]
    pub rate_limit_window_secs: u64,
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,
    #[serde(default = "default_sweep_secs")]
    pub sweep_every_secs: u64,
}
fn default_port() -> u16 { 8080 }
fn default_max_requests() -> u32 { 8 }
fn default_window_secs() -> u64 { 5 * 60 }
fn default_scan_delay_ms() -> u64 { 120 }
fn default_sweep_secs() -> u64 { 60 }

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            rate_limit_max_requests: default_max_requests(),
            rate_limit_window_secs: default_window_secs(),
            scan_delay_ms: default_scan_delay_ms(),
            sweep_every_secs: default_sweep_secs(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            port: env_or("PORT", default_port()),
            rate_limit_max_requests: env_or("RATE_LIMIT_MAX_REQUESTS", default_max_requests()),
            rate_limit_window_secs: env_or("RATE_LIMIT_WINDOW_SECS", default_window_secs()),
            scan_delay_ms: env_or("SCAN_DELAY_MS", default_scan_delay_ms()),
            sweep_every_secs: env_or("SWEEP_EVERY_SECS", default_sweep_secs()),
        })
    }

    pub fn rate_limit_window(&self) -> Duration { Duration::from_secs(self.rate_limit_window_secs) }
    pub fn scan_delay(&self) -> Duration { Duration::from_millis(self.scan_delay_ms) }
    pub fn sweep_every(&self) -> Duration { Duration::from_secs(self.sweep_every_secs.max(1)) }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
