use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::domain::profile::{Niche, PostType};
use crate::error::{AppError, Result};
use crate::services::normalize::{extract_handle_from_profile_url, normalize_username};

pub const MAX_PROFILES_PER_REQUEST: usize = 10;
pub const SKIPPED_REASON: &str = "This profile is outside the currently cached dataset.";
pub const EMPTY_SCAN_MESSAGE: &str =
    "No matching profiles were available within the cached dataset. Try a different niche or target.";
pub const DISCLAIMER: &str = "Results are based on a limited cache of publicly observed profiles. \
This tool does not access private Instagram data.";

// Matched against the already lowercased name; ASCII only.
static USERNAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._]{2,30}$").expect("username pattern compiles")
});

/// Body of `POST /scan` as sent by the browser. Every field is optional
/// and loosely typed; [`ScanRequest::try_from`] does the real checking.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanPayload {
    #[serde(default)]
    pub username: Value,
    #[serde(default)]
    pub mode: Value,
    #[serde(default)]
    pub profile_urls: Value,
    #[serde(default)]
    pub niche: Value,
}

impl ScanPayload {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|_| AppError::MalformedBody)?;
        if !value.is_object() {
            return Err(AppError::MalformedBody);
        }
        serde_json::from_value(value).map_err(|_| AppError::MalformedBody)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    Targeted,
    Niche,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRequest {
    Targeted { username: String, handles: Vec<String> },
    Niche { username: String, niche: Niche },
}

impl ScanRequest {
    pub fn username(&self) -> &str {
        match self {
            ScanRequest::Targeted { username, .. } | ScanRequest::Niche { username, .. } => username,
        }
    }

    pub fn mode(&self) -> ScanMode {
        match self {
            ScanRequest::Targeted { .. } => ScanMode::Targeted,
            ScanRequest::Niche { .. } => ScanMode::Niche,
        }
    }

    pub fn niche(&self) -> Option<Niche> {
        match self {
            ScanRequest::Niche { niche, .. } => Some(*niche),
            ScanRequest::Targeted { .. } => None,
        }
    }
}

impl TryFrom<ScanPayload> for ScanRequest {
    type Error = AppError;

    fn try_from(payload: ScanPayload) -> Result<Self> {
        let username = validate_username(&payload.username).ok_or(AppError::InvalidUsername)?;

        if payload.mode.as_str() == Some("niche") {
            let niche = payload
                .niche
                .as_str()
                .and_then(|n| n.trim().to_lowercase().parse::<Niche>().ok())
                .ok_or(AppError::UnknownNiche)?;
            return Ok(ScanRequest::Niche { username, niche });
        }

        let urls = profile_urls(&payload.profile_urls);
        if urls.is_empty() {
            return Err(AppError::NoProfileUrls);
        }
        if urls.len() > MAX_PROFILES_PER_REQUEST {
            return Err(AppError::TooManyProfileUrls);
        }

        let mut handles: Vec<String> = Vec::with_capacity(urls.len());
        for handle in urls.iter().filter_map(|u| extract_handle_from_profile_url(u)) {
            if !handles.contains(&handle) {
                handles.push(handle);
            }
        }
        if handles.is_empty() {
            return Err(AppError::NoResolvableProfiles);
        }

        Ok(ScanRequest::Targeted { username, handles })
    }
}

fn validate_username(raw: &Value) -> Option<String> {
    let normalized = normalize_username(raw.as_str()?);
    USERNAME_RE.is_match(&normalized).then_some(normalized)
}

fn profile_urls(raw: &Value) -> Vec<&str> {
    let Some(items) = raw.as_array() else { return Vec::new() };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub id: String,
    pub profile_handle: String,
    pub profile_url: String,
    pub profile_display_name: String,
    pub post_url: String,
    pub thumbnail_url: String,
    pub post_type: PostType,
    #[serde(with = "time::serde::rfc3339")]
    pub posted_at: OffsetDateTime,
    pub comment_text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub comment_timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedTarget {
    pub provided: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedProfileLog {
    pub handle: String,
    pub profile_url: String,
    pub display_name: String,
    pub posts_checked: usize,
    pub matches_found: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub username: String,
    pub mode: ScanMode,
    pub niche: Option<Niche>,
    pub total_matches: usize,
    pub scanned_profiles: usize,
    pub scanned_posts: usize,
    pub duration_ms: u64,
    pub dataset_profiles: usize,
    pub skipped_targets: Vec<SkippedTarget>,
    pub scanned_profiles_log: Vec<ScannedProfileLog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub results: Vec<ScanResult>,
    pub summary: ScanSummary,
    pub disclaimer: &'static str,
}
