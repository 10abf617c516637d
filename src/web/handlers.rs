use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use tracing::{info, warn};

use crate::domain::profile::NicheInfo;
use crate::domain::scan::{ScanPayload, ScanRequest, ScanResponse};
use crate::error::{AppError, Result};
use crate::services::{export, scanner};
use crate::state::AppState;
use crate::web::utils::{client_key, index_page};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(index_page(state.dataset.list_niches()))
}

pub async fn health() -> &'static str { "ok" }

pub async fn niches(State(state): State<AppState>) -> Json<Vec<NicheInfo>> {
    Json(state.dataset.list_niches().to_vec())
}

pub async fn scan(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Response> {
    let response = run_scan(&state, &headers, &body).await?;
    Ok((StatusCode::OK, [(header::CACHE_CONTROL, "no-store")], Json(response)).into_response())
}

pub async fn scan_export(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Response> {
    let response = run_scan(&state, &headers, &body).await?;
    let csv = export::results_to_csv(&response.results);
    let disposition = format!("attachment; filename=\"{}\"", export::export_filename(&response.summary.username));
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        csv,
    )
        .into_response())
}

async fn run_scan(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<ScanResponse> {
    let client = client_key(headers);

    {
        let mut limiter = state.limiter.lock().await;
        if !limiter.check(&client) {
            warn!(%client, "scan rate limit exceeded");
            return Err(AppError::RateLimited { retry_after_secs: limiter.window().as_secs() });
        }
    }

    let request = ScanRequest::try_from(ScanPayload::from_slice(body)?)?;
    let response = scanner::execute(state.dataset.as_ref(), &request, state.scan_delay).await;

    let summary = &response.summary;
    info!(
        %client,
        mode = ?summary.mode,
        profiles = summary.scanned_profiles,
        posts = summary.scanned_posts,
        matches = summary.total_matches,
        skipped = summary.skipped_targets.len(),
        duration_ms = summary.duration_ms,
        "scan completed"
    );
    Ok(response)
}
