use axum::http::HeaderMap;

use crate::domain::profile::NicheInfo;

pub const ANONYMOUS_CLIENT: &str = "anon";

/// First hop of `x-forwarded-for`, or [`ANONYMOUS_CLIENT`].
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(ANONYMOUS_CLIENT)
        .to_string()
}

pub fn index_page(niches: &[NicheInfo]) -> String {
    let items: String = niches
        .iter()
        .map(|n| {
            format!(
                "<li><code>{}</code> {}: {}</li>",
                n.value,
                html_escape::encode_text(n.label),
                html_escape::encode_text(n.description)
            )
        })
        .collect();
    format!(
        r#"<!doctype html>
<html><head><meta charset="utf-8"><title>Public Instagram Comment Finder</title></head>
<body><h1>Public Instagram Comment Finder</h1>
<p>Search a cached set of public profiles for comments left by a username.</p>
<p><code>POST /scan</code> with <code>{{"username", "mode", "profileUrls" | "niche"}}</code>, or <code>POST /scan/export</code> for CSV.</p>
<h2>Niches</h2><ul>{items}</ul></body></html>"#
    )
}
