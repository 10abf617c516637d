use url::Url;

pub fn normalize_username(input: &str) -> String {
    input.trim().trim_start_matches('@').to_lowercase()
}

/// Turns a pasted profile link (or a bare handle) into a dataset handle.
///
/// Returns `None` for anything that does not point at an instagram.com
/// profile; callers skip those entries instead of failing the request.
pub fn extract_handle_from_profile_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_lowercase();
    let handle = if !lower.starts_with("http") {
        normalize_username(&lower.replacen("instagram.com/", "", 1))
    } else {
        let parsed = Url::parse(&lower).ok()?;
        if !parsed.host_str()?.contains("instagram.com") {
            return None;
        }
        let first = parsed.path_segments()?.find(|s| !s.is_empty())?;
        normalize_username(first)
    };

    (!handle.is_empty()).then_some(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_at_and_case() {
        assert_eq!(normalize_username("  @@SocialSleuth "), "socialsleuth");
        assert_eq!(normalize_username("@Foo"), normalize_username("foo"));
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["@Foo", " @@bar.Baz ", "", "@", "x_y", "  "] {
            let once = normalize_username(raw);
            assert_eq!(normalize_username(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn extracts_first_path_segment() {
        assert_eq!(
            extract_handle_from_profile_url("https://www.instagram.com/coastalcafe/").as_deref(),
            Some("coastalcafe")
        );
        assert_eq!(
            extract_handle_from_profile_url(" https://instagram.com//UrbanBrews/reels/?hl=en ").as_deref(),
            Some("urbanbrews")
        );
    }

    #[test]
    fn rejects_foreign_hosts_and_garbage() {
        assert_eq!(extract_handle_from_profile_url("https://www.tiktok.com/@coastalcafe"), None);
        assert_eq!(extract_handle_from_profile_url("https://instagram.com/"), None);
        assert_eq!(extract_handle_from_profile_url("http://"), None);
        assert_eq!(extract_handle_from_profile_url("   "), None);
    }

    #[test]
    fn bare_handles_are_accepted() {
        assert_eq!(extract_handle_from_profile_url("@WanderAtlas").as_deref(), Some("wanderatlas"));
        assert_eq!(
            extract_handle_from_profile_url("instagram.com/fitloopstudio").as_deref(),
            Some("fitloopstudio")
        );
        assert_eq!(extract_handle_from_profile_url("@"), None);
    }
}
