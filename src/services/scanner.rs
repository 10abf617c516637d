use std::time::{Duration, Instant};

use time::OffsetDateTime;
use tokio::time::sleep;
use tracing::debug;

use crate::clients::dataset::ProfileSource;
use crate::domain::profile::Profile;
use crate::domain::scan::{
    ScanRequest, ScanResponse, ScanResult, ScanSummary, ScannedProfileLog, SkippedTarget,
    DISCLAIMER, EMPTY_SCAN_MESSAGE, MAX_PROFILES_PER_REQUEST, SKIPPED_REASON,
};
use crate::services::normalize::normalize_username;

pub struct Resolution<'a> {
    pub profiles: Vec<&'a Profile>,
    pub skipped: Vec<SkippedTarget>,
}

/// Picks the profiles a request will scan, capped at
/// [`MAX_PROFILES_PER_REQUEST`] in resolution order.
pub fn resolve<'a>(source: &'a dyn ProfileSource, request: &ScanRequest) -> Resolution<'a> {
    let mut skipped = Vec::new();
    let mut profiles: Vec<&'a Profile> = match request {
        ScanRequest::Targeted { handles, .. } => handles
            .iter()
            .filter_map(|handle| {
                let found = source.find_profile_by_handle(handle);
                if found.is_none() {
                    debug!(%handle, "target not in cached dataset");
                    skipped.push(SkippedTarget { provided: handle.clone(), reason: SKIPPED_REASON.into() });
                }
                found
            })
            .collect(),
        ScanRequest::Niche { niche, .. } => source.list_profiles_by_niche(*niche),
    };
    profiles.truncate(MAX_PROFILES_PER_REQUEST);
    Resolution { profiles, skipped }
}

pub struct ScanOutcome {
    pub results: Vec<ScanResult>,
    pub scanned_posts: usize,
    pub log: Vec<ScannedProfileLog>,
    pub duration: Duration,
}

/// Walks every post and comment of `profiles` in order, one profile at a
/// time, sleeping `delay` before each profile. `username` must be normalized.
pub async fn scan_profiles(profiles: &[&Profile], username: &str, delay: Duration) -> ScanOutcome {
    let started = Instant::now();
    let mut results: Vec<ScanResult> = Vec::new();
    let mut scanned_posts = 0;
    let mut log = Vec::with_capacity(profiles.len());

    for profile in profiles {
        if !delay.is_zero() {
            sleep(delay).await;
        }
        let mut found = 0;

        for post in &profile.recent_posts {
            scanned_posts += 1;
            for comment in &post.comments {
                if normalize_username(&comment.username) != username {
                    continue;
                }
                found += 1;
                results.push(ScanResult {
                    id: format!("{}_{}_{}", profile.handle, post.id, results.len()),
                    profile_handle: profile.handle.clone(),
                    profile_url: profile.profile_url.clone(),
                    profile_display_name: profile.display_name.clone(),
                    post_url: post.post_url.clone(),
                    thumbnail_url: post.thumbnail_url.clone(),
                    post_type: post.kind,
                    posted_at: post.posted_at,
                    comment_text: comment.text.clone(),
                    comment_timestamp: comment.commented_at,
                });
            }
        }

        log.push(ScannedProfileLog {
            handle: profile.handle.clone(),
            profile_url: profile.profile_url.clone(),
            display_name: profile.display_name.clone(),
            posts_checked: profile.recent_posts.len(),
            matches_found: found,
        });
    }

    ScanOutcome { results, scanned_posts, log, duration: started.elapsed() }
}

/// Resolves, scans and assembles the response for an already validated request.
pub async fn execute(source: &dyn ProfileSource, request: &ScanRequest, delay: Duration) -> ScanResponse {
    let Resolution { profiles, skipped } = resolve(source, request);

    let (outcome, message) = if profiles.is_empty() {
        let empty = ScanOutcome { results: Vec::new(), scanned_posts: 0, log: Vec::new(), duration: Duration::ZERO };
        (empty, Some(EMPTY_SCAN_MESSAGE.to_string()))
    } else {
        (scan_profiles(&profiles, request.username(), delay).await, None)
    };

    ScanResponse {
        summary: ScanSummary {
            username: request.username().to_string(),
            mode: request.mode(),
            niche: request.niche(),
            total_matches: outcome.results.len(),
            scanned_profiles: outcome.log.len(),
            scanned_posts: outcome.scanned_posts,
            duration_ms: outcome.duration.as_millis() as u64,
            dataset_profiles: source.profile_count(),
            skipped_targets: skipped,
            scanned_profiles_log: outcome.log,
            message,
            generated_at: OffsetDateTime::now_utc(),
        },
        results: outcome.results,
        disclaimer: DISCLAIMER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::dataset::StaticDataset;
    use crate::domain::profile::{Comment, Niche, Post, PostType};
    use crate::domain::scan::ScanMode;
    use time::macros::datetime;

    fn targeted(username: &str, handles: &[&str]) -> ScanRequest {
        ScanRequest::Targeted {
            username: username.into(),
            handles: handles.iter().map(|h| h.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn coastalcafe_has_one_socialsleuth_comment() {
        let ds = StaticDataset::new();
        let resp = execute(&ds, &targeted("socialsleuth", &["coastalcafe"]), Duration::ZERO).await;

        assert_eq!(resp.summary.total_matches, 1);
        assert_eq!(resp.summary.scanned_posts, 2);
        assert_eq!(resp.summary.scanned_profiles, 1);
        assert_eq!(resp.summary.dataset_profiles, 7);
        assert!(resp.summary.message.is_none());

        let hit = &resp.results[0];
        assert_eq!(hit.id, "coastalcafe_coastalcafe_2_0");
        assert_eq!(hit.comment_text, "Great breakdown on grind size changes!");
        assert_eq!(resp.summary.scanned_profiles_log[0].matches_found, 1);
        assert_eq!(resp.summary.scanned_profiles_log[0].posts_checked, 2);
    }

    #[tokio::test]
    async fn niche_scan_covers_tagged_profiles_only() {
        let ds = StaticDataset::new();
        for username in ["socialsleuth", "nobody_here"] {
            let req = ScanRequest::Niche { username: username.into(), niche: Niche::Cafes };
            let resp = execute(&ds, &req, Duration::ZERO).await;
            assert_eq!(resp.summary.scanned_profiles, 2);
            assert_eq!(resp.summary.scanned_posts, 4);
            assert_eq!(resp.summary.mode, ScanMode::Niche);
            assert_eq!(resp.summary.niche, Some(Niche::Cafes));
        }
    }

    #[tokio::test]
    async fn missing_handles_are_skipped_not_failed() {
        let ds = StaticDataset::new();
        let resp = execute(&ds, &targeted("socialsleuth", &["ghostprofile"]), Duration::ZERO).await;

        assert!(resp.results.is_empty());
        assert_eq!(resp.summary.scanned_profiles, 0);
        assert_eq!(resp.summary.message.as_deref(), Some(EMPTY_SCAN_MESSAGE));
        assert_eq!(
            resp.summary.skipped_targets,
            vec![SkippedTarget { provided: "ghostprofile".into(), reason: SKIPPED_REASON.into() }]
        );
    }

    #[tokio::test]
    async fn results_follow_profile_post_comment_order() {
        let ds = StaticDataset::new();
        let req = targeted("socialsleuth", &["wanderatlas", "cityeatsdaily", "ghost", "coastalcafe"]);

        let first = execute(&ds, &req, Duration::ZERO).await;
        let ids: Vec<_> = first.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "wanderatlas_wanderatlas_1_0",
                "cityeatsdaily_cityeatsdaily_1_1",
                "coastalcafe_coastalcafe_2_2",
            ]
        );
        assert_eq!(first.summary.skipped_targets.len(), 1);

        let again = execute(&ds, &req, Duration::ZERO).await;
        let again_ids: Vec<_> = again.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, again_ids);
    }

    fn profile_with_authors(authors: &[&str]) -> Profile {
        let comments = authors
            .iter()
            .map(|a| Comment {
                username: a.to_string(),
                text: format!("comment by {a}"),
                commented_at: datetime!(2024-06-01 12:00 UTC),
            })
            .collect();
        Profile {
            handle: "mixedcase".into(),
            display_name: "Mixed Case".into(),
            profile_url: "https://www.instagram.com/mixedcase/".into(),
            niche: Niche::Cafes,
            recent_posts: vec![Post {
                id: "mixedcase_1".into(),
                post_url: "https://www.instagram.com/p/Mixed/".into(),
                thumbnail_url: String::new(),
                kind: PostType::Post,
                posted_at: datetime!(2024-06-01 10:00 UTC),
                comments,
            }],
        }
    }

    #[tokio::test]
    async fn comment_authors_are_normalized_before_matching() {
        let profile = profile_with_authors(&["@SocialSleuth", " SOCIALSLEUTH ", "@@socialsleuth", "sleuth", "socialsleuth2"]);
        let outcome = scan_profiles(&[&profile], "socialsleuth", Duration::ZERO).await;

        let texts: Vec<_> = outcome.results.iter().map(|r| r.comment_text.as_str()).collect();
        assert_eq!(
            texts,
            ["comment by @SocialSleuth", "comment by  SOCIALSLEUTH ", "comment by @@socialsleuth"]
        );
        assert_eq!(outcome.log[0].matches_found, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_paid_once_per_profile() {
        let ds = StaticDataset::new();
        let profiles = ds.list_profiles_by_niche(Niche::Restaurants);
        let before = tokio::time::Instant::now();
        scan_profiles(&profiles, "socialsleuth", Duration::from_millis(120)).await;
        assert_eq!(before.elapsed(), Duration::from_millis(240));
    }
}
