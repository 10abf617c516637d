use crate::domain::profile::{Niche, NicheInfo, Profile};

use super::fixtures;

/// Read side of wherever profile data comes from. The scanner only talks
/// to this trait.
pub trait ProfileSource: Send + Sync {
    /// `handle` must already be normalized.
    fn find_profile_by_handle(&self, handle: &str) -> Option<&Profile>;
    /// Profiles tagged with `niche`, in source order.
    fn list_profiles_by_niche(&self, niche: Niche) -> Vec<&Profile>;
    fn list_niches(&self) -> &[NicheInfo];
    fn profile_count(&self) -> usize;
}

/// The cached snapshot of public profiles bundled with the binary.
pub struct StaticDataset {
    profiles: Vec<Profile>,
    niches: Vec<NicheInfo>,
}

impl StaticDataset {
    pub fn new() -> Self {
        Self { profiles: fixtures::profiles(), niches: fixtures::niches() }
    }
}

impl Default for StaticDataset {
    fn default() -> Self { Self::new() }
}

impl ProfileSource for StaticDataset {
    fn find_profile_by_handle(&self, handle: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.handle == handle)
    }

    fn list_profiles_by_niche(&self, niche: Niche) -> Vec<&Profile> {
        self.profiles.iter().filter(|p| p.niche == niche).collect()
    }

    fn list_niches(&self) -> &[NicheInfo] { &self.niches }

    fn profile_count(&self) -> usize { self.profiles.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalize::normalize_username;
    use std::collections::HashSet;

    #[test]
    fn handles_are_unique_and_canonical() {
        let ds = StaticDataset::new();
        let mut seen = HashSet::new();
        for p in &ds.profiles {
            assert_eq!(normalize_username(&p.handle), p.handle);
            assert!(seen.insert(p.handle.clone()), "duplicate handle {}", p.handle);
        }
        assert_eq!(ds.profile_count(), 7);
    }

    #[test]
    fn niche_lookup_keeps_dataset_order() {
        let ds = StaticDataset::new();
        let cafes: Vec<_> = ds.list_profiles_by_niche(Niche::Cafes).iter().map(|p| p.handle.as_str()).collect();
        assert_eq!(cafes, ["coastalcafe", "urbanbrews"]);
        assert_eq!(ds.list_niches().len(), Niche::ALL.len());
    }

    #[test]
    fn bundled_cache_shape() {
        let ds = StaticDataset::new();
        let posts: usize = ds.profiles.iter().map(|p| p.recent_posts.len()).sum();
        let comments: usize = ds
            .profiles
            .iter()
            .flat_map(|p| &p.recent_posts)
            .map(|post| post.comments.len())
            .sum();
        assert_eq!(posts, 14);
        assert_eq!(comments, 29);
        assert!(ds.profiles.iter().all(|p| p.recent_posts.iter().all(|post| post.id.starts_with(&p.handle))));
    }

    #[test]
    fn unknown_handle_is_a_miss() {
        let ds = StaticDataset::new();
        assert!(ds.find_profile_by_handle("coastalcafe").is_some());
        assert!(ds.find_profile_by_handle("nosuchprofile").is_none());
    }
}
