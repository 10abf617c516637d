use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Niche {
    Cafes,
    Restaurants,
    Influencers,
    Fitness,
    Travel,
}

impl Niche {
    pub const ALL: [Niche; 5] = [
        Niche::Cafes,
        Niche::Restaurants,
        Niche::Influencers,
        Niche::Fitness,
        Niche::Travel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Niche::Cafes => "cafes",
            Niche::Restaurants => "restaurants",
            Niche::Influencers => "influencers",
            Niche::Fitness => "fitness",
            Niche::Travel => "travel",
        }
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Niche {
    type Err = ();

    /// Exact match on the lowercase value; callers trim and lowercase first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Niche::ALL.into_iter().find(|n| n.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NicheInfo {
    pub value: Niche,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Post,
    Reel,
}

impl PostType {
    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Post => "post",
            PostType::Reel => "reel",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub username: String,
    pub text: String,
    pub commented_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: String,
    pub post_url: String,
    pub thumbnail_url: String,
    pub kind: PostType,
    pub posted_at: OffsetDateTime,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub handle: String,
    pub display_name: String,
    pub profile_url: String,
    pub niche: Niche,
    pub recent_posts: Vec<Post>,
}
