use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::profile::{Comment, Niche, NicheInfo, Post, PostType, Profile};

const UNSPLASH: &str = "https://images.unsplash.com/photo-";
const THUMB_PARAMS: &str = "?auto=format&fit=crop&w=600&q=80";

fn comment(username: &str, text: &str, commented_at: OffsetDateTime) -> Comment {
    Comment { username: username.into(), text: text.into(), commented_at }
}

fn post(
    id: &str,
    post_url: &str,
    photo: &str,
    kind: PostType,
    posted_at: OffsetDateTime,
    comments: Vec<Comment>,
) -> Post {
    Post {
        id: id.into(),
        post_url: post_url.into(),
        thumbnail_url: format!("{UNSPLASH}{photo}{THUMB_PARAMS}"),
        kind,
        posted_at,
        comments,
    }
}

fn profile(handle: &str, display_name: &str, niche: Niche, recent_posts: Vec<Post>) -> Profile {
    Profile {
        handle: handle.into(),
        display_name: display_name.into(),
        profile_url: format!("https://www.instagram.com/{handle}/"),
        niche,
        recent_posts,
    }
}

pub fn niches() -> Vec<NicheInfo> {
    vec![
        NicheInfo {
            value: Niche::Cafes,
            label: "Cafes & Coffee Bars",
            description: "Specialty cafes and coffee shops with active communities.",
        },
        NicheInfo {
            value: Niche::Restaurants,
            label: "Restaurants & Dining",
            description: "Local restaurants, supper clubs, and chef-led experiences.",
        },
        NicheInfo {
            value: Niche::Influencers,
            label: "Influencer Creators",
            description: "Content creators discussing strategy and collaborations.",
        },
        NicheInfo {
            value: Niche::Fitness,
            label: "Fitness & Wellness",
            description: "Studios, trainers, and performance-focused accounts.",
        },
        NicheInfo {
            value: Niche::Travel,
            label: "Travel & Lifestyle",
            description: "Scenic explorers and travel storytellers.",
        },
    ]
}

pub fn profiles() -> Vec<Profile> {
    use PostType::{Post as P, Reel as R};

    let coastalcafe = profile(
        "coastalcafe",
        "Coastal Cafe",
        Niche::Cafes,
        vec![
            post(
                "coastalcafe_1",
                "https://www.instagram.com/p/C9CafeMorningCoastal/?img_index=1",
                "1504753793650-d4a2b783c15e",
                P,
                datetime!(2024-05-28 09:15 UTC),
                vec![
                    comment(
                        "coffeequeen",
                        "That latte art is perfection!",
                        datetime!(2024-05-28 11:05 UTC),
                    ),
                    comment(
                        "brandwatcher",
                        "Love how you highlight local roasters.",
                        datetime!(2024-05-28 12:20 UTC),
                    ),
                    comment(
                        "lattehunter",
                        "Saving this spot for my weekend!",
                        datetime!(2024-05-28 14:42 UTC),
                    ),
                ],
            ),
            post(
                "coastalcafe_2",
                "https://www.instagram.com/reel/C9CoastalPourOver/",
                "1507133750040-4a8f57021571",
                R,
                datetime!(2024-06-02 15:05 UTC),
                vec![
                    comment(
                        "pourmaster",
                        "The bloom on that pour over is unreal.",
                        datetime!(2024-06-02 15:22 UTC),
                    ),
                    comment(
                        "socialsleuth",
                        "Great breakdown on grind size changes!",
                        datetime!(2024-06-02 17:40 UTC),
                    ),
                ],
            ),
        ],
    );

    let urbanbrews = profile(
        "urbanbrews",
        "Urban Brews Collective",
        Niche::Cafes,
        vec![
            post(
                "urbanbrews_1",
                "https://www.instagram.com/p/C9UrbanFlight/",
                "1521017432531-fbd92d768814",
                P,
                datetime!(2024-05-22 08:30 UTC),
                vec![
                    comment(
                        "mediahawk",
                        "This tasting flight is Instagram gold.",
                        datetime!(2024-05-22 09:14 UTC),
                    ),
                    comment(
                        "brandwatcher",
                        "Curious which beans were used here!",
                        datetime!(2024-05-22 10:54 UTC),
                    ),
                ],
            ),
            post(
                "urbanbrews_2",
                "https://www.instagram.com/p/C9UrbanColdBrew/",
                "1466978913421-dad2ebd01d17",
                P,
                datetime!(2024-06-05 13:48 UTC),
                vec![
                    comment(
                        "lattehunter",
                        "Need to try that seasonal cold brew drop!",
                        datetime!(2024-06-05 14:11 UTC),
                    ),
                    comment(
                        "trendmapper",
                        "Love the merch shelf styling here.",
                        datetime!(2024-06-05 15:19 UTC),
                    ),
                ],
            ),
        ],
    );

    let cityeatsdaily = profile(
        "cityeatsdaily",
        "City Eats Daily",
        Niche::Restaurants,
        vec![
            post(
                "cityeatsdaily_1",
                "https://www.instagram.com/p/C9CityBrunch/",
                "1528712306091-ed0763094c98",
                P,
                datetime!(2024-05-30 17:02 UTC),
                vec![
                    comment(
                        "foodvoyager",
                        "That brunch board is a masterpiece.",
                        datetime!(2024-05-30 18:05 UTC),
                    ),
                    comment(
                        "socialsleuth",
                        "Spotted your collab with Harvest & Co 👀",
                        datetime!(2024-05-30 19:27 UTC),
                    ),
                ],
            ),
            post(
                "cityeatsdaily_2",
                "https://www.instagram.com/reel/C9CityNightMarket/",
                "1544145945-f90425340c7e",
                R,
                datetime!(2024-06-06 21:10 UTC),
                vec![
                    comment(
                        "trendmapper",
                        "Love the lighting at the night market pop-up.",
                        datetime!(2024-06-06 22:42 UTC),
                    ),
                    comment(
                        "brandwatcher",
                        "Was that a cameo from StreetBite?",
                        datetime!(2024-06-06 23:03 UTC),
                    ),
                ],
            ),
        ],
    );

    let greenplatejournal = profile(
        "greenplatejournal",
        "Green Plate Journal",
        Niche::Restaurants,
        vec![
            post(
                "greenplatejournal_1",
                "https://www.instagram.com/p/C9GreenFarmToTable/",
                "1517248135467-4c7edcad34c4",
                P,
                datetime!(2024-05-18 16:40 UTC),
                vec![
                    comment(
                        "sustainableseeker",
                        "Farm-to-table goals right here!",
                        datetime!(2024-05-18 18:02 UTC),
                    ),
                    comment(
                        "socialsleuth",
                        "Is that Herbal & Co collab in the backdrop?",
                        datetime!(2024-05-18 21:10 UTC),
                    ),
                ],
            ),
            post(
                "greenplatejournal_2",
                "https://www.instagram.com/p/C9GreenZeroWaste/",
                "1448043552756-e747b7a2b2b8",
                P,
                datetime!(2024-06-03 12:05 UTC),
                vec![
                    comment(
                        "lattehunter",
                        "These reusable jars are a vibe. Where can I get them?",
                        datetime!(2024-06-03 13:22 UTC),
                    ),
                    comment(
                        "plantbasedpulse",
                        "Appreciate the transparency in sourcing!",
                        datetime!(2024-06-03 14:18 UTC),
                    ),
                ],
            ),
        ],
    );

    let fitloopstudio = profile(
        "fitloopstudio",
        "Fit Loop Studio",
        Niche::Fitness,
        vec![
            post(
                "fitloopstudio_1",
                "https://www.instagram.com/reel/C9FitLoopInterval/",
                "1558611848-73f7eb4001a1",
                R,
                datetime!(2024-05-25 07:12 UTC),
                vec![
                    comment(
                        "wellnessradar",
                        "Circuit breakdown is super helpful!",
                        datetime!(2024-05-25 08:50 UTC),
                    ),
                    comment(
                        "socialsleuth",
                        "Saw @PulseAthletic using similar formats recently.",
                        datetime!(2024-05-25 10:05 UTC),
                    ),
                ],
            ),
            post(
                "fitloopstudio_2",
                "https://www.instagram.com/p/C9FitLoopRecovery/",
                "1594737625785-c66858a24b3e",
                P,
                datetime!(2024-06-04 06:32 UTC),
                vec![
                    comment(
                        "mobilitymentor",
                        "The recovery stack is dialed in!",
                        datetime!(2024-06-04 07:24 UTC),
                    ),
                    comment(
                        "trendmapper",
                        "Loving the brand consistency across the carousel.",
                        datetime!(2024-06-04 08:15 UTC),
                    ),
                ],
            ),
        ],
    );

    let creatorsphere = profile(
        "creatorsphere",
        "Creator Sphere",
        Niche::Influencers,
        vec![
            post(
                "creatorsphere_1",
                "https://www.instagram.com/reel/C9CreatorWorkflow/",
                "1521737604893-d14cc237f11d",
                R,
                datetime!(2024-05-29 20:45 UTC),
                vec![
                    comment(
                        "agencytracker",
                        "Obsessed with the storytelling arc here.",
                        datetime!(2024-05-29 21:11 UTC),
                    ),
                    comment(
                        "socialsleuth",
                        "Smart reuse of the trending hook format!",
                        datetime!(2024-05-29 22:05 UTC),
                    ),
                ],
            ),
            post(
                "creatorsphere_2",
                "https://www.instagram.com/p/C9CreatorBrandDeck/",
                "1523475472560-d2df97ec485c",
                P,
                datetime!(2024-06-07 18:20 UTC),
                vec![
                    comment(
                        "campaignnotes",
                        "Bookmarking this for client brainstorms.",
                        datetime!(2024-06-07 19:12 UTC),
                    ),
                    comment(
                        "trendmapper",
                        "Curious if this is part of your new launch tease?",
                        datetime!(2024-06-07 19:40 UTC),
                    ),
                ],
            ),
        ],
    );

    let wanderatlas = profile(
        "wanderatlas",
        "Wander Atlas",
        Niche::Travel,
        vec![
            post(
                "wanderatlas_1",
                "https://www.instagram.com/p/C9WanderSunrise/",
                "1454496522488-7a8e488e8606",
                P,
                datetime!(2024-05-27 05:50 UTC),
                vec![
                    comment(
                        "journeyfinder",
                        "That sunrise is unreal, adding to the bucket list!",
                        datetime!(2024-05-27 06:32 UTC),
                    ),
                    comment(
                        "socialsleuth",
                        "Spotted the same drone shot trend here 👀",
                        datetime!(2024-05-27 07:45 UTC),
                    ),
                ],
            ),
            post(
                "wanderatlas_2",
                "https://www.instagram.com/reel/C9WanderHiddenFalls/",
                "1500530855697-b586d89ba3ee",
                R,
                datetime!(2024-06-01 04:18 UTC),
                vec![
                    comment(
                        "trendmapper",
                        "Love the pacing of this reveal shot.",
                        datetime!(2024-06-01 05:02 UTC),
                    ),
                    comment(
                        "globetrotguide",
                        "Can you share the trail details? Looks intense!",
                        datetime!(2024-06-01 05:26 UTC),
                    ),
                ],
            ),
        ],
    );

    vec![
        coastalcafe,
        urbanbrews,
        cityeatsdaily,
        greenplatejournal,
        fitloopstudio,
        creatorsphere,
        wanderatlas,
    ]
}
