//! Role-specific feeds and their mock collections.
//!
//! Every call builds a fresh collection. Views own what they get back; like
//! and save state is never shared between views.

use serde::{Deserialize, Serialize};

use crate::pitch::{DealTerms, ExternalLinks, MediaRef, Metrics, PitchAuthor, PitchRecord};

/// Which audience a feed is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedRole {
    Incubator,
    Investor,
    Viewer,
}

impl FeedRole {
    pub const ALL: [FeedRole; 3] = [FeedRole::Incubator, FeedRole::Investor, FeedRole::Viewer];

    pub fn title(&self) -> &'static str {
        match self {
            FeedRole::Incubator => "Incubator Feed",
            FeedRole::Investor => "Investor Feed",
            FeedRole::Viewer => "Discover",
        }
    }

    /// Short pitch used on the login role picker.
    pub fn blurb(&self) -> &'static str {
        match self {
            FeedRole::Incubator => "Post your startup pitch and track how investors engage.",
            FeedRole::Investor => "Scout deal flow, review terms and ask the assistant.",
            FeedRole::Viewer => "Follow the founders building what comes next.",
        }
    }

    /// Only investors get the assistant dialog.
    pub fn has_assistant(&self) -> bool {
        matches!(self, FeedRole::Investor)
    }
}

/// One bubble in the horizontal status strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryItem {
    pub id: String,
    pub label: String,
    pub avatar: String,
    pub seen: bool,
}

fn avatar(n: u32) -> String {
    format!("https://i.pravatar.cc/150?img={n}")
}

fn photo(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/800/600")
}

struct Draft {
    id: &'static str,
    name: &'static str,
    handle: &'static str,
    avatar: u32,
    tagline: Option<&'static str>,
    media: Option<MediaRef>,
    caption: &'static str,
    hashtags: &'static str,
    metrics: (u64, u64, u64),
    deal: Option<(&'static str, f32, &'static str)>,
    links: Option<(Option<&'static str>, Option<&'static str>)>,
    investors: Option<&'static [u32]>,
    liked: bool,
    saved: bool,
}

impl Draft {
    fn build(self) -> PitchRecord {
        PitchRecord {
            id: self.id.to_string(),
            author: PitchAuthor {
                name: self.name.to_string(),
                handle: self.handle.to_string(),
                avatar: avatar(self.avatar),
                tagline: self.tagline.map(str::to_string),
            },
            media: self.media,
            caption: self.caption.to_string(),
            hashtags: self.hashtags.to_string(),
            metrics: Metrics {
                likes: self.metrics.0,
                views: self.metrics.1,
                clicks: self.metrics.2,
            },
            deal: self.deal.map(|(amount, equity_percent, revenue)| DealTerms {
                amount: amount.to_string(),
                equity_percent,
                revenue: revenue.to_string(),
            }),
            links: self.links.map(|(website, social)| ExternalLinks {
                website: website.map(str::to_string),
                social: social.map(str::to_string),
            }),
            investor_avatars: self
                .investors
                .map(|ids| ids.iter().copied().map(avatar).collect()),
            liked: self.liked,
            saved: self.saved,
        }
    }
}

/// Fresh mock pitches for a role's feed.
pub fn mock_feed(role: FeedRole) -> Vec<PitchRecord> {
    let drafts = match role {
        FeedRole::Incubator => incubator_drafts(),
        FeedRole::Investor => investor_drafts(),
        FeedRole::Viewer => viewer_drafts(),
    };
    drafts.into_iter().map(Draft::build).collect()
}

/// Fresh status strip entries for a role's feed.
pub fn mock_stories(role: FeedRole) -> Vec<StoryItem> {
    let entries: &[(&str, u32, bool)] = match role {
        FeedRole::Incubator => &[
            ("Your story", 12, false),
            ("GreenGrid", 32, false),
            ("MedNova", 47, false),
            ("Kitely", 5, true),
            ("FarmFlow", 21, true),
        ],
        FeedRole::Investor => &[
            ("Watchlist", 8, false),
            ("Solace", 14, false),
            ("Quantia", 53, false),
            ("Orbit", 60, true),
            ("Lumen", 33, true),
            ("Tidal", 19, true),
        ],
        FeedRole::Viewer => &[
            ("Trending", 3, false),
            ("EdTech", 44, false),
            ("Climate", 25, true),
            ("Health", 9, true),
        ],
    };

    entries
        .iter()
        .enumerate()
        .map(|(i, (label, img, seen))| StoryItem {
            id: format!("story-{}", i + 1),
            label: label.to_string(),
            avatar: avatar(*img),
            seen: *seen,
        })
        .collect()
}

fn incubator_drafts() -> Vec<Draft> {
    vec![
        Draft {
            id: "inc-1",
            name: "GreenGrid Energy",
            handle: "@greengrid",
            avatar: 32,
            tagline: Some("Community solar for apartment blocks"),
            media: Some(MediaRef::Image(photo("greengrid"))),
            caption: "We just closed our pilot with 40 households. Power bills down 28% in the first quarter.",
            hashtags: "#cleantech #solar #preseed",
            metrics: (1_240, 18_300, 412),
            deal: Some(("$250K", 8.0, "$36K ARR")),
            links: Some((Some("https://greengrid.example"), Some("https://x.com/greengrid"))),
            investors: Some(&[8, 14, 60]),
            liked: false,
            saved: false,
        },
        Draft {
            id: "inc-2",
            name: "MedNova",
            handle: "@mednova",
            avatar: 47,
            tagline: Some("Remote triage for rural clinics"),
            media: Some(MediaRef::Video(
                "https://cdn.evoa.example/pitches/mednova-demo.mp4".to_string(),
            )),
            caption: "Two-minute demo of our triage flow. Nurses onboard in under ten minutes.",
            hashtags: "#healthtech #ai",
            metrics: (3_870, 52_100, 1_980),
            deal: Some(("$1.2M", 12.5, "$210K ARR")),
            links: Some((Some("https://mednova.example"), None)),
            investors: None,
            liked: true,
            saved: false,
        },
        Draft {
            id: "inc-3",
            name: "FarmFlow",
            handle: "@farmflow",
            avatar: 21,
            tagline: None,
            media: None,
            caption: "Looking for a technical co-founder with IoT experience. DM us!",
            hashtags: "#agritech #cofounder",
            metrics: (312, 4_050, 77),
            deal: None,
            links: None,
            investors: None,
            liked: false,
            saved: true,
        },
    ]
}

fn investor_drafts() -> Vec<Draft> {
    vec![
        Draft {
            id: "inv-1",
            name: "Solace Labs",
            handle: "@solace",
            avatar: 14,
            tagline: Some("Mental health benefits for shift workers"),
            media: Some(MediaRef::Image(photo("solace"))),
            caption: "Month-over-month growth of 22% since launch. Raising our seed to expand into logistics.",
            hashtags: "#healthtech #b2b #seed",
            metrics: (5_420, 88_900, 3_110),
            deal: Some(("$2M", 10.0, "$480K ARR")),
            links: Some((Some("https://solace.example"), Some("https://linkedin.com/company/solace"))),
            investors: Some(&[8, 33, 53, 60]),
            liked: false,
            saved: false,
        },
        Draft {
            id: "inv-2",
            name: "Quantia",
            handle: "@quantia",
            avatar: 53,
            tagline: Some("Treasury automation for SMBs"),
            media: Some(MediaRef::Video(
                "https://cdn.evoa.example/pitches/quantia.mp4".to_string(),
            )),
            caption: "Our reconciliation engine now handles 14 banks. 120 paying customers, zero churn this quarter.",
            hashtags: "#fintech #saas",
            metrics: (2_980, 41_200, 1_450),
            deal: Some(("$750K", 7.5, "$190K ARR")),
            links: Some((Some("https://quantia.example"), None)),
            investors: Some(&[19]),
            liked: false,
            saved: true,
        },
        Draft {
            id: "inv-3",
            name: "Orbit Freight",
            handle: "@orbitfreight",
            avatar: 60,
            tagline: Some("Cross-border freight matching"),
            media: Some(MediaRef::Image(photo("orbit"))),
            caption: "Matched 2,300 loads last month across three borders.",
            hashtags: "#logistics #marketplace",
            metrics: (1_105, 16_700, 502),
            deal: Some(("$1.5M", 15.0, "$95K MRR")),
            links: None,
            investors: None,
            liked: true,
            saved: true,
        },
        Draft {
            id: "inv-4",
            name: "Lumen Learning",
            handle: "@lumen",
            avatar: 33,
            tagline: None,
            media: Some(MediaRef::Image(photo("lumen"))),
            caption: "Adaptive reading coach. 9,000 students across 40 schools.",
            hashtags: "#edtech",
            metrics: (880, 12_400, 260),
            deal: None,
            links: Some((None, Some("https://instagram.com/lumenlearning"))),
            investors: None,
            liked: false,
            saved: false,
        },
    ]
}

fn viewer_drafts() -> Vec<Draft> {
    vec![
        Draft {
            id: "view-1",
            name: "Kitely",
            handle: "@kitely",
            avatar: 5,
            tagline: Some("Kites that generate power"),
            media: Some(MediaRef::Video(
                "https://cdn.evoa.example/pitches/kitely-flight.mp4".to_string(),
            )),
            caption: "First 10kW flight test over the North Sea. Watch till the end!",
            hashtags: "#energy #hardware",
            metrics: (12_700, 230_000, 8_900),
            deal: None,
            links: Some((Some("https://kitely.example"), Some("https://youtube.com/@kitely"))),
            investors: None,
            liked: false,
            saved: false,
        },
        Draft {
            id: "view-2",
            name: "Tidal Threads",
            handle: "@tidal",
            avatar: 19,
            tagline: Some("Fabric from ocean plastic"),
            media: Some(MediaRef::Image(photo("tidal"))),
            caption: "Our first collection sold out in 48 hours.",
            hashtags: "#fashion #circular",
            metrics: (4_300, 61_000, 2_100),
            deal: Some(("$500K", 6.0, "$60K MRR")),
            links: None,
            investors: Some(&[8, 14]),
            liked: false,
            saved: false,
        },
        Draft {
            id: "view-3",
            name: "Byte Bakery",
            handle: "@bytebakery",
            avatar: 44,
            tagline: None,
            media: Some(MediaRef::Image(photo("bytebakery"))),
            caption: "Teaching kids to code, one cookie at a time.",
            hashtags: "#edtech #kids",
            metrics: (640, 7_900, 120),
            deal: None,
            links: None,
            investors: None,
            liked: true,
            saved: false,
        },
    ]
}
