//! Pitch records and the card's local toggle state.

use serde::{Deserialize, Serialize};

/// Image or video shown at the top of a pitch card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum MediaRef {
    Image(String),
    Video(String),
}

impl MediaRef {
    pub fn url(&self) -> &str {
        match self {
            MediaRef::Image(url) | MediaRef::Video(url) => url,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaRef::Video(_))
    }
}

/// Who posted the pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchAuthor {
    pub name: String,
    pub handle: String,
    pub avatar: String,
    /// One-line description shown under the name
    pub tagline: Option<String>,
}

/// Engagement counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub likes: u64,
    pub views: u64,
    pub clicks: u64,
}

/// Raising amount, equity offered and current revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealTerms {
    /// Display string, e.g. "$500K"
    pub amount: String,
    pub equity_percent: f32,
    /// Display string, e.g. "$120K ARR"
    pub revenue: String,
}

impl DealTerms {
    /// Equity rendered without trailing zeros: `10%`, `7.5%`.
    pub fn equity_label(&self) -> String {
        let rounded = (self.equity_percent * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{}%", rounded as i64)
        } else {
            format!("{:.1}%", rounded)
        }
    }
}

/// Optional outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalLinks {
    pub website: Option<String>,
    pub social: Option<String>,
}

impl ExternalLinks {
    pub fn is_empty(&self) -> bool {
        self.website.is_none() && self.social.is_none()
    }
}

/// One feed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    pub id: String,
    pub author: PitchAuthor,
    pub media: Option<MediaRef>,
    pub caption: String,
    /// Space-separated hashtags as authored, e.g. "#fintech #seed"
    pub hashtags: String,
    pub metrics: Metrics,
    pub deal: Option<DealTerms>,
    pub links: Option<ExternalLinks>,
    /// Avatars of investors who commented
    pub investor_avatars: Option<Vec<String>>,
    pub liked: bool,
    pub saved: bool,
}

impl PitchRecord {
    /// Individual hashtags, with the leading `#` kept.
    pub fn hashtag_list(&self) -> Vec<&str> {
        self.hashtags
            .split_whitespace()
            .filter(|t| t.starts_with('#') && t.len() > 1)
            .collect()
    }

    /// Links to render, if any are present.
    pub fn visible_links(&self) -> Option<&ExternalLinks> {
        self.links.as_ref().filter(|l| !l.is_empty())
    }

    /// Investor avatars to render, if the list is non-empty.
    pub fn visible_investors(&self) -> Option<&[String]> {
        self.investor_avatars
            .as_deref()
            .filter(|avatars| !avatars.is_empty())
    }
}

/// Controls on a pitch card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    Like,
    Comment,
    Share,
    Save,
}

type Hook<'a> = Box<dyn Fn(&str) + 'a>;

/// Optional notification hooks a parent can attach to a card.
///
/// Hooks are notifications only; the card's own state changes whether or not
/// one is attached.
#[derive(Default)]
pub struct CardHooks<'a> {
    pub on_like: Option<Hook<'a>>,
    pub on_comment: Option<Hook<'a>>,
    pub on_share: Option<Hook<'a>>,
    pub on_save: Option<Hook<'a>>,
}

impl<'a> CardHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_like(mut self, f: impl Fn(&str) + 'a) -> Self {
        self.on_like = Some(Box::new(f));
        self
    }

    pub fn on_comment(mut self, f: impl Fn(&str) + 'a) -> Self {
        self.on_comment = Some(Box::new(f));
        self
    }

    pub fn on_share(mut self, f: impl Fn(&str) + 'a) -> Self {
        self.on_share = Some(Box::new(f));
        self
    }

    pub fn on_save(mut self, f: impl Fn(&str) + 'a) -> Self {
        self.on_save = Some(Box::new(f));
        self
    }

    fn hook(&self, action: CardAction) -> Option<&Hook<'a>> {
        match action {
            CardAction::Like => self.on_like.as_ref(),
            CardAction::Comment => self.on_comment.as_ref(),
            CardAction::Share => self.on_share.as_ref(),
            CardAction::Save => self.on_save.as_ref(),
        }
    }
}

/// Local liked/saved indicators of one rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub liked: bool,
    pub saved: bool,
    seeded_liked: bool,
}

impl CardState {
    /// Seed from the record's client-side flags.
    pub fn from_record(record: &PitchRecord) -> Self {
        Self {
            liked: record.liked,
            saved: record.saved,
            seeded_liked: record.liked,
        }
    }

    /// Handle a control activation: update local state, then notify the
    /// matching hook (if any) with the record id.
    pub fn activate(&mut self, action: CardAction, record_id: &str, hooks: &CardHooks<'_>) {
        match action {
            CardAction::Like => self.liked = !self.liked,
            CardAction::Save => self.saved = !self.saved,
            CardAction::Comment | CardAction::Share => {}
        }

        if let Some(hook) = hooks.hook(action) {
            hook(record_id);
        }
    }

    /// Like count adjusted for the local toggle.
    pub fn display_likes(&self, base: u64) -> u64 {
        match (self.seeded_liked, self.liked) {
            (false, true) => base.saturating_add(1),
            (true, false) => base.saturating_sub(1),
            _ => base,
        }
    }
}

/// Compact counter display: `950`, `1.2K`, `3.4M`.
pub fn format_count(n: u64) -> String {
    fn scaled(n: u64, unit: u64, suffix: &str) -> String {
        let tenths = n / (unit / 10);
        if tenths % 10 == 0 {
            format!("{}{}", tenths / 10, suffix)
        } else {
            format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
        }
    }

    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => scaled(n, 1_000, "K"),
        1_000_000..=999_999_999 => scaled(n, 1_000_000, "M"),
        _ => scaled(n, 1_000_000_000, "B"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn record(liked: bool, saved: bool) -> PitchRecord {
        PitchRecord {
            id: "p-1".to_string(),
            author: PitchAuthor {
                name: "Solace Labs".to_string(),
                handle: "@solace".to_string(),
                avatar: "https://example.com/a.png".to_string(),
                tagline: None,
            },
            media: None,
            caption: "caption".to_string(),
            hashtags: "#climate #seed".to_string(),
            metrics: Metrics {
                likes: 10,
                views: 100,
                clicks: 5,
            },
            deal: None,
            links: None,
            investor_avatars: None,
            liked,
            saved,
        }
    }

    #[test]
    fn test_like_flips_and_notifies_once() {
        let rec = record(false, false);
        let calls = RefCell::new(Vec::new());
        let hooks = CardHooks::new().on_like(|id| calls.borrow_mut().push(id.to_string()));

        let mut state = CardState::from_record(&rec);
        state.activate(CardAction::Like, &rec.id, &hooks);

        assert!(state.liked);
        assert_eq!(*calls.borrow(), vec!["p-1".to_string()]);
    }

    #[test]
    fn test_like_without_hook_still_flips() {
        let rec = record(false, false);
        let mut state = CardState::from_record(&rec);
        state.activate(CardAction::Like, &rec.id, &CardHooks::default());
        assert!(state.liked);
    }

    #[test]
    fn test_save_independent_of_like() {
        let rec = record(true, false);
        let mut state = CardState::from_record(&rec);
        state.activate(CardAction::Save, &rec.id, &CardHooks::default());
        assert!(state.saved);
        assert!(state.liked);
    }

    #[test]
    fn test_comment_and_share_only_notify() {
        let rec = record(false, false);
        let comments = RefCell::new(0);
        let shares = RefCell::new(0);
        let hooks = CardHooks::new()
            .on_comment(|_| *comments.borrow_mut() += 1)
            .on_share(|_| *shares.borrow_mut() += 1);

        let mut state = CardState::from_record(&rec);
        state.activate(CardAction::Comment, &rec.id, &hooks);
        state.activate(CardAction::Share, &rec.id, &hooks);

        assert_eq!(state, CardState::from_record(&rec));
        assert_eq!(*comments.borrow(), 1);
        assert_eq!(*shares.borrow(), 1);
    }

    #[test]
    fn test_display_likes() {
        let mut state = CardState::from_record(&record(false, false));
        assert_eq!(state.display_likes(10), 10);
        state.activate(CardAction::Like, "p-1", &CardHooks::default());
        assert_eq!(state.display_likes(10), 11);

        let mut seeded = CardState::from_record(&record(true, false));
        seeded.activate(CardAction::Like, "p-1", &CardHooks::default());
        assert_eq!(seeded.display_likes(10), 9);
        assert_eq!(seeded.display_likes(0), 0);
    }

    #[test]
    fn test_hashtag_list() {
        let mut rec = record(false, false);
        rec.hashtags = "#ai  #b2b # plain #".to_string();
        assert_eq!(rec.hashtag_list(), vec!["#ai", "#b2b"]);
    }

    #[test]
    fn test_optional_regions() {
        let mut rec = record(false, false);
        assert!(rec.visible_links().is_none());
        assert!(rec.visible_investors().is_none());

        rec.links = Some(ExternalLinks::default());
        rec.investor_avatars = Some(Vec::new());
        assert!(rec.visible_links().is_none());
        assert!(rec.visible_investors().is_none());

        rec.links = Some(ExternalLinks {
            website: Some("https://solace.example".to_string()),
            social: None,
        });
        assert!(rec.visible_links().is_some());
    }

    #[test]
    fn test_equity_label() {
        let whole = DealTerms {
            amount: "$1M".to_string(),
            equity_percent: 10.0,
            revenue: "$0".to_string(),
        };
        assert_eq!(whole.equity_label(), "10%");

        let fractional = DealTerms {
            equity_percent: 7.5,
            ..whole
        };
        assert_eq!(fractional.equity_label(), "7.5%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_250), "1.2K");
        assert_eq!(format_count(48_900), "48.9K");
        assert_eq!(format_count(3_400_000), "3.4M");
        assert_eq!(format_count(2_000_000_000), "2B");
    }

    #[test]
    fn test_media_ref_serde() {
        let media = MediaRef::Video("https://v.example/1.mp4".to_string());
        let json = serde_json::to_string(&media).unwrap();
        assert_eq!(json, r#"{"kind":"video","url":"https://v.example/1.mp4"}"#);
        assert!(media.is_video());
    }
}
