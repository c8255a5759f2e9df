//! Pitch Card Component
//!
//! Renders one pitch: author, media, action row, metrics, caption, deal
//! terms, links and commenting investors. Optional regions are omitted when
//! the record has nothing to show.

use dioxus::prelude::*;
use evoa_core::pitch::{format_count, CardAction, CardHooks, CardState, MediaRef, PitchRecord};
use evoa_core::style::{style, Surface};
use evoa_ui::{Avatar, AvatarSize};

use crate::components::{Icon, IconKind};
use crate::context::use_theme_mode;

/// Adapt the optional Dioxus handlers into core card hooks.
fn card_hooks(
    on_like: Option<EventHandler<String>>,
    on_comment: Option<EventHandler<String>>,
    on_share: Option<EventHandler<String>>,
    on_save: Option<EventHandler<String>>,
) -> CardHooks<'static> {
    let mut hooks = CardHooks::new();
    if let Some(h) = on_like {
        hooks = hooks.on_like(move |id| h.call(id.to_string()));
    }
    if let Some(h) = on_comment {
        hooks = hooks.on_comment(move |id| h.call(id.to_string()));
    }
    if let Some(h) = on_share {
        hooks = hooks.on_share(move |id| h.call(id.to_string()));
    }
    if let Some(h) = on_save {
        hooks = hooks.on_save(move |id| h.call(id.to_string()));
    }
    hooks
}

/// One card in a feed
///
/// Every callback is optional and receives the record id. Like and save
/// update the card's own indicators whether or not a callback is attached.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PitchCard {
///         record: pitch.clone(),
///         on_comment: move |id| comment_target.set(Some(id)),
///     }
/// }
/// ```
#[component]
pub fn PitchCard(
    record: PitchRecord,
    on_like: Option<EventHandler<String>>,
    on_comment: Option<EventHandler<String>>,
    on_share: Option<EventHandler<String>>,
    on_save: Option<EventHandler<String>>,
) -> Element {
    let mode = use_theme_mode();
    let seed = CardState::from_record(&record);
    let mut state = use_signal(move || seed);

    let record_id = record.id.clone();
    let activate = use_callback(move |action: CardAction| {
        let hooks = card_hooks(on_like, on_comment, on_share, on_save);
        state.write().activate(action, &record_id, &hooks);
    });

    let current = state();
    let likes = format_count(current.display_likes(record.metrics.likes));
    let views = format_count(record.metrics.views);
    let clicks = format_count(record.metrics.clicks);
    let card_class = style(mode, Surface::Card).class();
    let muted = style(mode, Surface::MutedText).class();
    let hashtags: Vec<String> = record.hashtag_list().into_iter().map(str::to_string).collect();

    rsx! {
        article { class: "{card_class}",
            header { class: "pitch-card__header",
                Avatar {
                    src: record.author.avatar.clone(),
                    alt: record.author.name.clone(),
                    size: AvatarSize::Small,
                }
                div { class: "pitch-card__author",
                    span { class: "pitch-card__name", "{record.author.name}" }
                    span { class: "{muted}", "{record.author.handle}" }
                    if let Some(tagline) = &record.author.tagline {
                        span { class: "pitch-card__tagline", "{tagline}" }
                    }
                }
            }

            if let Some(media) = &record.media {
                div { class: "pitch-card__media", {render_media(media, &record.caption)} }
            }

            div { class: "pitch-card__actions",
                button {
                    class: if current.liked { "action-btn liked" } else { "action-btn" },
                    "aria-label": "Like",
                    "aria-pressed": "{current.liked}",
                    onclick: move |_| activate.call(CardAction::Like),
                    Icon { kind: IconKind::Heart, filled: current.liked }
                }
                button {
                    class: "action-btn",
                    "aria-label": "Comment",
                    onclick: move |_| activate.call(CardAction::Comment),
                    Icon { kind: IconKind::Comment }
                }
                button {
                    class: "action-btn",
                    "aria-label": "Share",
                    onclick: move |_| activate.call(CardAction::Share),
                    Icon { kind: IconKind::Share }
                }
                button {
                    class: if current.saved { "action-btn saved push-right" } else { "action-btn push-right" },
                    "aria-label": "Save",
                    "aria-pressed": "{current.saved}",
                    onclick: move |_| activate.call(CardAction::Save),
                    Icon { kind: IconKind::Bookmark, filled: current.saved }
                }
            }

            div { class: "pitch-card__metrics {muted}",
                span { class: "metric", Icon { kind: IconKind::Heart, size: 14 } "{likes}" }
                span { class: "metric", Icon { kind: IconKind::Eye, size: 14 } "{views}" }
                span { class: "metric", Icon { kind: IconKind::Pointer, size: 14 } "{clicks}" }
            }

            p { class: "pitch-card__caption",
                span { class: "pitch-card__name", "{record.author.name} " }
                "{record.caption}"
            }

            if !hashtags.is_empty() {
                p { class: "pitch-card__hashtags",
                    for tag in hashtags {
                        span { key: "{tag}", class: "hashtag", "{tag} " }
                    }
                }
            }

            if let Some(deal) = &record.deal {
                div { class: "pitch-card__deal",
                    div { class: "deal-cell",
                        span { class: "{muted}", "Raising" }
                        strong { "{deal.amount}" }
                    }
                    div { class: "deal-cell",
                        span { class: "{muted}", "Equity" }
                        strong { "{deal.equity_label()}" }
                    }
                    div { class: "deal-cell",
                        span { class: "{muted}", "Revenue" }
                        strong { "{deal.revenue}" }
                    }
                }
            }

            if let Some(links) = record.visible_links() {
                div { class: "pitch-card__links",
                    if let Some(website) = &links.website {
                        a { class: "pitch-link", href: "{website}", target: "_blank",
                            Icon { kind: IconKind::Globe, size: 14 }
                            "Website"
                        }
                    }
                    if let Some(social) = &links.social {
                        a { class: "pitch-link", href: "{social}", target: "_blank",
                            Icon { kind: IconKind::Link, size: 14 }
                            "Social"
                        }
                    }
                }
            }

            if let Some(investors) = record.visible_investors() {
                div { class: "pitch-card__investors",
                    div { class: "avatar-stack",
                        for (i, src) in investors.iter().enumerate() {
                            Avatar {
                                key: "{i}",
                                src: src.clone(),
                                alt: "Investor".to_string(),
                                size: AvatarSize::Tiny,
                            }
                        }
                    }
                    span { class: "{muted}",
                        if investors.len() == 1 { "1 investor commented" } else { "{investors.len()} investors commented" }
                    }
                }
            }
        }
    }
}

fn render_media(media: &MediaRef, caption: &str) -> Element {
    match media {
        MediaRef::Image(url) => rsx! {
            img { class: "pitch-media", src: "{url}", alt: "{caption}", loading: "lazy" }
        },
        MediaRef::Video(url) => rsx! {
            video {
                class: "pitch-media",
                src: "{url}",
                controls: true,
                muted: true,
                playsinline: true,
                preload: "metadata",
            }
        },
    }
}
