//! Feed View
//!
//! Shared body of the three role feeds: status strip, pitch cards, and the
//! popups the cards open. Each mount builds its own mock collection, and
//! each popup opening mounts a fresh popup.

use dioxus::prelude::*;
use evoa_core::feed::{mock_feed, mock_stories, FeedRole};
use evoa_core::pitch::PitchRecord;
use evoa_core::popup::PopupTarget;
use evoa_core::style::{style, Surface};

use crate::components::popups::{CommentPopup, MessageSender};
use crate::components::{AssistantDialog, PitchCard, StatusStrip};
use crate::context::use_theme_mode;

#[component]
pub fn FeedView(role: FeedRole) -> Element {
    let mode = use_theme_mode();
    let pitches: Vec<PitchRecord> = use_hook(move || mock_feed(role));
    let stories = use_hook(move || mock_stories(role));

    let mut comments = use_signal(PopupTarget::default);
    let mut share = use_signal(PopupTarget::default);

    let comment_key = comments.read().mount_key();
    let share_key = share.read().mount_key();
    let title_class = style(mode, Surface::PrimaryText).class_with("feed-title");

    rsx! {
        section { class: "feed",
            h1 { class: "{title_class}", "{role.title()}" }

            StatusStrip { stories: stories }

            div { class: "feed-cards",
                for pitch in pitches {
                    PitchCard {
                        key: "{pitch.id}",
                        record: pitch.clone(),
                        on_like: move |id: String| tracing::debug!(pitch = %id, ?role, "Pitch liked"),
                        on_save: move |id: String| tracing::debug!(pitch = %id, ?role, "Pitch saved"),
                        on_comment: move |id: String| comments.write().open(id),
                        on_share: move |id: String| share.write().open(id),
                    }
                }
            }

            // Mounted per opening so typed text never outlives the popup.
            if let Some(key) = comment_key {
                CommentPopup {
                    key: "{key}",
                    is_open: true,
                    on_close: move |_| comments.write().close(),
                }
            }
            if let Some(key) = share_key {
                MessageSender {
                    key: "{key}",
                    is_open: true,
                    on_close: move |_| share.write().close(),
                }
            }

            if role.has_assistant() {
                AssistantDialog {}
            }
        }
    }
}
