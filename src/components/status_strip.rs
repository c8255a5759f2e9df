//! Horizontal strip of story bubbles above a feed.

use dioxus::prelude::*;
use evoa_core::feed::StoryItem;
use evoa_core::style::{style, Surface};
use evoa_ui::{Avatar, AvatarSize};

use crate::context::use_theme_mode;

#[component]
pub fn StatusStrip(stories: Vec<StoryItem>) -> Element {
    let mode = use_theme_mode();
    let strip_class = style(mode, Surface::StatusStrip).class();

    rsx! {
        div { class: "{strip_class}", role: "list",
            for story in stories {
                div { key: "{story.id}", class: "story", role: "listitem",
                    Avatar {
                        src: story.avatar.clone(),
                        alt: story.label.clone(),
                        size: AvatarSize::Medium,
                        ring: !story.seen,
                    }
                    span { class: "story-label", "{story.label}" }
                }
            }
        }
    }
}
