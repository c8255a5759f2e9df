//! Privacy policy page.

use dioxus::prelude::*;
use evoa_core::style::{style, Surface};

use crate::context::use_theme_mode;

const SECTIONS: &[(&str, &str)] = &[
    (
        "What we store",
        "This app keeps a single preference on your device: whether you use the dark or \
         light theme. Nothing else you do is saved.",
    ),
    (
        "What we share",
        "Nothing. Pitches, comments, connections and messages shown in the app are sample \
         content and never leave your device.",
    ),
    (
        "Messages and comments",
        "Text typed into comment or message fields is not sent anywhere and is discarded when \
         the popup closes or the page changes.",
    ),
    (
        "Deal assistant",
        "Assistant answers are generated on your device from a fixed set of responses. Your \
         questions are not transmitted or recorded.",
    ),
    (
        "Contact",
        "Questions about this policy can be sent to privacy@evoa.example.",
    ),
];

#[component]
pub fn Privacy() -> Element {
    let mode = use_theme_mode();
    let section_class = style(mode, Surface::Section).class_with("policy");
    let muted = style(mode, Surface::MutedText).class();

    rsx! {
        article { class: "{section_class}",
            h1 { "Privacy Policy" }
            p { class: "{muted}", "Last updated: 1 October 2026" }
            for (heading, body) in SECTIONS.iter() {
                section { key: "{heading}", class: "policy-section",
                    h2 { "{heading}" }
                    p { "{body}" }
                }
            }
        }
    }
}
