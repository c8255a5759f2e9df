//! Profile Page
//!
//! Read-only startup profile: hero, stats, about, and the account's pitches.

use dioxus::prelude::*;
use evoa_core::pitch::format_count;
use evoa_core::profile::{mock_profile, StartupProfile};
use evoa_core::style::{style, Surface};
use evoa_ui::{Avatar, AvatarSize, Button, ButtonVariant};

use crate::components::popups::ConnectionsPopup;
use crate::components::PitchCard;
use crate::context::use_theme_mode;

// Embed default profile image as base64 data URI
const AVATAR_DEFAULT_BYTES: &[u8] = include_bytes!("../../assets/avatar-default.svg");

fn avatar_default_uri() -> String {
    use base64::Engine;
    let base64 = base64::engine::general_purpose::STANDARD.encode(AVATAR_DEFAULT_BYTES);
    format!("data:image/svg+xml;base64,{}", base64)
}

#[component]
pub fn Profile() -> Element {
    let mode = use_theme_mode();
    let profile: StartupProfile = use_hook(mock_profile);
    let mut show_connections = use_signal(|| false);

    let section_class = style(mode, Surface::Section).class();
    let muted = style(mode, Surface::MutedText).class();
    let avatar = profile.avatar.clone().unwrap_or_else(avatar_default_uri);

    rsx! {
        div { class: "profile-page",
            section { class: "{section_class} profile-hero",
                Avatar { src: avatar, alt: profile.name.clone(), size: AvatarSize::Large }
                div { class: "profile-identity",
                    h1 { class: "profile-name", "{profile.name}" }
                    span { class: "{muted}", "{profile.handle}" }
                    p { class: "profile-tagline", "{profile.tagline}" }
                    span { class: "{muted}", "{profile.location} · Founded {profile.founded}" }
                }
            }

            section { class: "{section_class}",
                div { class: "stats-row",
                    div { class: "stat",
                        strong { class: "stat-value", "{profile.pitch_count()}" }
                        span { class: "{muted}", "Pitches" }
                    }
                    div { class: "stat",
                        strong { class: "stat-value", "{format_count(profile.total_views())}" }
                        span { class: "{muted}", "Views" }
                    }
                    button {
                        class: "stat stat--button",
                        r#type: "button",
                        onclick: move |_| show_connections.set(true),
                        strong { class: "stat-value", "{format_count(profile.followers)}" }
                        span { class: "{muted}", "Connections" }
                    }
                    div { class: "stat",
                        strong { class: "stat-value", "{format_count(profile.following)}" }
                        span { class: "{muted}", "Following" }
                    }
                }
                div { class: "profile-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| show_connections.set(true),
                        "View connections"
                    }
                }
            }

            section { class: "{section_class}",
                h2 { class: "section-title", "About" }
                p { "{profile.about}" }
            }

            section { class: "profile-pitches",
                h2 { class: "section-title", "Pitches" }
                for pitch in profile.pitches.iter().cloned() {
                    PitchCard { key: "{pitch.id}", record: pitch }
                }
            }

            if show_connections() {
                ConnectionsPopup {
                    is_open: true,
                    on_close: move |_| show_connections.set(false),
                }
            }
        }
    }
}
