//! Landing page - marketing sections and the way in.

use dioxus::prelude::*;
use evoa_core::feed::FeedRole;
use evoa_core::style::{style, Surface};
use evoa_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::use_theme_mode;

const FEATURES: &[(&str, &str)] = &[
    (
        "Pitch in sixty seconds",
        "Post a video or image pitch with your raise, equity and revenue up front.",
    ),
    (
        "Investors in the comments",
        "See which investors engaged with your pitch and follow up directly.",
    ),
    (
        "Deal assistant",
        "Investors get an assistant that walks through risk, valuation and terms.",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("2,400+", "startups pitching"),
    ("380", "active investors"),
    ("$41M", "raised through EVO-A"),
];

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let mode = use_theme_mode();
    let section_class = style(mode, Surface::Section).class();
    let muted = style(mode, Surface::MutedText).class();

    rsx! {
        div { class: "landing",
            header { class: "landing-hero",
                h1 { class: "hero-title",
                    "Where startups "
                    span { class: "accent", "pitch" }
                    " and investors "
                    span { class: "accent", "scout" }
                }
                p { class: "hero-subtitle {muted}",
                    "EVO-A is a social feed for early-stage deal flow. Founders post, investors engage, everyone learns."
                }
                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator.push(Route::Login {});
                        },
                        "Get started"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            navigator.push(Route::Viewer {});
                        },
                        "Browse pitches"
                    }
                }
            }

            section { class: "{section_class}",
                div { class: "stats-row",
                    for (value, label) in STATS.iter() {
                        div { key: "{label}", class: "stat",
                            strong { class: "stat-value", "{value}" }
                            span { class: "{muted}", "{label}" }
                        }
                    }
                }
            }

            section { class: "{section_class}",
                h2 { class: "section-title", "Why EVO-A" }
                div { class: "feature-grid",
                    for (title, body) in FEATURES.iter() {
                        article { key: "{title}", class: "feature",
                            h3 { "{title}" }
                            p { class: "{muted}", "{body}" }
                        }
                    }
                }
            }

            section { class: "{section_class}",
                h2 { class: "section-title", "Built for every side of the table" }
                div { class: "role-grid",
                    for role in FeedRole::ALL {
                        article { key: "{role.title()}", class: "role-card",
                            h3 { "{role.title()}" }
                            p { class: "{muted}", "{role.blurb()}" }
                        }
                    }
                }
            }

            section { class: "landing-cta",
                h2 { "Ready to raise or invest?" }
                Link { to: Route::Login {}, class: "btn btn-primary", "Join EVO-A" }
                p { class: "{muted}",
                    "By joining you agree to our "
                    Link { to: Route::Privacy {}, "privacy policy" }
                    "."
                }
            }
        }
    }
}
