//! Login page - pick a role and enter its feed.
//!
//! There are no accounts; the choice only decides which feed opens.

use dioxus::prelude::*;
use evoa_core::feed::FeedRole;
use evoa_core::style::{style, Surface};

use crate::app::Route;
use crate::context::use_theme_mode;

fn route_for(role: FeedRole) -> Route {
    match role {
        FeedRole::Incubator => Route::Incubator {},
        FeedRole::Investor => Route::Investor {},
        FeedRole::Viewer => Route::Viewer {},
    }
}

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let mode = use_theme_mode();
    let panel_class = style(mode, Surface::Card).class_with("login-panel");
    let muted = style(mode, Surface::MutedText).class();

    rsx! {
        div { class: "login",
            div { class: "{panel_class}",
                h1 { class: "login-title", "Welcome to EVO-A" }
                p { class: "{muted}", "Choose how you want to use EVO-A today." }

                div { class: "role-picker",
                    for role in FeedRole::ALL {
                        button {
                            key: "{role.title()}",
                            class: "role-option",
                            r#type: "button",
                            onclick: move |_| {
                                tracing::info!(?role, "Role selected");
                                navigator.push(route_for(role));
                            },
                            strong { "{role.title()}" }
                            span { class: "{muted}", "{role.blurb()}" }
                        }
                    }
                }
            }
        }
    }
}
