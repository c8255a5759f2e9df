//! Connections Popup
//!
//! Two tabs: accepted connections and incoming requests.

use dioxus::prelude::*;
use evoa_core::people::{mock_connection_requests, mock_connections, Connection};
use evoa_core::style::{style, Surface};
use evoa_ui::{Avatar, Button, ButtonVariant, Modal, TabPills};

use crate::context::use_theme_mode;

const TAB_CONNECTIONS: usize = 0;
const TAB_REQUESTS: usize = 1;

#[component]
pub fn ConnectionsPopup(is_open: bool, on_close: EventHandler<()>) -> Element {
    let mode = use_theme_mode();
    let connections: Vec<Connection> = use_hook(mock_connections);
    let requests: Vec<Connection> = use_hook(mock_connection_requests);
    let mut active_tab = use_signal(|| TAB_CONNECTIONS);
    let muted = style(mode, Surface::MutedText).class();

    let showing_requests = active_tab() == TAB_REQUESTS;
    let rows = if showing_requests { requests.clone() } else { connections.clone() };

    rsx! {
        Modal {
            is_open: is_open,
            on_close: on_close,
            title: "Connections".to_string(),
            mode: mode,

            TabPills {
                tabs: vec![
                    format!("Connections ({})", connections.len()),
                    format!("Requests ({})", requests.len()),
                ],
                active: active_tab(),
                on_select: move |i| active_tab.set(i),
            }

            ul { class: "popup-list",
                for person in rows {
                    li { key: "{person.id}", class: "popup-row",
                        Avatar { src: person.avatar.clone(), alt: person.name.clone() }
                        div { class: "popup-row__body",
                            strong { "{person.name}" }
                            span { class: "{muted}", "{person.role}" }
                            span { class: "{muted}", "{person.mutual} mutual" }
                        }
                        if showing_requests {
                            div { class: "popup-row__actions",
                                Button { variant: ButtonVariant::Primary, "Accept" }
                                Button { variant: ButtonVariant::Ghost, "Ignore" }
                            }
                        } else {
                            Button { variant: ButtonVariant::Secondary, "Message" }
                        }
                    }
                }
            }
        }
    }
}
