//! Message Sender Popup
//!
//! Pick a contact to share a pitch with. The list narrows on every keystroke.

use dioxus::prelude::*;
use evoa_core::people::{filter_contacts, mock_contacts, Contact};
use evoa_core::style::{style, Surface};
use evoa_ui::{Avatar, Button, ButtonVariant, Modal, SearchInput, TextInput};

use crate::context::use_theme_mode;

#[component]
pub fn MessageSender(is_open: bool, on_close: EventHandler<()>) -> Element {
    let mode = use_theme_mode();
    let contacts: Vec<Contact> = use_hook(mock_contacts);
    let mut query = use_signal(String::new);
    let mut message = use_signal(String::new);
    let muted = style(mode, Surface::MutedText).class();

    let query_value = query();
    let visible: Vec<Contact> = filter_contacts(&contacts, &query_value)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        Modal {
            is_open: is_open,
            on_close: on_close,
            title: "Send to".to_string(),
            mode: mode,
            footer: rsx! {
                div { class: "popup-input-row",
                    TextInput {
                        value: message(),
                        oninput: move |s| message.set(s),
                        mode: mode,
                        placeholder: "Write a message...".to_string(),
                    }
                    Button { variant: ButtonVariant::Primary, "Send" }
                }
            },

            SearchInput {
                value: query_value.clone(),
                oninput: move |s| query.set(s),
                mode: mode,
                placeholder: "Search contacts".to_string(),
            }

            if visible.is_empty() {
                p { class: "popup-empty {muted}", "No contacts match \"{query_value}\"" }
            } else {
                ul { class: "popup-list",
                    for contact in visible {
                        li { key: "{contact.id}", class: "popup-row",
                            Avatar { src: contact.avatar.clone(), alt: contact.name.clone() }
                            div { class: "popup-row__body",
                                strong { "{contact.name}" }
                                span { class: "{muted}", "{contact.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
