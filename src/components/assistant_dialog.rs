//! Investor Assistant Dialog
//!
//! Floating button that opens a small chat panel. Replies come from the
//! canned responder in `evoa_core::assistant` after a short delay.

use dioxus::prelude::*;
use evoa_core::assistant::{AssistantChat, ChatMessage};
use evoa_core::style::{style, Surface};
use evoa_ui::{CloseButton, IconButton, TextInput};

use crate::components::{Icon, IconKind};
use crate::context::use_theme_mode;

#[component]
pub fn AssistantDialog() -> Element {
    let mode = use_theme_mode();
    let mut chat = use_signal(AssistantChat::new);
    let mut draft = use_signal(String::new);

    let mut send = move || {
        let text = draft();
        let pending = chat.write().send(&text);
        let Some(pending) = pending else {
            return;
        };
        draft.set(String::new());

        // Scoped to this component: dropped with it on unmount. Closing the
        // dialog cancels the reply through the chat's session token.
        spawn(async move {
            if let Some(reply) = pending.wait().await {
                chat.write().deliver(reply);
            }
        });
    };

    let panel_class = style(mode, Surface::Popup).class_with("assistant-panel");
    let is_open = chat.read().is_open();
    let messages: Vec<ChatMessage> = chat.read().messages().to_vec();

    rsx! {
        if is_open {
            section { class: "{panel_class}", role: "dialog", "aria-label": "Deal assistant",
                header { class: "popup-header",
                    h2 { class: "popup-title",
                        Icon { kind: IconKind::Sparkles, size: 16 }
                        " Deal assistant"
                    }
                    CloseButton { onclick: move |_| chat.write().close() }
                }

                div { class: "assistant-messages",
                    for message in messages {
                        div {
                            key: "{message.id}",
                            class: if message.is_user() { "bubble bubble--user" } else { "bubble bubble--assistant" },
                            p { "{message.text}" }
                            span { class: "bubble-time", "{message.time_label()}" }
                        }
                    }
                }

                div { class: "popup-input-row",
                    TextInput {
                        value: draft(),
                        oninput: move |s| draft.set(s),
                        mode: mode,
                        placeholder: "Ask about risk, valuation, market...".to_string(),
                        onsubmit: move |_| send(),
                    }
                    IconButton {
                        onclick: move |_| send(),
                        aria_label: "Send".to_string(),
                        class: "assistant-send".to_string(),
                        Icon { kind: IconKind::Send, size: 18 }
                    }
                }
            }
        } else {
            button {
                class: "assistant-fab",
                "aria-label": "Open deal assistant",
                onclick: move |_| chat.write().open(),
                Icon { kind: IconKind::Sparkles }
            }
        }
    }
}
