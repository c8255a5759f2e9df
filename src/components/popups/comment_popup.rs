//! Comments Popup

use dioxus::prelude::*;
use evoa_core::people::{mock_comments, Comment};
use evoa_core::style::{style, Surface};
use evoa_ui::{Avatar, Button, ButtonVariant, Modal, TextInput};

use crate::context::use_theme_mode;

#[component]
pub fn CommentPopup(is_open: bool, on_close: EventHandler<()>) -> Element {
    let mode = use_theme_mode();
    let comments: Vec<Comment> = use_hook(mock_comments);
    let mut draft = use_signal(String::new);
    let muted = style(mode, Surface::MutedText).class();

    rsx! {
        Modal {
            is_open: is_open,
            on_close: on_close,
            title: "Comments".to_string(),
            mode: mode,
            footer: rsx! {
                div { class: "popup-input-row",
                    TextInput {
                        value: draft(),
                        oninput: move |s| draft.set(s),
                        mode: mode,
                        placeholder: "Add a comment...".to_string(),
                    }
                    Button { variant: ButtonVariant::Ghost, "Post" }
                }
            },

            ul { class: "popup-list",
                for comment in comments {
                    li { key: "{comment.id}", class: "popup-row",
                        Avatar { src: comment.avatar.clone(), alt: comment.author.clone() }
                        div { class: "popup-row__body",
                            p {
                                strong { "{comment.author} " }
                                "{comment.text}"
                            }
                            span { class: "{muted}", "{comment.posted}" }
                        }
                    }
                }
            }
        }
    }
}
