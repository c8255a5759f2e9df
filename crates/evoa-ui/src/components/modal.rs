//! Modal frame shared by every popup.

use dioxus::prelude::*;
use evoa_core::{style, Surface, ThemeMode};

use super::CloseButton;

/// How a modal was dismissed, recorded in the close log.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CloseReason {
    Backdrop,
    Escape,
    Button,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseReason::Backdrop => "backdrop",
            CloseReason::Escape => "escape",
            CloseReason::Button => "button",
        }
    }
}

/// Properties for the Modal component
#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// Nothing is rendered while false
    pub is_open: bool,
    pub on_close: EventHandler<()>,
    pub title: String,
    pub mode: ThemeMode,
    pub children: Element,
    /// Optional footer (input row, actions)
    #[props(default)]
    pub footer: Option<Element>,
    #[props(default)]
    pub class: Option<String>,
}

/// Overlay with a dimmed backdrop and a centered panel.
///
/// Clicking the backdrop, the close button, or pressing Escape calls
/// `on_close`; clicks inside the panel do not.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.is_open {
        return rsx! {};
    }

    let panel_class =
        style(props.mode, Surface::Popup).class_with(props.class.as_deref().unwrap_or(""));
    let on_close = props.on_close;
    let close = move |reason: CloseReason| {
        tracing::debug!(reason = reason.as_str(), "Modal closed");
        on_close.call(());
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| close(CloseReason::Backdrop),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    close(CloseReason::Escape);
                }
            },

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{props.title}",
                onclick: move |e| e.stop_propagation(),

                header { class: "popup-header",
                    h2 { class: "popup-title", "{props.title}" }
                    CloseButton { onclick: move |_| close(CloseReason::Button) }
                }

                div { class: "popup-body", {props.children} }

                if let Some(footer_content) = props.footer {
                    footer { class: "popup-footer", {footer_content} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_reasons_have_distinct_labels() {
        let labels = [
            CloseReason::Backdrop.as_str(),
            CloseReason::Escape.as_str(),
            CloseReason::Button.as_str(),
        ];
        assert_eq!(labels, ["backdrop", "escape", "button"]);
    }
}
