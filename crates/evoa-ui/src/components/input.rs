//! Input Field Components
//!
//! Single-line text inputs styled for both themes. Values are owned by the
//! caller; these components only render and forward keystrokes.

use dioxus::prelude::*;
use evoa_core::{style, Surface, ThemeMode};

/// Properties for the TextInput component
#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    /// Current input value
    pub value: String,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    pub mode: ThemeMode,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, search, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Handler called when Enter is pressed
    #[props(default)]
    pub onsubmit: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
}

/// Text input following the theme surface styles
///
/// # Example
///
/// ```rust,ignore
/// let mut draft = use_signal(String::new);
///
/// rsx! {
///     TextInput {
///         value: draft(),
///         oninput: move |s| draft.set(s),
///         mode: theme(),
///         placeholder: "Add a comment...".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = style(props.mode, Surface::Input).class_with(props.class.as_deref().unwrap_or(""));

    rsx! {
        input {
            class: "{input_class}",
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            oninput: move |e| props.oninput.call(e.value()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    if let Some(handler) = &props.onsubmit {
                        handler.call(());
                    }
                }
            },
        }
    }
}

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    pub mode: ThemeMode,
    #[props(default = "Search...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            TextInput {
                value: props.value,
                oninput: props.oninput,
                mode: props.mode,
                input_type: "search".to_string(),
                placeholder: props.placeholder,
                class: "search-input".to_string(),
            }
        }
    }
}
