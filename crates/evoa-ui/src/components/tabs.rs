//! Tab Pills Component
//!
//! Horizontal row of mutually exclusive tabs.

use dioxus::prelude::*;

/// Properties for the TabPills component
#[derive(Clone, PartialEq, Props)]
pub struct TabPillsProps {
    /// Tab labels in display order
    pub tabs: Vec<String>,
    /// Index of the active tab
    pub active: usize,
    /// Handler called with the index of the clicked tab
    pub on_select: EventHandler<usize>,
}

/// # Example
///
/// ```rust,ignore
/// let mut tab = use_signal(|| 0usize);
///
/// rsx! {
///     TabPills {
///         tabs: vec!["Connections".to_string(), "Requests".to_string()],
///         active: tab(),
///         on_select: move |i| tab.set(i),
///     }
/// }
/// ```
#[component]
pub fn TabPills(props: TabPillsProps) -> Element {
    rsx! {
        div { class: "tab-pills", role: "tablist",
            for (i, label) in props.tabs.iter().enumerate() {
                {
                    let is_active = i == props.active;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{label}",
                            class: if is_active { "tab-pill active" } else { "tab-pill" },
                            role: "tab",
                            "aria-selected": if is_active { "true" } else { "false" },
                            onclick: move |_| on_select.call(i),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
