//! Role feeds. Each route mounts its own [`FeedView`].

use dioxus::prelude::*;
use evoa_core::feed::FeedRole;

use crate::components::FeedView;

#[component]
pub fn Incubator() -> Element {
    rsx! { FeedView { role: FeedRole::Incubator } }
}

/// Investor feed; the only one with the deal assistant.
#[component]
pub fn Investor() -> Element {
    rsx! { FeedView { role: FeedRole::Investor } }
}

#[component]
pub fn Viewer() -> Element {
    rsx! { FeedView { role: FeedRole::Viewer } }
}
