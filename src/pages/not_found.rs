use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "Unknown route");

    rsx! {
        section { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Landing {}, class: "btn btn-primary", "Back home" }
        }
    }
}
