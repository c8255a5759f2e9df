//! View Shell
//!
//! Layout wrapping every route: picks the container variant from the current
//! path and theme, then renders the navigation bar above the active view.

use dioxus::prelude::*;
use evoa_core::ShellStyle;

use crate::app::Route;
use crate::components::NavBar;
use crate::context::use_theme_mode;

#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();
    let mode = use_theme_mode();
    let shell = ShellStyle::for_route(mode, &route.to_string());

    rsx! {
        div { class: "{shell.class()}",
            NavBar {}
            main { class: "shell-content",
                Outlet::<Route> {}
            }
        }
    }
}
