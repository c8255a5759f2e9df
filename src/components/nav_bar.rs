//! Navigation Bar Component
//!
//! Desktop: brand, inline links, theme toggle.
//! Narrow windows: links collapse into a slide-in menu behind a hamburger.

use dioxus::prelude::*;
use evoa_core::nav::{is_scrolled, MenuEvent, MenuState, NavTarget};
use evoa_core::style::{nav_bar_class, style, Surface};
use evoa_core::ThemeMode;
use evoa_ui::{CloseButton, IconButton};

use crate::app::Route;
use crate::components::{Icon, IconKind};
use crate::context::{use_theme_mode, use_theme_store};

/// Registers a passive window scroll listener that reports `scrollY`.
const SCROLL_LISTENER_JS: &str = r#"
if (window.__evoaScroll) {
    window.removeEventListener('scroll', window.__evoaScroll);
}
window.__evoaScroll = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', window.__evoaScroll, { passive: true });
dioxus.send(window.scrollY);
"#;

const SCROLL_UNLISTEN_JS: &str = r#"
if (window.__evoaScroll) {
    window.removeEventListener('scroll', window.__evoaScroll);
    window.__evoaScroll = undefined;
}
"#;

#[component]
pub fn NavBar() -> Element {
    let store = use_theme_store();
    let mode = use_theme_mode();
    let route = use_route::<Route>();
    let current = NavTarget::for_path(&route.to_string());

    let mut menu = use_signal(MenuState::default);
    let mut scrolled = use_signal(|| false);

    // Scroll shadow: listener lives exactly as long as the navigation bar
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(SCROLL_LISTENER_JS);
            while let Ok(offset) = eval.recv::<f64>().await {
                let next = is_scrolled(offset);
                if *scrolled.peek() != next {
                    scrolled.set(next);
                }
            }
        });
    });

    use_drop(move || {
        document::eval(SCROLL_UNLISTEN_JS);
    });

    let mut dispatch = move |event: MenuEvent| {
        let next = menu.peek().on(event);
        tracing::debug!(?event, ?next, "Mobile menu");
        menu.set(next);
    };

    let on_toggle_theme = move |_| {
        store.toggle();
    };

    let link_class = move |target: NavTarget| {
        if Some(target) == current {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let header_class = nav_bar_class(mode, scrolled());
    let menu_class = style(mode, Surface::MobileMenu).class();

    rsx! {
        header { class: "{header_class}",
            div { class: "navbar-inner",
                Link { to: Route::Landing {}, class: "navbar-brand",
                    span { class: "brand-mark", "EVO" }
                    span { class: "brand-accent", "-A" }
                }

                nav { class: "nav-links",
                    for target in NavTarget::ALL {
                        Link {
                            key: "{target.path()}",
                            to: Route::for_target(target),
                            class: link_class(target),
                            "{target.label()}"
                        }
                    }
                }

                div { class: "navbar-actions",
                    IconButton {
                        onclick: on_toggle_theme,
                        aria_label: mode.toggle_label().to_string(),
                        class: "theme-toggle".to_string(),
                        pressed: mode == ThemeMode::Light,
                        {theme_icon(mode)}
                    }
                    IconButton {
                        onclick: move |_| dispatch(MenuEvent::MenuButton),
                        aria_label: "Open menu".to_string(),
                        class: "menu-button".to_string(),
                        Icon { kind: IconKind::Menu }
                    }
                }
            }
        }

        if menu().is_open() {
            div {
                class: "menu-backdrop",
                onclick: move |_| dispatch(MenuEvent::Backdrop),
            }
            aside { class: "{menu_class}",
                div { class: "mobile-menu-header",
                    span { class: "navbar-brand", "EVO-A" }
                    CloseButton { onclick: move |_| dispatch(MenuEvent::CloseButton) }
                }
                nav { class: "mobile-menu-links",
                    for target in NavTarget::ALL {
                        Link {
                            key: "{target.path()}",
                            to: Route::for_target(target),
                            class: link_class(target),
                            onclick: move |_| dispatch(MenuEvent::LinkActivated),
                            "{target.label()}"
                        }
                    }
                }
            }
        }
    }
}

/// The icon shows the mode a click switches to.
fn theme_icon(mode: ThemeMode) -> Element {
    match mode {
        ThemeMode::Dark => rsx! { Icon { kind: IconKind::Sun } },
        ThemeMode::Light => rsx! { Icon { kind: IconKind::Moon } },
    }
}
