use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use evoa_core::NavTarget;

use crate::components::Shell;
use crate::context::{get_launch_config, open_theme_store};
use crate::pages::{Incubator, Investor, Landing, Login, NotFound, Privacy, Profile, Viewer};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Every route renders inside [`Shell`], which draws the navigation bar and
/// picks the container style from the path and theme.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/login")]
        Login {},
        #[route("/incubator")]
        Incubator {},
        #[route("/investor")]
        Investor {},
        #[route("/viewer")]
        Viewer {},
        #[route("/profile")]
        Profile {},
        #[route("/privacy")]
        Privacy {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Route behind a navigation bar link.
    pub fn for_target(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Landing {},
            NavTarget::Incubator => Route::Incubator {},
            NavTarget::Investor => Route::Investor {},
            NavTarget::Viewer => Route::Viewer {},
            NavTarget::Profile => Route::Profile {},
            NavTarget::Privacy => Route::Privacy {},
        }
    }
}

/// Root application component.
///
/// Owns the theme store for the lifetime of the window: creates it on mount,
/// mirrors its mode into a signal for reactive rendering, and releases the
/// subscription on unmount.
#[component]
pub fn App() -> Element {
    let store = use_hook(|| open_theme_store(&get_launch_config()));
    let mode = use_signal_sync(|| store.mode());

    use_context_provider(|| store.clone());
    use_context_provider(|| mode);

    let subscription = use_hook(|| {
        let sub = store.subscribe(move |next| {
            let mut mode = mode;
            mode.set(next);
        });
        Rc::new(RefCell::new(Some(sub)))
    });

    use_drop(move || {
        if let Some(sub) = subscription.borrow_mut().take() {
            sub.unsubscribe();
            tracing::debug!("Theme subscription released");
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_resolve_to_their_paths() {
        for target in NavTarget::ALL {
            assert_eq!(Route::for_target(target).to_string(), target.path());
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        let route: Route = "/does/not/exist".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
