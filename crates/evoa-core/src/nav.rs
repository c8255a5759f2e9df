//! Navigation bar state: link set, mobile menu and the scroll shadow flag.

use serde::{Deserialize, Serialize};

/// Vertical scroll offset (px) above which the navigation bar casts a shadow.
pub const SCROLL_SHADOW_THRESHOLD: f64 = 5.0;

/// Destinations reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTarget {
    Home,
    Incubator,
    Investor,
    Viewer,
    Profile,
    Privacy,
}

impl NavTarget {
    /// Links in display order.
    pub const ALL: [NavTarget; 6] = [
        NavTarget::Home,
        NavTarget::Incubator,
        NavTarget::Investor,
        NavTarget::Viewer,
        NavTarget::Profile,
        NavTarget::Privacy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Incubator => "Incubator",
            NavTarget::Investor => "Investor",
            NavTarget::Viewer => "Viewer",
            NavTarget::Profile => "Profile",
            NavTarget::Privacy => "Privacy",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Incubator => "/incubator",
            NavTarget::Investor => "/investor",
            NavTarget::Viewer => "/viewer",
            NavTarget::Profile => "/profile",
            NavTarget::Privacy => "/privacy",
        }
    }

    /// The link to highlight for a route path, if any.
    pub fn for_path(path: &str) -> Option<Self> {
        let normalized = path.trim_end_matches('/');
        let normalized = if normalized.is_empty() { "/" } else { normalized };
        Self::ALL.into_iter().find(|t| t.path() == normalized)
    }
}

/// Mobile menu open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions that drive the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger button
    MenuButton,
    /// Click on the dimmed area behind the menu
    Backdrop,
    /// Any navigation link inside the menu
    LinkActivated,
    /// The explicit close (×) button
    CloseButton,
}

impl MenuState {
    /// Apply an event and return the resulting state.
    pub fn on(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::MenuButton => MenuState::Open,
            MenuEvent::Backdrop | MenuEvent::LinkActivated | MenuEvent::CloseButton => {
                MenuState::Closed
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Whether a vertical scroll offset earns the navigation bar shadow.
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_SHADOW_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_opens() {
        assert_eq!(MenuState::Closed.on(MenuEvent::MenuButton), MenuState::Open);
    }

    #[test]
    fn test_each_close_path() {
        for event in [
            MenuEvent::Backdrop,
            MenuEvent::CloseButton,
            MenuEvent::LinkActivated,
        ] {
            let state = MenuState::default().on(MenuEvent::MenuButton).on(event);
            assert_eq!(state, MenuState::Closed, "{event:?}");
        }
    }

    #[test]
    fn test_close_when_closed_stays_closed() {
        assert_eq!(MenuState::Closed.on(MenuEvent::Backdrop), MenuState::Closed);
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(5.0));
        assert!(is_scrolled(5.5));
        assert!(is_scrolled(600.0));
    }

    #[test]
    fn test_target_for_path() {
        assert_eq!(NavTarget::for_path("/"), Some(NavTarget::Home));
        assert_eq!(NavTarget::for_path(""), Some(NavTarget::Home));
        assert_eq!(NavTarget::for_path("/investor/"), Some(NavTarget::Investor));
        assert_eq!(NavTarget::for_path("/login"), None);
    }

    #[test]
    fn test_paths_unique() {
        let mut paths: Vec<_> = NavTarget::ALL.iter().map(|t| t.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), NavTarget::ALL.len());
    }
}
