//! Theme-dependent style selection.
//!
//! Views never branch on the theme inline; they ask for the descriptor of a
//! [`Surface`] under the current [`ThemeMode`] and render its class list.

use crate::theme::ThemeMode;

/// Route paths that take the whole viewport (no scrolling page chrome).
const FULL_SCREEN_PATHS: &[&str] = &["/login"];

/// Vertical sizing of the shell container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerHeight {
    /// Exactly one viewport tall (login)
    FullScreen,
    /// At least one viewport tall, grows with content
    MinScreen,
}

impl ContainerHeight {
    /// Sizing for a route path.
    pub fn for_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let normalized = path.trim_end_matches('/');
        if FULL_SCREEN_PATHS.contains(&normalized) {
            ContainerHeight::FullScreen
        } else {
            ContainerHeight::MinScreen
        }
    }
}

/// One of the four shell container variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellStyle {
    DarkFullScreen,
    DarkMinScreen,
    LightFullScreen,
    LightMinScreen,
}

impl ShellStyle {
    /// Pure selection from theme and container sizing.
    pub fn select(mode: ThemeMode, height: ContainerHeight) -> Self {
        match (mode, height) {
            (ThemeMode::Dark, ContainerHeight::FullScreen) => ShellStyle::DarkFullScreen,
            (ThemeMode::Dark, ContainerHeight::MinScreen) => ShellStyle::DarkMinScreen,
            (ThemeMode::Light, ContainerHeight::FullScreen) => ShellStyle::LightFullScreen,
            (ThemeMode::Light, ContainerHeight::MinScreen) => ShellStyle::LightMinScreen,
        }
    }

    /// Convenience for the shell: select straight from a route path.
    pub fn for_route(mode: ThemeMode, path: &str) -> Self {
        Self::select(mode, ContainerHeight::for_path(path))
    }

    pub fn class(&self) -> &'static str {
        match self {
            ShellStyle::DarkFullScreen => "shell shell--dark shell--full",
            ShellStyle::DarkMinScreen => "shell shell--dark shell--min",
            ShellStyle::LightFullScreen => "shell shell--light shell--full",
            ShellStyle::LightMinScreen => "shell shell--light shell--min",
        }
    }
}

/// UI regions whose look depends on the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    NavBar,
    MobileMenu,
    Card,
    StatusStrip,
    Popup,
    Input,
    PrimaryText,
    MutedText,
    Section,
}

impl Surface {
    fn base(&self) -> &'static str {
        match self {
            Surface::NavBar => "navbar",
            Surface::MobileMenu => "mobile-menu",
            Surface::Card => "pitch-card",
            Surface::StatusStrip => "status-strip",
            Surface::Popup => "popup",
            Surface::Input => "field",
            Surface::PrimaryText => "text-primary",
            Surface::MutedText => "text-muted",
            Surface::Section => "section",
        }
    }
}

/// Resolved style for one surface under one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleDescriptor {
    pub surface: Surface,
    pub mode: ThemeMode,
}

impl StyleDescriptor {
    /// Class list, e.g. `"pitch-card pitch-card--dark"`.
    pub fn class(&self) -> String {
        let base = self.surface.base();
        format!("{} {}--{}", base, base, self.mode.as_str())
    }

    /// Class list with caller-supplied extras appended.
    pub fn class_with(&self, extra: &str) -> String {
        if extra.is_empty() {
            self.class()
        } else {
            format!("{} {}", self.class(), extra)
        }
    }
}

/// Style descriptor for `surface` under `mode`.
pub fn style(mode: ThemeMode, surface: Surface) -> StyleDescriptor {
    StyleDescriptor { surface, mode }
}

/// Navigation bar class, including the shadow applied once scrolled.
pub fn nav_bar_class(mode: ThemeMode, scrolled: bool) -> String {
    let descriptor = style(mode, Surface::NavBar);
    if scrolled {
        descriptor.class_with("navbar--scrolled")
    } else {
        descriptor.class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_login_is_full_screen() {
        assert_eq!(ContainerHeight::for_path("/login"), ContainerHeight::FullScreen);
        assert_eq!(ContainerHeight::for_path("/login/"), ContainerHeight::FullScreen);
        assert_eq!(ContainerHeight::for_path("/login?next=1"), ContainerHeight::FullScreen);
    }

    #[test]
    fn test_other_routes_min_screen() {
        for path in ["/", "", "/investor", "/profile", "/loginx", "/privacy"] {
            assert_eq!(ContainerHeight::for_path(path), ContainerHeight::MinScreen, "{path}");
        }
    }

    #[test]
    fn test_shell_variants_distinct() {
        let mut classes = HashSet::new();
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            for height in [ContainerHeight::FullScreen, ContainerHeight::MinScreen] {
                classes.insert(ShellStyle::select(mode, height).class());
            }
        }
        assert_eq!(classes.len(), 4);
    }

    #[test]
    fn test_shell_for_route() {
        assert_eq!(
            ShellStyle::for_route(ThemeMode::Light, "/login"),
            ShellStyle::LightFullScreen
        );
        assert_eq!(
            ShellStyle::for_route(ThemeMode::Dark, "/viewer"),
            ShellStyle::DarkMinScreen
        );
    }

    #[test]
    fn test_descriptor_class() {
        assert_eq!(
            style(ThemeMode::Dark, Surface::Card).class(),
            "pitch-card pitch-card--dark"
        );
        assert_eq!(
            style(ThemeMode::Light, Surface::Popup).class_with("popup--wide"),
            "popup popup--light popup--wide"
        );
    }

    #[test]
    fn test_nav_bar_scrolled_shadow() {
        assert_eq!(nav_bar_class(ThemeMode::Dark, false), "navbar navbar--dark");
        assert_eq!(
            nav_bar_class(ThemeMode::Light, true),
            "navbar navbar--light navbar--scrolled"
        );
    }
}
