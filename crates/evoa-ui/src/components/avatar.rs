//! Avatar images.

use dioxus::prelude::*;

/// Avatar sizes in CSS pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AvatarSize {
    /// Stacked investor faces
    Tiny,
    #[default]
    Small,
    Medium,
    /// Profile hero
    Large,
}

impl AvatarSize {
    pub fn class(&self) -> &'static str {
        match self {
            AvatarSize::Tiny => "avatar avatar--tiny",
            AvatarSize::Small => "avatar avatar--sm",
            AvatarSize::Medium => "avatar avatar--md",
            AvatarSize::Large => "avatar avatar--lg",
        }
    }
}

/// Round avatar. `ring` draws the unseen-story gradient border.
#[component]
pub fn Avatar(
    src: String,
    alt: String,
    #[props(default)] size: AvatarSize,
    #[props(default = false)] ring: bool,
) -> Element {
    let class = if ring {
        format!("{} avatar--ring", size.class())
    } else {
        size.class().to_string()
    };

    rsx! {
        img { class: "{class}", src: "{src}", alt: "{alt}", loading: "lazy" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_size_classes() {
        assert_eq!(AvatarSize::default().class(), "avatar avatar--sm");
        assert_eq!(AvatarSize::Large.class(), "avatar avatar--lg");
    }
}
