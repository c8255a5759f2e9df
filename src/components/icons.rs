//! Inert Lucide glyphs.

use dioxus::prelude::*;

/// Glyphs used across the app
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Heart,
    Comment,
    Share,
    Bookmark,
    Eye,
    Pointer,
    Sun,
    Moon,
    Menu,
    Globe,
    Link,
    Sparkles,
    Send,
}

/// SVG for `kind`, stroked with `currentColor`.
///
/// `filled` fills the shape too (liked heart, saved bookmark).
#[component]
pub fn Icon(kind: IconKind, #[props(default = 20)] size: u32, #[props(default = false)] filled: bool) -> Element {
    let fill = if filled { "currentColor" } else { "none" };

    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {paths(kind)}
        }
    }
}

fn paths(kind: IconKind) -> Element {
    match kind {
        IconKind::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        IconKind::Comment => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
        IconKind::Share => rsx! {
            path { d: "m22 2-7 20-4-9-9-4Z" }
            path { d: "M22 2 11 13" }
        },
        IconKind::Bookmark => rsx! {
            path { d: "m19 21-7-4-7 4V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16z" }
        },
        IconKind::Eye => rsx! {
            path { d: "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" }
            circle { cx: "12", cy: "12", r: "3" }
        },
        IconKind::Pointer => rsx! {
            path { d: "m9 9 5 12 1.8-5.2L21 14Z" }
            path { d: "M7.2 2.2 8 5.1" }
            path { d: "m5.1 8-2.9-.8" }
            path { d: "M14 4.1 12 6" }
            path { d: "m6 12-1.9 2" }
        },
        IconKind::Sun => rsx! {
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        },
        IconKind::Moon => rsx! {
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        },
        IconKind::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        IconKind::Globe => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        },
        IconKind::Link => rsx! {
            path { d: "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" }
            path { d: "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" }
        },
        IconKind::Sparkles => rsx! {
            path { d: "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z" }
        },
        IconKind::Send => rsx! {
            path { d: "m3 3 3 9-3 9 19-9Z" }
            path { d: "M6 12h16" }
        },
    }
}
