//! EVO-A Core Library
//!
//! Renderer-independent logic behind the EVO-A desktop app: a social feed
//! where startups pitch, investors scout, and everyone else follows along.
//!
//! ## Overview
//!
//! All content is local mock data. The only state that outlives the process
//! is the Dark/Light theme preference.
//!
//! - [`theme`]: the observable [`ThemeStore`] and [`ThemeMode`]
//! - [`storage`]: the key-value seam the theme store persists through
//! - [`style`]: pure `(theme, surface) -> class` selection
//! - [`nav`]: navigation targets, mobile menu state machine, scroll shadow
//! - [`pitch`] / [`feed`]: pitch records, card toggle state, role feeds
//! - [`people`]: popup mock lists and contact search
//! - [`popup`]: per-opening popup targets
//! - [`assistant`]: investor assistant responder with cancellable replies
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use evoa_core::{RedbPreferences, ThemeStore};
//!
//! let prefs = RedbPreferences::open_in("~/.local/share/evoa")?;
//! let store = ThemeStore::open(Arc::new(prefs));
//!
//! let _sub = store.subscribe(|mode| println!("theme is now {mode}"));
//! store.toggle();
//! ```

pub mod assistant;
pub mod error;
pub mod feed;
pub mod nav;
pub mod people;
pub mod pitch;
pub mod popup;
pub mod profile;
pub mod storage;
pub mod style;
pub mod theme;

// Re-exports
pub use assistant::{reply_for, AssistantChat, ChatMessage, PendingReply, Sender, REPLY_DELAY};
pub use error::{EvoaError, EvoaResult};
pub use feed::{mock_feed, mock_stories, FeedRole, StoryItem};
pub use nav::{is_scrolled, MenuEvent, MenuState, NavTarget};
pub use people::{filter_contacts, Comment, Connection, Contact};
pub use pitch::{
    format_count, CardAction, CardHooks, CardState, DealTerms, ExternalLinks, MediaRef, Metrics,
    PitchAuthor, PitchRecord,
};
pub use popup::PopupTarget;
pub use profile::{mock_profile, StartupProfile};
pub use storage::{MemoryPreferences, PreferenceStore, RedbPreferences};
pub use style::{style, ContainerHeight, ShellStyle, StyleDescriptor, Surface};
pub use theme::{Subscription, ThemeMode, ThemeStore, THEME_KEY};
