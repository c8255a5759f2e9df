//! Theme context for EVO-A.
//!
//! The root [`App`](crate::app::App) creates one [`ThemeStore`] and provides
//! it, together with a reactive mirror of its mode, to every component.
//!
//! ## Usage
//!
//! ```ignore
//! // In any component below App
//! let mode = use_theme_mode();
//! let store = use_theme_store();
//!
//! button { onclick: move |_| { store.toggle(); }, "{mode}" }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use evoa_core::{MemoryPreferences, PreferenceStore, RedbPreferences, ThemeMode, ThemeStore};

use crate::LaunchConfig;

/// Get the launch config resolved from command line args.
pub fn get_launch_config() -> LaunchConfig {
    crate::get_launch_config()
}

/// Build the theme store for this launch.
///
/// Storage that cannot be opened is logged and replaced by in-memory
/// preferences; the app never fails to start because of it.
pub fn open_theme_store(config: &LaunchConfig) -> ThemeStore {
    let storage: Arc<dyn PreferenceStore> = if config.in_memory {
        Arc::new(MemoryPreferences::new())
    } else {
        match RedbPreferences::open_in(&config.data_dir) {
            Ok(prefs) => Arc::new(prefs),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    data_dir = ?config.data_dir,
                    "Preferences unavailable, theme will not be saved"
                );
                return ThemeStore::in_memory(config.theme.unwrap_or_default());
            }
        }
    };

    let store = ThemeStore::open(storage);
    if let Some(mode) = config.theme {
        store.set(mode);
    }
    store
}

/// Hook to access the theme store from context.
pub fn use_theme_store() -> ThemeStore {
    use_context::<ThemeStore>()
}

/// Hook returning the current theme mode.
///
/// Reactive: components re-render when the store notifies a change.
pub fn use_theme_mode() -> ThemeMode {
    let mode = use_context::<SyncSignal<ThemeMode>>();
    mode()
}
