//! Theme mode and the observable theme store.
//!
//! [`ThemeStore`] is the only process-wide mutable state in the app. It is
//! created once at the application root, handed to views through context, and
//! fans out every change to its subscribers synchronously.
//!
//! Storage failures never reach the user: they are logged and the store keeps
//! working in memory for the rest of the process.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::EvoaError;
use crate::storage::PreferenceStore;

/// Preference key holding the persisted theme mode.
pub const THEME_KEY: &str = "evoa-theme";

/// Binary display mode applied to every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Label for the toggle control: names the mode a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "Switch to light mode",
            ThemeMode::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = EvoaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(EvoaError::UnknownValue {
                key: THEME_KEY.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

type Listener = Arc<dyn Fn(ThemeMode) + Send + Sync>;

struct Inner {
    mode: ThemeMode,
    /// `None` when running in memory, either by choice or after a failure.
    storage: Option<Arc<dyn PreferenceStore>>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Shared, observable theme state.
///
/// Cloning the store clones the handle; all clones see the same mode.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<RwLock<Inner>>,
}

impl ThemeStore {
    /// Create a store backed by `storage`, loading the persisted mode.
    ///
    /// Falls back to [`ThemeMode::Dark`] when nothing is stored or the stored
    /// value is unrecognised. A failing read disables persistence.
    pub fn open(storage: Arc<dyn PreferenceStore>) -> Self {
        let (mode, storage) = match storage.get(THEME_KEY) {
            Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
                Ok(mode) => (mode, Some(storage)),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring persisted theme, using default");
                    (ThemeMode::default(), Some(storage))
                }
            },
            Ok(None) => (ThemeMode::default(), Some(storage)),
            Err(e) => {
                tracing::warn!(error = %e, "Theme storage unavailable, continuing in memory");
                (ThemeMode::default(), None)
            }
        };

        tracing::info!(mode = %mode, persistent = storage.is_some(), "Theme store ready");

        Self::with_parts(mode, storage)
    }

    /// Create a store that never touches persistent storage.
    pub fn in_memory(mode: ThemeMode) -> Self {
        Self::with_parts(mode, None)
    }

    fn with_parts(mode: ThemeMode, storage: Option<Arc<dyn PreferenceStore>>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                mode,
                storage,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.inner.read().mode
    }

    /// Whether changes are still being written to storage.
    pub fn is_persistent(&self) -> bool {
        self.inner.read().storage.is_some()
    }

    /// Flip Dark/Light, persist, and notify subscribers. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        self.apply(ThemeMode::toggled).0
    }

    /// Switch to `mode`. Persists and notifies only if the mode changed.
    pub fn set(&self, mode: ThemeMode) -> bool {
        self.apply(|_| mode).1
    }

    /// Compute the next mode from the current one under the write lock, so
    /// concurrent toggles never read a stale mode.
    fn apply(&self, next: impl FnOnce(ThemeMode) -> ThemeMode) -> (ThemeMode, bool) {
        let (mode, listeners): (ThemeMode, Vec<Listener>) = {
            let mut inner = self.inner.write();
            let mode = next(inner.mode);
            if mode == inner.mode {
                return (mode, false);
            }
            inner.mode = mode;

            if let Some(storage) = inner.storage.as_ref() {
                if let Err(e) = storage.set(THEME_KEY, mode.as_str()) {
                    tracing::warn!(
                        error = %e,
                        "Failed to persist theme, continuing in memory"
                    );
                    inner.storage = None;
                }
            }

            (mode, inner.listeners.iter().map(|(_, l)| l.clone()).collect())
        };

        tracing::info!(mode = %mode, "Theme changed");

        // Notify outside the lock so listeners may read the store.
        for listener in listeners {
            listener(mode);
        }
        (mode, true)
    }

    /// Register a listener called with the new mode after every change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        let mut inner = self.inner.write();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.read().listeners.len()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("ThemeStore")
            .field("mode", &inner.mode)
            .field("persistent", &inner.storage.is_some())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Handle that keeps a theme listener registered.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    store: Weak<RwLock<Inner>>,
}

impl Subscription {
    /// Remove the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.write().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvoaResult;
    use crate::storage::MemoryPreferences;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct BrokenStorage;

    impl PreferenceStore for BrokenStorage {
        fn get(&self, _key: &str) -> EvoaResult<Option<String>> {
            Err(EvoaError::StorageUnavailable("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> EvoaResult<()> {
            Err(EvoaError::StorageUnavailable("disabled".to_string()))
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" Light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_mode_serde_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn test_default_is_dark() {
        let store = ThemeStore::open(Arc::new(MemoryPreferences::new()));
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert!(store.is_persistent());
    }

    #[test]
    fn test_loads_persisted_mode() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set(THEME_KEY, "light").unwrap();
        let store = ThemeStore::open(prefs);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_unknown_persisted_value_falls_back() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set(THEME_KEY, "neon").unwrap();
        let store = ThemeStore::open(prefs);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert!(store.is_persistent());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = ThemeStore::open(prefs.clone());

        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_broken_storage_degrades() {
        let store = ThemeStore::open(Arc::new(BrokenStorage));
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert!(!store.is_persistent());

        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        let store = ThemeStore::in_memory(ThemeMode::Dark);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(RwLock::new(None));

        let calls_in = calls.clone();
        let seen_in = seen.clone();
        let _sub = store.subscribe(move |mode| {
            calls_in.fetch_add(1, Ordering::SeqCst);
            *seen_in.write() = Some(mode);
        });

        store.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.read(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = ThemeStore::in_memory(ThemeMode::Dark);
        let observed = Arc::new(RwLock::new(None));

        let store_in = store.clone();
        let observed_in = observed.clone();
        let _sub = store.subscribe(move |_| {
            *observed_in.write() = Some(store_in.mode());
        });

        store.toggle();
        assert_eq!(*observed.read(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_unsubscribe_on_drop() {
        let store = ThemeStore::in_memory(ThemeMode::Dark);
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_in = calls.clone();
        let sub = store.subscribe(move |_| {
            calls_in.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.subscriber_count(), 1);

        sub.unsubscribe();
        assert_eq!(store.subscriber_count(), 0);

        store.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_same_mode_is_noop() {
        let store = ThemeStore::in_memory(ThemeMode::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = calls.clone();
        let _sub = store.subscribe(move |_| {
            calls_in.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!store.set(ThemeMode::Light));
        assert!(store.set(ThemeMode::Dark));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_toggles_are_not_lost() {
        let store = ThemeStore::in_memory(ThemeMode::Dark);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = calls.clone();
        let _sub = store.subscribe(move |_| {
            calls_in.fetch_add(1, Ordering::SeqCst);
        });

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        store.toggle();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // 1000 flips: every one notified, and an even count lands back on Dark.
        assert_eq!(calls.load(Ordering::SeqCst), 1000);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_subscription_outlives_store() {
        let store = ThemeStore::in_memory(ThemeMode::Dark);
        let sub = store.subscribe(|_| {});
        drop(store);
        // Dropping after the store is gone must not panic.
        drop(sub);
    }
}
