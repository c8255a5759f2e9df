//! Theme store behaviour against real and failing preference storage.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use evoa_core::{
    EvoaError, EvoaResult, PreferenceStore, RedbPreferences, ThemeMode, ThemeStore, THEME_KEY,
};
use tempfile::tempdir;

/// Storage whose writes start failing after `ok_writes` successes.
struct FlakyStorage {
    ok_writes: usize,
    writes: AtomicUsize,
}

impl PreferenceStore for FlakyStorage {
    fn get(&self, _key: &str) -> EvoaResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> EvoaResult<()> {
        let n = self.writes.fetch_add(1, Ordering::SeqCst);
        if n < self.ok_writes {
            Ok(())
        } else {
            Err(EvoaError::StorageUnavailable("quota exceeded".to_string()))
        }
    }
}

#[test]
fn test_toggle_persists_each_change() {
    let dir = tempdir().unwrap();
    let prefs = Arc::new(RedbPreferences::open_in(dir.path()).unwrap());
    let store = ThemeStore::open(prefs.clone());

    let original = store.mode();
    for _ in 0..2 {
        let mode = store.toggle();
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some(mode.as_str()));
    }
    assert_eq!(store.mode(), original);
}

#[test]
fn test_mode_restored_on_next_launch() {
    let dir = tempdir().unwrap();
    {
        let prefs = Arc::new(RedbPreferences::open_in(dir.path()).unwrap());
        let store = ThemeStore::open(prefs);
        assert_eq!(store.toggle(), ThemeMode::Light);
    }

    let prefs = Arc::new(RedbPreferences::open_in(dir.path()).unwrap());
    let store = ThemeStore::open(prefs);
    assert_eq!(store.mode(), ThemeMode::Light);
}

#[test]
fn test_unopenable_storage_is_reported() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file in the way").unwrap();

    // The parent "directory" is a regular file.
    let result = RedbPreferences::open_in(&blocker);
    assert!(result.is_err());
}

#[test]
fn test_write_failure_degrades_to_memory() {
    let storage = Arc::new(FlakyStorage {
        ok_writes: 1,
        writes: AtomicUsize::new(0),
    });
    let store = ThemeStore::open(storage.clone());
    assert!(store.is_persistent());

    assert_eq!(store.toggle(), ThemeMode::Light);
    assert!(store.is_persistent());

    // Second write fails: mode still flips, persistence switches off.
    assert_eq!(store.toggle(), ThemeMode::Dark);
    assert!(!store.is_persistent());

    // No further attempts are made against storage.
    assert_eq!(store.toggle(), ThemeMode::Light);
    assert_eq!(storage.writes.load(Ordering::SeqCst), 2);
}

#[test]
fn test_all_clones_observe_toggle() {
    let store = ThemeStore::in_memory(ThemeMode::Dark);
    let shell_view = store.clone();
    let nav_view = store.clone();

    let notified = Arc::new(AtomicUsize::new(0));
    let subs: Vec<_> = (0..3)
        .map(|_| {
            let notified = notified.clone();
            store.subscribe(move |_| {
                notified.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    nav_view.toggle();
    assert_eq!(shell_view.mode(), ThemeMode::Light);
    assert_eq!(notified.load(Ordering::SeqCst), 3);

    drop(subs);
    assert_eq!(store.subscriber_count(), 0);
}
