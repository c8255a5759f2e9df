//! Property-based tests for theme, filtering and card state.
//!
//! Uses proptest to check invariants over arbitrary inputs.

use proptest::prelude::*;

use evoa_core::people::mock_contacts;
use evoa_core::{
    filter_contacts, reply_for, CardAction, CardHooks, CardState, ContainerHeight, MenuEvent,
    MenuState, ShellStyle, ThemeMode, ThemeStore,
};

fn card_action() -> impl Strategy<Value = CardAction> {
    prop_oneof![
        Just(CardAction::Like),
        Just(CardAction::Comment),
        Just(CardAction::Share),
        Just(CardAction::Save),
    ]
}

fn menu_event() -> impl Strategy<Value = MenuEvent> {
    prop_oneof![
        Just(MenuEvent::MenuButton),
        Just(MenuEvent::Backdrop),
        Just(MenuEvent::LinkActivated),
        Just(MenuEvent::CloseButton),
    ]
}

proptest! {
    /// Even toggle counts restore the starting mode
    #[test]
    fn toggle_parity(n in 0usize..40, start_light in any::<bool>()) {
        let start = if start_light { ThemeMode::Light } else { ThemeMode::Dark };
        let store = ThemeStore::in_memory(start);
        for _ in 0..n {
            store.toggle();
        }
        let expected = if n % 2 == 0 { start } else { start.toggled() };
        prop_assert_eq!(store.mode(), expected);
    }

    /// Every filtered contact contains the query, ignoring case
    #[test]
    fn filter_results_match(query in "[a-zA-Z ]{0,6}") {
        let contacts = mock_contacts();
        let found = filter_contacts(&contacts, &query);
        if query.is_empty() {
            prop_assert_eq!(found.len(), contacts.len());
        }
        for c in found {
            prop_assert!(c.name.to_lowercase().contains(&query.to_lowercase()));
        }
    }

    /// Liked/saved flip once per Like/Save activation
    #[test]
    fn card_flags_track_parity(actions in prop::collection::vec(card_action(), 0..50)) {
        let mut state = CardState::default();
        let hooks = CardHooks::default();
        for action in &actions {
            state.activate(*action, "p", &hooks);
        }
        let likes = actions.iter().filter(|a| **a == CardAction::Like).count();
        let saves = actions.iter().filter(|a| **a == CardAction::Save).count();
        prop_assert_eq!(state.liked, likes % 2 == 1);
        prop_assert_eq!(state.saved, saves % 2 == 1);
    }

    /// The menu is open exactly when the last event was the menu button
    #[test]
    fn menu_reflects_last_event(events in prop::collection::vec(menu_event(), 1..30)) {
        let state = events.iter().fold(MenuState::Closed, |s, e| s.on(*e));
        let last = *events.last().unwrap();
        prop_assert_eq!(state.is_open(), last == MenuEvent::MenuButton);
    }

    /// Reply generation never fails and never returns an empty string
    #[test]
    fn reply_always_present(input in ".{0,80}") {
        prop_assert!(!reply_for(&input).is_empty());
    }

    /// Shell style only depends on theme and the login path
    #[test]
    fn shell_style_for_non_login(segment in "[a-z]{1,10}") {
        prop_assume!(segment != "login");
        let path = format!("/{segment}");
        prop_assert_eq!(ContainerHeight::for_path(&path), ContainerHeight::MinScreen);
        prop_assert_eq!(
            ShellStyle::for_route(ThemeMode::Dark, &path),
            ShellStyle::DarkMinScreen
        );
    }
}
