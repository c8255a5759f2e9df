//! End-to-end checks of feed, popup and assistant behaviour.

use std::cell::RefCell;
use std::time::Duration;

use evoa_core::people::mock_contacts;
use evoa_core::{
    filter_contacts, mock_feed, AssistantChat, CardAction, CardHooks, CardState, FeedRole,
    MenuEvent, MenuState, PopupTarget, Sender, REPLY_DELAY,
};

#[test]
fn test_like_on_every_unliked_pitch() {
    for role in FeedRole::ALL {
        for record in mock_feed(role).into_iter().filter(|r| !r.liked) {
            let calls = RefCell::new(Vec::new());
            let hooks = CardHooks::new().on_like(|id| calls.borrow_mut().push(id.to_string()));

            let mut state = CardState::from_record(&record);
            state.activate(CardAction::Like, &record.id, &hooks);

            assert!(state.liked);
            assert_eq!(*calls.borrow(), vec![record.id.clone()]);
        }
    }
}

#[test]
fn test_each_contact_found_by_its_surname() {
    let contacts = mock_contacts();
    for contact in &contacts {
        let surname = contact.name.split_whitespace().last().unwrap();
        let found = filter_contacts(&contacts, &surname.to_uppercase());
        assert!(found.iter().any(|c| c.id == contact.id), "{}", contact.name);
    }
}

#[test]
fn test_menu_round_trips() {
    let paths = [
        MenuEvent::Backdrop,
        MenuEvent::CloseButton,
        MenuEvent::LinkActivated,
    ];
    for close in paths {
        let mut state = MenuState::Closed;
        state = state.on(MenuEvent::MenuButton);
        assert!(state.is_open());
        state = state.on(close);
        assert!(!state.is_open());
    }
}

#[tokio::test(start_paused = true)]
async fn test_conversation_grows_one_then_one() {
    let mut chat = AssistantChat::new();
    chat.open();
    let before = chat.messages().len();

    let pending = chat.send("Tell me about the RISK profile").unwrap();
    assert_eq!(chat.messages().len(), before + 1);

    let handle = tokio::spawn(pending.wait());
    tokio::time::advance(REPLY_DELAY - Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    assert!(!handle.is_finished());

    let reply = handle.await.unwrap().unwrap();
    assert!(chat.deliver(reply));
    assert_eq!(chat.messages().len(), before + 2);

    let last = chat.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Assistant);
    assert!(last.text.starts_with("Risk assessment"));
}

#[tokio::test(start_paused = true)]
async fn test_unknown_question_gets_fallback() {
    let mut chat = AssistantChat::new();
    chat.open();

    let reply = chat.send("what's for lunch").unwrap().wait().await.unwrap();
    assert!(reply.text.contains("what's for lunch"));
}

#[tokio::test(start_paused = true)]
async fn test_nothing_appended_after_close() {
    let mut chat = AssistantChat::new();
    chat.open();
    let pending = chat.send("growth numbers?").unwrap();
    let count = chat.messages().len();

    chat.close();
    assert!(pending.wait().await.is_none());
    assert_eq!(chat.messages().len(), count);
}

#[test]
fn test_comment_popup_remounts_for_each_pitch() {
    let feed = mock_feed(FeedRole::Incubator);
    let mut comments = PopupTarget::default();

    comments.open(feed[0].id.clone());
    let first = comments.mount_key();
    comments.close();
    assert_eq!(comments.mount_key(), None);

    comments.open(feed[1].id.clone());
    assert_ne!(comments.mount_key(), first);
    assert_eq!(comments.pitch_id(), Some(feed[1].id.as_str()));

    // Reopening the same pitch is a new opening too.
    comments.close();
    comments.open(feed[0].id.clone());
    assert_ne!(comments.mount_key(), first);
}
