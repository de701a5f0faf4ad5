use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use duet_layout::{
    FileStorage, KeyOutcome, KeyPress, KeyboardDispatcher, MemoryStorage,
    Modifiers, SIDEBAR_STATE_KEY, Shortcut, SidebarState, SidebarStore,
    Storage,
};

fn ctrl_b() -> KeyPress {
    KeyPress::new("b", Modifiers::CONTROL)
}

fn ctrl_shift_b() -> KeyPress {
    KeyPress::new("B", Modifiers::CONTROL | Modifiers::SHIFT)
}

fn temp_dir(test_name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "duet-walkthrough-{test_name}-{stamp}-{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("temporary directory should be created");
    dir
}

#[test]
fn given_fresh_session_when_walking_through_every_toggle_then_both_panels_end_open()
 {
    let mut store = SidebarStore::new(MemoryStorage::new());
    let mut dispatcher = KeyboardDispatcher::new();
    let subscription = dispatcher.subscribe().expect("subscribe");

    assert_eq!(store.state(), SidebarState::new(true, true));

    store.toggle_left();
    assert!(!store.left_open());

    let outcome = dispatcher.dispatch(&ctrl_b(), &mut store);
    assert_eq!(outcome, KeyOutcome::Handled(Shortcut::ToggleLeft));
    assert!(store.left_open());

    store.toggle_right();
    assert!(!store.right_open());

    let outcome = dispatcher.dispatch(&ctrl_shift_b(), &mut store);
    assert_eq!(outcome, KeyOutcome::Handled(Shortcut::ToggleRight));
    assert!(store.right_open());

    let _ = dispatcher.dispatch(&ctrl_b(), &mut store);
    let _ = dispatcher.dispatch(&ctrl_shift_b(), &mut store);
    assert_eq!(store.state(), SidebarState::new(false, false));

    let _ = dispatcher.dispatch(&ctrl_b(), &mut store);
    let _ = dispatcher.dispatch(&ctrl_shift_b(), &mut store);
    assert_eq!(store.state(), SidebarState::new(true, true));

    for press in [ctrl_b(), ctrl_b(), ctrl_shift_b(), ctrl_shift_b()] {
        assert!(dispatcher.dispatch(&press, &mut store).prevents_default());
    }

    assert_eq!(store.state(), SidebarState::new(true, true));
    assert_eq!(
        store.storage().get(SIDEBAR_STATE_KEY).expect("read"),
        Some(r#"{"leftOpen":true,"rightOpen":true}"#.to_string())
    );

    dispatcher.unsubscribe(subscription).expect("unsubscribe");
    let outcome = dispatcher.dispatch(&ctrl_b(), &mut store);
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert!(store.left_open());
}

#[test]
fn given_panels_closed_in_one_session_when_app_restarts_then_layout_is_restored()
 {
    let root = temp_dir("restart");
    let path = root.join("duet").join("storage.json");

    {
        let mut store = SidebarStore::new(FileStorage::new(&path));
        let mut dispatcher = KeyboardDispatcher::new();
        let subscription = dispatcher.subscribe().expect("subscribe");

        let _ = dispatcher.dispatch(&ctrl_shift_b(), &mut store);
        store.toggle_left();

        dispatcher.unsubscribe(subscription).expect("unsubscribe");
    }

    let mut store = SidebarStore::new(FileStorage::new(&path));
    assert_eq!(store.state(), SidebarState::new(false, false));

    store.toggle_left();
    let reopened = SidebarStore::new(FileStorage::new(&path));
    assert_eq!(reopened.state(), SidebarState::new(true, false));

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn given_foreign_entries_in_storage_file_when_toggling_then_they_are_kept() {
    let root = temp_dir("foreign_entries");
    let path = root.join("storage.json");
    fs::write(&path, r#"{"other:key":"42"}"#).expect("seed document");

    let mut store = SidebarStore::new(FileStorage::new(&path));
    store.toggle_right();

    let storage = store.into_storage();
    assert_eq!(storage.get("other:key").expect("read"), Some("42".into()));
    assert_eq!(
        storage.get(SIDEBAR_STATE_KEY).expect("read"),
        Some(r#"{"leftOpen":true,"rightOpen":false}"#.into())
    );

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn given_non_string_foreign_entry_when_app_restarts_then_saved_layout_is_used()
{
    let root = temp_dir("non_string_entry");
    let path = root.join("storage.json");
    fs::write(
        &path,
        r#"{"other":5,"duet:sidebar":"{\"leftOpen\":false,\"rightOpen\":true}"}"#,
    )
    .expect("seed document");

    let mut store = SidebarStore::new(FileStorage::new(&path));
    assert_eq!(store.state(), SidebarState::new(false, true));

    store.toggle_right();

    let document: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(&path).expect("document should be readable"),
    )
    .expect("document should stay valid json");
    assert_eq!(document["other"], serde_json::json!(5));
    assert_eq!(
        SidebarStore::new(FileStorage::new(&path)).state(),
        SidebarState::new(false, false)
    );

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}
