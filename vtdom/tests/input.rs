use vtdom::{Key, Modifiers, TextEditResult, TextInputState};

#[test]
fn test_typing_appends_at_cursor() {
    let mut state = TextInputState::new();
    state.set("f", "ab");

    let result = state.handle_key("f", Key::Char('c'), Modifiers::new());
    assert_eq!(result, TextEditResult::Changed);
    assert_eq!(state.get("f"), "abc");
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let mut state = TextInputState::new();
    state.set("f", "abc");

    state.handle_key("f", Key::Backspace, Modifiers::new());
    assert_eq!(state.get("f"), "ab");
}

#[test]
fn test_backspace_at_start_is_noop() {
    let mut state = TextInputState::new();
    state.set("f", "abc");
    state.get_data_mut("f").cursor = 0;

    let result = state.handle_key("f", Key::Backspace, Modifiers::new());
    assert_eq!(result, TextEditResult::Handled);
    assert_eq!(state.get("f"), "abc");
}

#[test]
fn test_cursor_movement_and_insert_middle() {
    let mut state = TextInputState::new();
    state.set("f", "ac");

    state.handle_key("f", Key::Left, Modifiers::new());
    state.handle_key("f", Key::Char('b'), Modifiers::new());
    assert_eq!(state.get("f"), "abc");
}

#[test]
fn test_home_end() {
    let mut state = TextInputState::new();
    state.set("f", "abc");

    state.handle_key("f", Key::Home, Modifiers::new());
    assert_eq!(state.get_data("f").unwrap().cursor, 0);
    state.handle_key("f", Key::End, Modifiers::new());
    assert_eq!(state.get_data("f").unwrap().cursor, 3);
}

#[test]
fn test_enter_submits() {
    let mut state = TextInputState::new();
    state.set("f", "abc");

    let result = state.handle_key("f", Key::Enter, Modifiers::new());
    assert_eq!(result, TextEditResult::Submitted);
}

#[test]
fn test_delete_forward() {
    let mut state = TextInputState::new();
    state.set("f", "abc");
    state.get_data_mut("f").cursor = 1;

    state.handle_key("f", Key::Delete, Modifiers::new());
    assert_eq!(state.get("f"), "ac");
}

#[test]
fn test_multibyte_editing() {
    let mut state = TextInputState::new();
    state.set("f", "héllo");

    state.handle_key("f", Key::Backspace, Modifiers::new());
    state.handle_key("f", Key::Backspace, Modifiers::new());
    assert_eq!(state.get("f"), "hél");
}

#[test]
fn test_unhandled_key_ignored() {
    let mut state = TextInputState::new();
    state.set("f", "abc");

    let result = state.handle_key("f", Key::F(5), Modifiers::new());
    assert_eq!(result, TextEditResult::Ignored);
    assert_eq!(state.get("f"), "abc");
}
