use std::cell::Cell;
use std::rc::Rc;

use vtdbg::value_view::DynamicValueView;
use vtree::{Identifier, TreeEvent, UndoManager, ValueTree, Var};

fn ident(s: &str) -> Identifier {
    s.parse().unwrap()
}

fn node_with(name: &str, value: Var) -> (ValueTree, Identifier) {
    let node = ValueTree::new(ident("node"));
    let name = ident(name);
    node.set_property(&name, value, None);
    (node, name)
}

#[test]
fn text_parses_against_the_current_type() {
    let (node, name) = node_with("count", Var::Int(0));
    let view = DynamicValueView::new(node.clone(), name.clone());

    assert!(view.commit("12abc", None));
    assert_eq!(node.property(&name), Some(Var::Int(12)));

    assert!(view.commit("nonsense", None));
    assert_eq!(node.property(&name), Some(Var::Int(0)));
}

#[test]
fn bool_accepts_the_canonical_true_words() {
    let (node, name) = node_with("flag", Var::Bool(false));
    let view = DynamicValueView::new(node.clone(), name.clone());

    for word in ["true", "YES", "Definitely", "1", "1.0"] {
        view.commit(word, None);
        assert_eq!(node.property(&name), Some(Var::Bool(true)), "{word}");
        view.commit("off", None);
        assert_eq!(node.property(&name), Some(Var::Bool(false)));
    }
}

#[test]
fn uneditable_values_are_byte_stable_under_edits() {
    let payload = vec![1u8, 2, 3];
    let (node, name) = node_with("blob", Var::Binary(payload.clone()));
    let view = DynamicValueView::new(node.clone(), name.clone());
    let undo = UndoManager::new();

    assert!(!view.commit("anything at all", Some(&undo)));
    assert_eq!(node.property(&name), Some(Var::Binary(payload)));
    assert!(!undo.can_undo(), "discarded edits create no undo step");
}

#[test]
fn void_and_undefined_discard_edits() {
    for value in [Var::Void, Var::Undefined] {
        let (node, name) = node_with("v", value.clone());
        let view = DynamicValueView::new(node.clone(), name.clone());
        assert!(!view.commit("text", None));
        assert_eq!(node.property(&name), Some(value));
    }
}

#[test]
fn display_then_commit_is_idempotent() {
    let cases = [
        Var::Int(-42),
        Var::Int64(1 << 40),
        Var::Bool(true),
        Var::Double(2.5),
        Var::String("hello world".into()),
    ];
    for value in cases {
        let (node, name) = node_with("p", value.clone());
        let view = DynamicValueView::new(node.clone(), name.clone());
        view.commit(&view.display_text(), None);
        assert_eq!(node.property(&name), Some(value));
    }
}

#[test]
fn int64_edits_keep_the_full_64_bit_range() {
    let (node, name) = node_with("big", Var::Int64(0));
    let view = DynamicValueView::new(node.clone(), name.clone());

    view.commit("5000000000", None);
    assert_eq!(node.property(&name), Some(Var::Int64(5_000_000_000)));
}

#[test]
fn stepper_sequence_fires_one_event_per_step() {
    let (node, name) = node_with("count", Var::Int(5));
    let view = DynamicValueView::new(node.clone(), name.clone());

    let events = Rc::new(Cell::new(0u32));
    let _sub = {
        let events = Rc::clone(&events);
        node.subscribe(move |event| {
            if matches!(event, TreeEvent::PropertyChanged { .. }) {
                events.set(events.get() + 1);
            }
        })
    };

    view.increment(None);
    assert_eq!(node.property(&name), Some(Var::Int(6)));
    view.decrement(None);
    view.decrement(None);
    assert_eq!(node.property(&name), Some(Var::Int(4)));
    assert_eq!(events.get(), 3);
}

#[test]
fn each_committed_edit_is_one_undo_step() {
    let (node, name) = node_with("count", Var::Int(1));
    let view = DynamicValueView::new(node.clone(), name.clone());
    let undo = UndoManager::new();

    view.commit("2", Some(&undo));
    view.commit("3", Some(&undo));
    assert_eq!(node.property(&name), Some(Var::Int(3)));

    assert!(undo.undo());
    assert_eq!(node.property(&name), Some(Var::Int(2)));
    assert!(undo.undo());
    assert_eq!(node.property(&name), Some(Var::Int(1)));
}

#[test]
fn external_writes_raise_the_refresh_flag() {
    let (node, name) = node_with("count", Var::Int(1));
    let view = DynamicValueView::new(node.clone(), name.clone());
    assert!(!view.take_refresh());

    node.set_property(&name, 9, None);
    assert!(view.take_refresh());
    assert_eq!(view.display_text(), "9");
    assert!(!view.take_refresh(), "flag clears once taken");

    // Unrelated properties do not touch the flag
    node.set_property(&ident("other"), 1, None);
    assert!(!view.take_refresh());
}

#[test]
fn toggle_writes_the_negated_truthiness() {
    let (node, name) = node_with("flag", Var::Bool(true));
    let view = DynamicValueView::new(node.clone(), name.clone());

    view.toggle(None);
    assert_eq!(node.property(&name), Some(Var::Bool(false)));
    view.toggle(None);
    assert_eq!(node.property(&name), Some(Var::Bool(true)));
}
