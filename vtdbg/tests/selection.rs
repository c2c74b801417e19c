use std::cell::Cell;
use std::rc::Rc;

use vtdbg::PropertySelection;
use vtree::{Identifier, ValueTree};

fn ident(s: &str) -> Identifier {
    s.parse().unwrap()
}

fn node(type_name: &str, props: &[&str]) -> ValueTree {
    let node = ValueTree::new(ident(type_name));
    for (i, name) in props.iter().enumerate() {
        node.set_property(&ident(name), i as i32, None);
    }
    node
}

#[test]
fn at_most_one_property_is_selected() {
    let a = node("a", &["x", "y"]);
    let b = node("b", &["x"]);
    let selection = PropertySelection::new();

    selection.select(a.clone(), ident("x"));
    assert!(selection.is_selected(&a, &ident("x")));

    selection.select(b.clone(), ident("x"));
    assert!(!selection.is_selected(&a, &ident("x")));
    assert!(selection.is_selected(&b, &ident("x")));

    selection.select(a.clone(), ident("y"));
    assert!(!selection.is_selected(&b, &ident("x")));
    assert_eq!(selection.current(), Some((a, ident("y"))));
}

#[test]
fn same_name_on_another_node_does_not_match() {
    let a = node("a", &["x"]);
    let b = node("b", &["x"]);
    let selection = PropertySelection::new();

    selection.select(a, ident("x"));
    assert!(!selection.is_selected(&b, &ident("x")));
}

#[test]
fn vanished_property_reads_as_no_selection() {
    let a = node("a", &["x"]);
    let selection = PropertySelection::new();

    selection.select(a.clone(), ident("x"));
    a.remove_property(&ident("x"), None);

    assert_eq!(selection.current(), None);
    assert!(!selection.is_selected(&a, &ident("x")));

    // Re-adding the property revives the stored pair
    a.set_property(&ident("x"), 1, None);
    assert!(selection.is_selected(&a, &ident("x")));
}

#[test]
fn deselect_clears_and_notifies_once() {
    let a = node("a", &["x"]);
    let selection = PropertySelection::new();
    let fired = Rc::new(Cell::new(0u32));
    let _guard = {
        let fired = Rc::clone(&fired);
        selection.on_change(move || fired.set(fired.get() + 1))
    };

    selection.select(a, ident("x"));
    assert_eq!(fired.get(), 1);
    selection.deselect();
    assert_eq!(fired.get(), 2);
    selection.deselect();
    assert_eq!(fired.get(), 2, "empty deselect stays quiet");
}

#[test]
fn dropped_guard_stops_callbacks() {
    let a = node("a", &["x"]);
    let selection = PropertySelection::new();
    let fired = Rc::new(Cell::new(0u32));
    let guard = {
        let fired = Rc::clone(&fired);
        selection.on_change(move || fired.set(fired.get() + 1))
    };

    selection.select(a.clone(), ident("x"));
    assert_eq!(fired.get(), 1);

    drop(guard);
    selection.deselect();
    selection.select(a, ident("x"));
    assert_eq!(fired.get(), 1);
}
