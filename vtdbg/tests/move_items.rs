use vtdbg::TreeList;
use vtree::{Identifier, UndoManager, ValueTree};

fn ident(s: &str) -> Identifier {
    s.parse().unwrap()
}

fn child_labels(parent: &ValueTree) -> Vec<String> {
    parent
        .children()
        .iter()
        .map(|c| c.type_name().to_string())
        .collect()
}

/// root with children a, b, c, d; c has child c1.
fn sample() -> (TreeList, ValueTree) {
    let root = ValueTree::new(ident("root"));
    for name in ["a", "b", "c", "d"] {
        root.add_child(ValueTree::new(ident(name)), None, None);
    }
    let c1 = ValueTree::new(ident("c1"));
    root.child(2).unwrap().add_child(c1, None, None);

    let mut list = TreeList::new();
    list.set_root(Some(root.clone()));
    (list, root)
}

#[test]
fn reorder_forward_within_parent_adjusts_insert_index() {
    let (mut list, root) = sample();
    let a = root.child(0).unwrap();

    // Moving "a" to sit after "c": target index 3 shifts back one because
    // "a" leaves index 0 first
    list.move_items(&[a], &root, 3, None);
    assert_eq!(child_labels(&root), ["b", "c", "a", "d"]);
}

#[test]
fn reorder_backward_within_parent_keeps_insert_index() {
    let (mut list, root) = sample();
    let d = root.child(3).unwrap();

    list.move_items(&[d], &root, 1, None);
    assert_eq!(child_labels(&root), ["a", "d", "b", "c"]);
}

#[test]
fn multi_move_preserves_relative_order() {
    let (mut list, root) = sample();
    let a = root.child(0).unwrap();
    let b = root.child(1).unwrap();
    let c = root.child(2).unwrap();

    list.move_items(&[a.clone(), b.clone()], &c, 0, None);
    assert_eq!(child_labels(&root), ["c", "d"]);
    assert_eq!(child_labels(&c), ["a", "b", "c1"]);
}

#[test]
fn move_onto_self_is_refused() {
    let (mut list, root) = sample();
    let c = root.child(2).unwrap();

    list.move_items(&[c.clone()], &c, 0, None);
    assert_eq!(child_labels(&root), ["a", "b", "c", "d"]);
    assert_eq!(child_labels(&c), ["c1"]);
}

#[test]
fn move_into_own_descendant_is_refused() {
    let (mut list, root) = sample();
    let c = root.child(2).unwrap();
    let c1 = c.child(0).unwrap();

    list.move_items(&[c.clone()], &c1, 0, None);
    assert_eq!(child_labels(&root), ["a", "b", "c", "d"]);
    assert_eq!(child_labels(&c1), Vec::<String>::new());
}

#[test]
fn refused_node_does_not_block_the_rest() {
    let (mut list, root) = sample();
    let c = root.child(2).unwrap();
    let c1 = c.child(0).unwrap();
    let a = root.child(0).unwrap();

    // "c" cannot move into its own child but "a" still can
    list.move_items(&[c.clone(), a.clone()], &c1, 0, None);
    assert_eq!(child_labels(&root), ["b", "c", "d"]);
    assert_eq!(child_labels(&c1), ["a"]);
}

#[test]
fn collapsed_state_survives_a_move() {
    let (mut list, root) = sample();
    let c = root.child(2).unwrap();

    // Collapse "c" through the list, then move it
    let c_row = list.row_index_of(&c).unwrap();
    list.toggle_at(c_row);

    list.move_items(&[c.clone()], &root, 0, None);
    assert_eq!(child_labels(&root), ["c", "a", "b", "d"]);
    let row = &list.rows()[list.row_index_of(&c).unwrap()];
    assert!(!row.open);
}

#[test]
fn moves_record_into_the_undo_log() {
    let (mut list, root) = sample();
    let a = root.child(0).unwrap();
    let undo = UndoManager::new();

    list.move_items(&[a], &root, 3, Some(&undo));
    undo.begin_new_transaction();
    assert_eq!(child_labels(&root), ["b", "c", "a", "d"]);

    assert!(undo.undo());
    assert_eq!(child_labels(&root), ["a", "b", "c", "d"]);
    assert!(undo.redo());
    assert_eq!(child_labels(&root), ["b", "c", "a", "d"]);
}
