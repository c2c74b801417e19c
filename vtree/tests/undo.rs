use vtree::{Identifier, UndoManager, ValueTree, Var};

fn id(name: &str) -> Identifier {
    Identifier::new(name).unwrap()
}

fn node(type_name: &str) -> ValueTree {
    ValueTree::new(id(type_name))
}

#[test]
fn set_property_undoes_to_prior_value() {
    let um = UndoManager::new();
    let root = node("root");
    root.set_property(&id("count"), Var::Int(5), None);

    root.set_property(&id("count"), Var::Int(6), Some(&um));
    um.begin_new_transaction();

    assert!(um.undo());
    assert_eq!(root.property(&id("count")), Some(Var::Int(5)));
    assert!(um.redo());
    assert_eq!(root.property(&id("count")), Some(Var::Int(6)));
}

#[test]
fn undo_of_added_property_removes_it() {
    let um = UndoManager::new();
    let root = node("root");

    root.set_property(&id("fresh"), Var::String("x".into()), Some(&um));
    um.begin_new_transaction();

    assert!(um.undo());
    assert!(!root.has_property(&id("fresh")));
    assert!(um.redo());
    assert_eq!(root.property(&id("fresh")), Some(Var::String("x".into())));
}

#[test]
fn single_mutation_round_trip_is_bit_identical() {
    // Property 5: undo restores the pre-mutation snapshot exactly; redo
    // restores the post-mutation snapshot exactly.
    let um = UndoManager::new();
    let root = node("root");
    root.set_property(&id("count"), Var::Int(5), None);
    let child = node("child");
    child.set_property(&id("flag"), Var::Bool(false), None);
    root.add_child(child.clone(), None, None);

    let mutations: Vec<Box<dyn Fn(&ValueTree, &UndoManager)>> = vec![
        Box::new(|r, um| r.set_property(&id("count"), Var::Int(9), Some(um))),
        Box::new(|r, um| r.set_property(&id("brand_new"), Var::Double(1.5), Some(um))),
        Box::new(|r, um| {
            r.remove_property(&id("count"), Some(um));
        }),
        Box::new(|r, um| {
            r.add_child(node("added"), Some(0), Some(um));
        }),
        Box::new(|r, um| {
            r.remove_child(0, Some(um));
        }),
    ];

    for mutate in mutations {
        let before = root.deep_copy();
        mutate(&root, &um);
        um.begin_new_transaction();
        let after = root.deep_copy();

        assert!(um.undo());
        assert!(root.deep_equals(&before), "undo must restore the snapshot");
        assert!(um.redo());
        assert!(root.deep_equals(&after), "redo must restore the mutation");
    }
}

#[test]
fn transaction_groups_a_burst_of_edits() {
    let um = UndoManager::new();
    let root = node("root");

    root.set_property(&id("a"), Var::Int(1), Some(&um));
    root.set_property(&id("b"), Var::Int(2), Some(&um));
    um.begin_new_transaction();
    root.set_property(&id("c"), Var::Int(3), Some(&um));
    um.begin_new_transaction();

    // Last transaction only.
    assert!(um.undo());
    assert!(!root.has_property(&id("c")));
    assert!(root.has_property(&id("a")));
    assert!(root.has_property(&id("b")));

    // First transaction reverts both grouped edits.
    assert!(um.undo());
    assert!(!root.has_property(&id("a")));
    assert!(!root.has_property(&id("b")));
    assert!(!um.can_undo());
}

#[test]
fn new_edit_clears_the_redo_stack() {
    let um = UndoManager::new();
    let root = node("root");

    root.set_property(&id("x"), Var::Int(1), Some(&um));
    um.begin_new_transaction();
    assert!(um.undo());
    assert!(um.can_redo());

    root.set_property(&id("y"), Var::Int(2), Some(&um));
    um.begin_new_transaction();
    assert!(!um.can_redo());
    assert!(!um.redo());
}

#[test]
fn child_removal_undo_restores_position() {
    let um = UndoManager::new();
    let root = node("root");
    for name in ["a", "b", "c"] {
        root.add_child(node(name), None, None);
    }

    root.remove_child(1, Some(&um));
    um.begin_new_transaction();

    let order = |r: &ValueTree| -> Vec<String> {
        r.children().iter().map(|n| n.type_name().to_string()).collect()
    };
    assert_eq!(order(&root), ["a", "c"]);

    assert!(um.undo());
    assert_eq!(order(&root), ["a", "b", "c"]);
}

#[test]
fn move_child_undo_restores_order() {
    let um = UndoManager::new();
    let root = node("root");
    for name in ["a", "b", "c", "d"] {
        root.add_child(node(name), None, None);
    }

    root.move_child(0, 2, Some(&um));
    um.begin_new_transaction();

    let order = |r: &ValueTree| -> Vec<String> {
        r.children().iter().map(|n| n.type_name().to_string()).collect()
    };
    assert_eq!(order(&root), ["b", "c", "a", "d"]);

    assert!(um.undo());
    assert_eq!(order(&root), ["a", "b", "c", "d"]);
    assert!(um.redo());
    assert_eq!(order(&root), ["b", "c", "a", "d"]);
}

#[test]
fn mutations_without_manager_are_not_recorded() {
    let um = UndoManager::new();
    let root = node("root");

    root.set_property(&id("silent"), Var::Int(1), None);
    um.begin_new_transaction();

    assert!(!um.can_undo());
    assert!(!um.undo());
    assert_eq!(root.property(&id("silent")), Some(Var::Int(1)));
}
