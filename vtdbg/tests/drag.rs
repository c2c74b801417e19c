//! Drag-reorder driven through the event path: press, drag, release.

use std::rc::Rc;

use vtdbg::node_view;
use vtdbg::value_view::DynamicValueView;
use vtdbg::MainPanel;
use vtdom::{layout, Event, LayoutResult, Modifiers, MouseButton, Rect};
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

fn panel_with_tree() -> (MainPanel, ValueTree, Rc<UndoManager>) {
    let root = ValueTree::new(ident("root"));
    for name in ["a", "b", "c", "d"] {
        root.add_child(ValueTree::new(ident(name)), None, None);
    }
    let undo = Rc::new(UndoManager::new());
    let mut panel = MainPanel::new(Some(Rc::clone(&undo)));
    panel.set_tree(Some(root.clone()));
    (panel, root, undo)
}

fn frame_layout(panel: &mut MainPanel) -> LayoutResult {
    let frame = panel.build();
    layout(&frame, Rect::from_size(120, 40))
}

/// Press inside a row's indent gutter, drag to the target row, release. Rows
/// are one line tall, so the release lands in the "after" half.
fn drag_row(panel: &mut MainPanel, layout: &LayoutResult, from_row: usize, to_row: usize) {
    let from = layout[&node_view::item_id(from_row)];
    let to = layout[&node_view::item_id(to_row)];

    panel.handle_event(
        &Event::MouseDown {
            x: from.x,
            y: from.y,
            button: MouseButton::Left,
            modifiers: Modifiers::new(),
        },
        layout,
    );
    panel.handle_event(
        &Event::MouseDrag {
            x: to.x,
            y: to.y,
            button: MouseButton::Left,
        },
        layout,
    );
    panel.handle_event(
        &Event::MouseUp {
            x: to.x,
            y: to.y,
            button: MouseButton::Left,
            modifiers: Modifiers::new(),
        },
        layout,
    );
}

// Rows flatten as: 0 root, 1 a, 2 b, 3 c, 4 d.

#[test]
fn dragging_an_unselected_row_moves_that_row() {
    let (mut panel, root, _undo) = panel_with_tree();
    let a = root.child(0).unwrap();
    panel.list.select(a, false);
    let layout = frame_layout(&mut panel);

    // "b" was never selected; the press takes the selection before the drag
    drag_row(&mut panel, &layout, 2, 4);

    assert_eq!(child_labels(&root), ["a", "c", "d", "b"]);
    let b = root.child(3).unwrap();
    assert!(panel.list.is_selected(&b));
}

#[test]
fn pressing_a_selected_row_keeps_the_multi_selection() {
    let (mut panel, root, _undo) = panel_with_tree();
    let a = root.child(0).unwrap();
    let c = root.child(2).unwrap();
    panel.list.select(a, false);
    panel.list.select(c, true);
    let layout = frame_layout(&mut panel);

    // Dragging "c" carries "a" along, relative order preserved
    drag_row(&mut panel, &layout, 3, 4);

    assert_eq!(child_labels(&root), ["b", "d", "a", "c"]);
}

#[test]
fn drop_is_its_own_undo_step() {
    let (mut panel, root, undo) = panel_with_tree();
    root.set_property(&ident("count"), 5, None);
    let a = root.child(0).unwrap();
    panel.list.select(a, false);
    let layout = frame_layout(&mut panel);

    drag_row(&mut panel, &layout, 1, 4);
    assert_eq!(child_labels(&root), ["b", "c", "d", "a"]);

    // A later edit must undo alone, without dragging the drop back with it
    DynamicValueView::new(root.clone(), ident("count")).increment(Some(&undo));

    assert!(undo.undo());
    assert_eq!(root.property(&ident("count")), Some(5.into()));
    assert_eq!(child_labels(&root), ["b", "c", "d", "a"]);

    assert!(undo.undo());
    assert_eq!(child_labels(&root), ["a", "b", "c", "d"]);
}

#[test]
fn release_off_the_rows_drops_nothing() {
    let (mut panel, root, undo) = panel_with_tree();
    let a = root.child(0).unwrap();
    panel.list.select(a, false);
    let layout = frame_layout(&mut panel);
    let from = layout[&node_view::item_id(1)];

    panel.handle_event(
        &Event::MouseDown {
            x: from.x,
            y: from.y,
            button: MouseButton::Left,
            modifiers: Modifiers::new(),
        },
        &layout,
    );
    panel.handle_event(
        &Event::MouseDrag {
            x: from.x,
            y: 30,
            button: MouseButton::Left,
        },
        &layout,
    );
    panel.handle_event(
        &Event::MouseUp {
            x: from.x,
            y: 30,
            button: MouseButton::Left,
            modifiers: Modifiers::new(),
        },
        &layout,
    );

    assert_eq!(child_labels(&root), ["a", "b", "c", "d"]);
    assert!(!undo.can_undo());
}
