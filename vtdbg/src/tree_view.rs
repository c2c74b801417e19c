//! The hierarchical list: flattens open items into rows, tracks multi-select
//! and drag-reorder gestures, and moves nodes through the model.

use log::debug;
use vtree::{UndoManager, ValueTree};

use crate::item::Item;

/// Marker carried by drag gestures started inside the list; drops tagged with
/// anything else are refused.
pub const DRAG_SOURCE_TAG: &str = "value-tree-items";

/// One visible row of the flattened list.
#[derive(Clone)]
pub struct RowEntry {
    pub node: ValueTree,
    pub depth: u16,
    pub open: bool,
    pub has_children: bool,
    /// Row units (lines) this entry occupies.
    pub height: u16,
}

/// Where a drop would land, relative to an existing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

pub struct DragState {
    pub tag: &'static str,
    pub origin: (u16, u16),
    pub source_row: usize,
    pub active: bool,
    pub target: Option<(usize, DropPosition)>,
}

#[derive(Default)]
pub struct TreeList {
    root: Option<Item>,
    selected: Vec<ValueTree>,
    scroll: usize,
    drag: Option<DragState>,
}

impl TreeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_root(&mut self, node: Option<ValueTree>) {
        self.root = node.map(Item::new);
        self.selected.clear();
        self.scroll = 0;
        self.drag = None;
    }

    pub fn root(&self) -> Option<&Item> {
        self.root.as_ref()
    }

    pub fn root_node(&self) -> Option<ValueTree> {
        self.root.as_ref().map(|item| item.node().clone())
    }

    /// Rebuild dirty subtrees and drop selections of vanished nodes.
    pub fn refresh(&mut self) {
        if let Some(root) = &mut self.root {
            root.refresh();
            let root_node = root.node().clone();
            self.selected
                .retain(|node| *node == root_node || node.is_a_child_of(&root_node));
        }
    }

    /// Wholesale rebuild of the root's children, as after undo/redo.
    pub fn rebuild_root(&mut self) {
        if let Some(root) = &mut self.root {
            root.rebuild();
        }
        self.refresh();
    }

    // ------------------------------------------------------------------
    // Flattening

    pub fn rows(&self) -> Vec<RowEntry> {
        let mut rows = Vec::new();
        if let Some(root) = &self.root {
            flatten(root, 0, &mut rows);
        }
        rows
    }

    pub fn row_index_of(&self, node: &ValueTree) -> Option<usize> {
        self.rows().iter().position(|row| row.node == *node)
    }

    pub fn toggle_at(&mut self, row: usize) {
        let Some(entry) = self.rows().get(row).cloned() else {
            return;
        };
        if let Some(root) = &mut self.root {
            if let Some(item) = find_item_mut(root, &entry.node) {
                item.toggle_open();
            }
        }
    }

    // ------------------------------------------------------------------
    // Selection

    /// Plain click selects exactly this node; ctrl-click toggles it in and
    /// out of the selection.
    pub fn select(&mut self, node: ValueTree, ctrl: bool) {
        if ctrl {
            if let Some(pos) = self.selected.iter().position(|n| *n == node) {
                self.selected.remove(pos);
            } else {
                self.selected.push(node);
            }
        } else {
            self.selected.clear();
            self.selected.push(node);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> &[ValueTree] {
        &self.selected
    }

    pub fn is_selected(&self, node: &ValueTree) -> bool {
        self.selected.iter().any(|n| n == node)
    }

    pub fn first_selected(&self) -> Option<ValueTree> {
        self.selected.first().cloned()
    }

    // ------------------------------------------------------------------
    // Scrolling

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll by whole entries, clamped so the last entry stays reachable.
    pub fn scroll_by(&mut self, delta: i16) {
        let max = self.rows().len().saturating_sub(1);
        self.scroll = (self.scroll as i64 + delta as i64).clamp(0, max as i64) as usize;
    }

    // ------------------------------------------------------------------
    // Drag and drop

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn begin_drag(&mut self, x: u16, y: u16, source_row: usize) {
        self.drag = Some(DragState {
            tag: DRAG_SOURCE_TAG,
            origin: (x, y),
            source_row,
            active: false,
            target: None,
        });
    }

    /// Update a gesture in progress; it becomes an active drag once the
    /// pointer leaves the press position by at least one line.
    pub fn update_drag(&mut self, y: u16, target: Option<(usize, DropPosition)>) {
        if let Some(drag) = &mut self.drag {
            if y != drag.origin.1 {
                drag.active = true;
            }
            if drag.active {
                drag.target = target;
            }
        }
    }

    /// Finish the gesture. Returns true if it was an active drag whose drop
    /// was performed (the release is then not a plain click).
    pub fn end_drag(&mut self, undo: Option<&UndoManager>) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if !drag.active {
            return false;
        }
        if drag.tag != DRAG_SOURCE_TAG {
            return true;
        }
        let Some((row, position)) = drag.target else {
            return true;
        };
        let rows = self.rows();
        let Some(entry) = rows.get(row) else {
            return true;
        };

        let (new_parent, insert_index) = match entry.node.parent() {
            Some(parent) => {
                let index = parent.index_of(&entry.node).unwrap_or(0);
                let index = match position {
                    DropPosition::Before => index,
                    DropPosition::After => index + 1,
                };
                (parent, index)
            }
            // Dropping around the root inserts into the root
            None => (
                entry.node.clone(),
                match position {
                    DropPosition::Before => 0,
                    DropPosition::After => entry.node.num_children(),
                },
            ),
        };

        let moved = self.selected.clone();
        self.move_items(&moved, &new_parent, insert_index, undo);
        // One drop is one undo step
        if let Some(undo) = undo {
            undo.begin_new_transaction();
        }
        true
    }

    /// Move `nodes` under `new_parent` at `insert_index`, preserving their
    /// relative order. A node that is the destination itself, an ancestor of
    /// it, or parentless is skipped. When a node leaves an earlier position in
    /// the destination, the insertion point shifts back one to compensate.
    /// Openness of the whole tree is carried across the move.
    pub fn move_items(
        &mut self,
        nodes: &[ValueTree],
        new_parent: &ValueTree,
        mut insert_index: usize,
        undo: Option<&UndoManager>,
    ) {
        let snapshot = self.root.as_ref().map(|root| root.openness_snapshot());

        for node in nodes.iter().rev() {
            let Some(parent) = node.parent() else {
                continue;
            };
            if *node == *new_parent || new_parent.is_a_child_of(node) {
                debug!("refusing to move a node into itself");
                continue;
            }
            if parent == *new_parent {
                if let Some(index) = new_parent.index_of(node) {
                    if index < insert_index {
                        insert_index -= 1;
                    }
                }
            }
            parent.remove_child_tree(node, undo);
            new_parent.add_child(node.clone(), Some(insert_index), undo);
        }

        self.refresh();
        if let (Some(root), Some(snapshot)) = (&mut self.root, snapshot) {
            root.restore_openness(&snapshot);
        }
    }
}

fn flatten(item: &Item, depth: u16, rows: &mut Vec<RowEntry>) {
    rows.push(RowEntry {
        node: item.node().clone(),
        depth,
        open: item.is_open(),
        has_children: !item.children().is_empty(),
        height: item.row_height(),
    });
    if item.is_open() {
        for child in item.children() {
            flatten(child, depth + 1, rows);
        }
    }
}

fn find_item_mut<'a>(item: &'a mut Item, node: &ValueTree) -> Option<&'a mut Item> {
    if item.node() == node {
        return Some(item);
    }
    for child in item.children_mut() {
        if let Some(found) = find_item_mut(child, node) {
            return Some(found);
        }
    }
    None
}
