//! View-model items mirroring tree nodes in the hierarchical list.
//!
//! An `Item` holds only its node handle, openness, and child items. Structural
//! notifications mark it dirty; [`Item::refresh`] then discards and recreates
//! the child items, carrying the openness of surviving nodes across the
//! rebuild (grandchild openness survives because the snapshot is keyed by node
//! handle, not position).

use std::cell::Cell;
use std::rc::Rc;

use vtree::{Subscription, TreeEvent, ValueTree};

pub struct Item {
    node: ValueTree,
    open: bool,
    children: Vec<Item>,
    dirty: Rc<Cell<bool>>,
    _watch: Subscription,
}

impl Item {
    /// Items start open, matching the list's default openness.
    pub fn new(node: ValueTree) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let watch = watch_structure(&node, Rc::clone(&dirty));
        let mut item = Self {
            node,
            open: true,
            children: Vec::new(),
            dirty,
            _watch: watch,
        };
        item.rebuild_children();
        item
    }

    pub fn node(&self) -> &ValueTree {
        &self.node
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn children(&self) -> &[Item] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Item] {
        &mut self.children
    }

    /// Row units this item occupies: one per property, minimum one.
    pub fn row_height(&self) -> u16 {
        (self.node.num_properties() as u16).max(1)
    }

    /// Rebuild any subtree whose node saw a structural change since the last
    /// call. Returns true if anything was rebuilt.
    pub fn refresh(&mut self) -> bool {
        if self.dirty.replace(false) {
            let snapshot = self.openness_snapshot();
            self.rebuild_children();
            self.restore_openness(&snapshot);
            // A rebuild re-mirrors the whole subtree
            return true;
        }
        let mut any = false;
        for child in &mut self.children {
            any |= child.refresh();
        }
        any
    }

    /// Force a wholesale rebuild of this item's children, as after undo/redo.
    pub fn rebuild(&mut self) {
        self.dirty.set(true);
        self.refresh();
    }

    /// Collect `(node, open)` for this item and everything below it.
    pub fn openness_snapshot(&self) -> Vec<(ValueTree, bool)> {
        let mut snapshot = Vec::new();
        self.collect_openness(&mut snapshot);
        snapshot
    }

    fn collect_openness(&self, into: &mut Vec<(ValueTree, bool)>) {
        into.push((self.node.clone(), self.open));
        for child in &self.children {
            child.collect_openness(into);
        }
    }

    pub fn restore_openness(&mut self, snapshot: &[(ValueTree, bool)]) {
        if let Some((_, open)) = snapshot.iter().find(|(node, _)| *node == self.node) {
            self.open = *open;
        }
        for child in &mut self.children {
            child.restore_openness(snapshot);
        }
    }

    fn rebuild_children(&mut self) {
        self.children = self.node.children().into_iter().map(Item::new).collect();
    }
}

fn watch_structure(node: &ValueTree, dirty: Rc<Cell<bool>>) -> Subscription {
    node.subscribe(move |event| match event {
        TreeEvent::ChildAdded { .. }
        | TreeEvent::ChildRemoved { .. }
        | TreeEvent::ChildOrderChanged { .. }
        | TreeEvent::Redirected { .. } => dirty.set(true),
        TreeEvent::ParentChanged { .. } | TreeEvent::PropertyChanged { .. } => {}
    })
}
