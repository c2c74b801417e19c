//! The single selected property, shared by every property row.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use vtree::{Identifier, ValueTree};

type ChangeFn = Rc<dyn Fn()>;

#[derive(Default)]
struct SelectionState {
    current: Option<(ValueTree, Identifier)>,
    listeners: Vec<(u64, ChangeFn)>,
    next_id: u64,
}

/// Broadcaster holding at most one selected `(node, property)` pair.
///
/// A selection whose property has since vanished compares as no match; it is
/// never observed dangling.
#[derive(Clone, Default)]
pub struct PropertySelection {
    state: Rc<RefCell<SelectionState>>,
}

impl PropertySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, node: ValueTree, name: Identifier) {
        self.state.borrow_mut().current = Some((node, name));
        self.notify();
    }

    pub fn deselect(&self) {
        let had = self.state.borrow_mut().current.take().is_some();
        if had {
            self.notify();
        }
    }

    /// The selected pair, if its property still exists.
    pub fn current(&self) -> Option<(ValueTree, Identifier)> {
        let state = self.state.borrow();
        match &state.current {
            Some((node, name)) if node.has_property(name) => Some((node.clone(), name.clone())),
            _ => None,
        }
    }

    /// Exact match against the live selection.
    pub fn is_selected(&self, node: &ValueTree, name: &Identifier) -> bool {
        match self.current() {
            Some((sel_node, sel_name)) => sel_node == *node && sel_name == *name,
            None => false,
        }
    }

    /// Register a change callback. The returned guard unregisters on drop.
    pub fn on_change(&self, callback: impl Fn() + 'static) -> SelectionGuard {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Rc::new(callback)));
        SelectionGuard {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    fn notify(&self) {
        let callbacks: Vec<ChangeFn> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

pub struct SelectionGuard {
    state: Weak<RefCell<SelectionState>>,
    id: u64,
}

impl Drop for SelectionGuard {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
