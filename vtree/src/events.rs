//! Change notification for tree nodes.
//!
//! Every node carries its own listener registry. Listeners are held behind
//! [`Subscription`] guards so a view component that goes away mid-notification
//! unregisters itself instead of dangling.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::identifier::Identifier;
use crate::tree::{NodeData, ValueTree};

/// A change delivered to listeners registered on a specific node.
#[derive(Clone)]
pub enum TreeEvent {
    ChildAdded {
        parent: ValueTree,
        child: ValueTree,
        index: usize,
    },
    ChildRemoved {
        parent: ValueTree,
        child: ValueTree,
        index: usize,
    },
    ChildOrderChanged {
        parent: ValueTree,
    },
    ParentChanged {
        tree: ValueTree,
    },
    /// The node's contents were replaced wholesale (see `ValueTree::reset_from`).
    Redirected {
        tree: ValueTree,
    },
    PropertyChanged {
        tree: ValueTree,
        name: Identifier,
    },
}

pub(crate) type ListenerFn = Rc<dyn Fn(&TreeEvent)>;

/// Listener registry embedded in each node.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(u64, ListenerFn)>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn add(&mut self, callback: ListenerFn) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Clone out the callbacks so dispatch can run with no borrow held;
    /// listeners are free to mutate the tree reentrantly.
    pub(crate) fn snapshot(&self) -> Vec<ListenerFn> {
        self.entries.iter().map(|(_, f)| Rc::clone(f)).collect()
    }
}

/// Registration guard returned by [`ValueTree::subscribe`]. Dropping it
/// unregisters the callback.
pub struct Subscription {
    node: Weak<RefCell<NodeData>>,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(node: Weak<RefCell<NodeData>>, id: u64) -> Self {
        Self { node, id }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(node) = self.node.upgrade() {
            node.borrow_mut().listeners.remove(self.id);
        }
    }
}
