//! The observable value tree.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::warn;

use crate::events::{Listeners, Subscription, TreeEvent};
use crate::identifier::Identifier;
use crate::undo::{Action, UndoManager};
use crate::value::Var;

pub(crate) struct NodeData {
    type_name: Identifier,
    properties: Vec<(Identifier, Var)>,
    children: Vec<ValueTree>,
    parent: Weak<RefCell<NodeData>>,
    pub(crate) listeners: Listeners,
}

/// A shared handle to one node of the tree.
///
/// Cloning a `ValueTree` clones the handle, not the node; two handles compare
/// equal iff they reference the same underlying storage. The node graph is the
/// single source of truth — views hold handles plus disposable subscriptions
/// and nothing else.
#[derive(Clone)]
pub struct ValueTree {
    node: Rc<RefCell<NodeData>>,
}

impl PartialEq for ValueTree {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for ValueTree {}

impl fmt::Debug for ValueTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        f.debug_struct("ValueTree")
            .field("type", &data.type_name.as_str())
            .field("properties", &data.properties.len())
            .field("children", &data.children.len())
            .finish()
    }
}

impl ValueTree {
    pub fn new(type_name: Identifier) -> Self {
        Self {
            node: Rc::new(RefCell::new(NodeData {
                type_name,
                properties: Vec::new(),
                children: Vec::new(),
                parent: Weak::new(),
                listeners: Listeners::default(),
            })),
        }
    }

    fn data(&self) -> Ref<'_, NodeData> {
        self.node.borrow()
    }

    fn from_rc(node: Rc<RefCell<NodeData>>) -> Self {
        Self { node }
    }

    // ------------------------------------------------------------------
    // Introspection

    pub fn type_name(&self) -> Identifier {
        self.data().type_name.clone()
    }

    pub fn parent(&self) -> Option<ValueTree> {
        self.data().parent.upgrade().map(ValueTree::from_rc)
    }

    pub fn num_children(&self) -> usize {
        self.data().children.len()
    }

    pub fn child(&self, index: usize) -> Option<ValueTree> {
        self.data().children.get(index).cloned()
    }

    pub fn children(&self) -> Vec<ValueTree> {
        self.data().children.clone()
    }

    pub fn index_of(&self, child: &ValueTree) -> Option<usize> {
        self.data().children.iter().position(|c| c == child)
    }

    /// Whether `self` sits somewhere below `possible_ancestor`.
    pub fn is_a_child_of(&self, possible_ancestor: &ValueTree) -> bool {
        let mut current = self.parent();
        while let Some(node) = current {
            if &node == possible_ancestor {
                return true;
            }
            current = node.parent();
        }
        false
    }

    pub fn num_properties(&self) -> usize {
        self.data().properties.len()
    }

    pub fn property_names(&self) -> Vec<Identifier> {
        self.data()
            .properties
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn property(&self, name: &Identifier) -> Option<Var> {
        self.data()
            .properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    pub fn has_property(&self, name: &Identifier) -> bool {
        self.data().properties.iter().any(|(n, _)| n == name)
    }

    // ------------------------------------------------------------------
    // Mutation

    /// Set or add a property. Writing a value equal to the current one is a
    /// no-op: no notification, no undo record.
    pub fn set_property(
        &self,
        name: &Identifier,
        value: impl Into<Var>,
        undo: Option<&UndoManager>,
    ) {
        let value = value.into();
        let old = self.property(name);
        if old.as_ref() == Some(&value) {
            return;
        }
        if let Some(undo) = undo {
            undo.record(Action::SetProperty {
                tree: self.clone(),
                name: name.clone(),
                old,
                new: Some(value.clone()),
            });
        }
        self.raw_set_property(name, Some(value));
    }

    /// Remove a property. Returns false if the node has no such property.
    pub fn remove_property(&self, name: &Identifier, undo: Option<&UndoManager>) -> bool {
        let Some(old) = self.property(name) else {
            return false;
        };
        if let Some(undo) = undo {
            undo.record(Action::SetProperty {
                tree: self.clone(),
                name: name.clone(),
                old: Some(old),
                new: None,
            });
        }
        self.raw_set_property(name, None);
        true
    }

    /// Insert `child` at `index` (clamped), or append when `index` is `None`.
    ///
    /// Refused (returns false) when the child already has a parent, is this
    /// node, or is an ancestor of this node — the tree stays acyclic.
    pub fn add_child(
        &self,
        child: ValueTree,
        index: Option<usize>,
        undo: Option<&UndoManager>,
    ) -> bool {
        if child.parent().is_some() {
            warn!("add_child refused: node already has a parent");
            return false;
        }
        if child == *self || self.is_a_child_of(&child) {
            warn!("add_child refused: would create a cycle");
            return false;
        }
        let index = index
            .unwrap_or(usize::MAX)
            .min(self.num_children());
        if let Some(undo) = undo {
            undo.record(Action::AddChild {
                parent: self.clone(),
                child: child.clone(),
                index,
            });
        }
        self.raw_insert_child(child, index);
        true
    }

    /// Remove the child at `index`, returning its handle.
    pub fn remove_child(&self, index: usize, undo: Option<&UndoManager>) -> Option<ValueTree> {
        let child = self.child(index)?;
        if let Some(undo) = undo {
            undo.record(Action::RemoveChild {
                parent: self.clone(),
                child: child.clone(),
                index,
            });
        }
        self.raw_remove_child(index)
    }

    /// Remove a child by handle.
    pub fn remove_child_tree(&self, child: &ValueTree, undo: Option<&UndoManager>) -> bool {
        match self.index_of(child) {
            Some(index) => self.remove_child(index, undo).is_some(),
            None => false,
        }
    }

    /// Reorder a child from `from` to `to` (remove-then-insert indices).
    pub fn move_child(&self, from: usize, to: usize, undo: Option<&UndoManager>) {
        let count = self.num_children();
        if from >= count || to >= count || from == to {
            return;
        }
        if let Some(undo) = undo {
            undo.record(Action::MoveChild {
                parent: self.clone(),
                from,
                to,
            });
        }
        self.raw_move_child(from, to);
    }

    /// Replace this node's type, properties, and children with deep copies of
    /// `source`'s, firing `Redirected`. Not undoable; used for rebinding a
    /// subtree wholesale.
    pub fn reset_from(&self, source: &ValueTree) {
        if source == self {
            return;
        }
        {
            let copies: Vec<ValueTree> = source.children().iter().map(|c| c.deep_copy()).collect();
            let src = source.data();
            let mut data = self.node.borrow_mut();
            data.type_name = src.type_name.clone();
            data.properties = src.properties.clone();
            drop(src);
            for copy in &copies {
                copy.node.borrow_mut().parent = Rc::downgrade(&self.node);
            }
            data.children = copies;
        }
        self.notify(&TreeEvent::Redirected { tree: self.clone() });
    }

    /// Recursively copy this subtree into fresh nodes (no listeners carried).
    pub fn deep_copy(&self) -> ValueTree {
        let copy = ValueTree::new(self.type_name());
        {
            let mut data = copy.node.borrow_mut();
            data.properties = self.data().properties.clone();
        }
        for child in self.children() {
            let child_copy = child.deep_copy();
            child_copy.node.borrow_mut().parent = Rc::downgrade(&copy.node);
            copy.node.borrow_mut().children.push(child_copy);
        }
        copy
    }

    /// Structural comparison: type, properties in order, children recursively.
    pub fn deep_equals(&self, other: &ValueTree) -> bool {
        {
            let a = self.data();
            let b = other.data();
            if a.type_name != b.type_name || a.properties != b.properties {
                return false;
            }
            if a.children.len() != b.children.len() {
                return false;
            }
        }
        self.children()
            .iter()
            .zip(other.children())
            .all(|(a, b)| a.deep_equals(&b))
    }

    // ------------------------------------------------------------------
    // Notification

    /// Register a change listener scoped to this node. The returned guard
    /// unregisters on drop.
    pub fn subscribe(&self, callback: impl Fn(&TreeEvent) + 'static) -> Subscription {
        let id = self.node.borrow_mut().listeners.add(Rc::new(callback));
        Subscription::new(Rc::downgrade(&self.node), id)
    }

    fn notify(&self, event: &TreeEvent) {
        let callbacks = self.data().listeners.snapshot();
        for callback in callbacks {
            callback(event);
        }
    }

    // ------------------------------------------------------------------
    // Raw mutation, shared with undo/redo replay. Each applies the change and
    // delivers notifications synchronously before returning.

    pub(crate) fn raw_set_property(&self, name: &Identifier, value: Option<Var>) {
        {
            let mut data = self.node.borrow_mut();
            match value {
                Some(value) => {
                    if let Some(slot) = data.properties.iter_mut().find(|(n, _)| n == name) {
                        slot.1 = value;
                    } else {
                        data.properties.push((name.clone(), value));
                    }
                }
                None => data.properties.retain(|(n, _)| n != name),
            }
        }
        self.notify(&TreeEvent::PropertyChanged {
            tree: self.clone(),
            name: name.clone(),
        });
    }

    pub(crate) fn raw_insert_child(&self, child: ValueTree, index: usize) {
        {
            let mut data = self.node.borrow_mut();
            let index = index.min(data.children.len());
            child.node.borrow_mut().parent = Rc::downgrade(&self.node);
            data.children.insert(index, child.clone());
        }
        let index = self.index_of(&child).unwrap_or(0);
        self.notify(&TreeEvent::ChildAdded {
            parent: self.clone(),
            child: child.clone(),
            index,
        });
        child.notify(&TreeEvent::ParentChanged {
            tree: child.clone(),
        });
    }

    pub(crate) fn raw_remove_child(&self, index: usize) -> Option<ValueTree> {
        let child = {
            let mut data = self.node.borrow_mut();
            if index >= data.children.len() {
                return None;
            }
            let child = data.children.remove(index);
            child.node.borrow_mut().parent = Weak::new();
            child
        };
        self.notify(&TreeEvent::ChildRemoved {
            parent: self.clone(),
            child: child.clone(),
            index,
        });
        child.notify(&TreeEvent::ParentChanged {
            tree: child.clone(),
        });
        Some(child)
    }

    pub(crate) fn raw_move_child(&self, from: usize, to: usize) {
        {
            let mut data = self.node.borrow_mut();
            if from >= data.children.len() || to >= data.children.len() {
                return;
            }
            let child = data.children.remove(from);
            data.children.insert(to, child);
        }
        self.notify(&TreeEvent::ChildOrderChanged {
            parent: self.clone(),
        });
    }
}
