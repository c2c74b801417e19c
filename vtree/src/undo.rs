//! Transactional undo/redo log for tree mutations.
//!
//! Every recorded mutation is one [`Action`]; a burst of actions forms a
//! transaction, closed explicitly with [`UndoManager::begin_new_transaction`]
//! after each user-initiated edit so one edit equals one undo step.

use std::cell::RefCell;

use log::debug;

use crate::identifier::Identifier;
use crate::tree::ValueTree;
use crate::value::Var;

/// One recorded mutation, storing enough to replay it in either direction.
pub(crate) enum Action {
    SetProperty {
        tree: ValueTree,
        name: Identifier,
        /// `None` means the property did not exist.
        old: Option<Var>,
        /// `None` means the action removed the property.
        new: Option<Var>,
    },
    AddChild {
        parent: ValueTree,
        child: ValueTree,
        index: usize,
    },
    RemoveChild {
        parent: ValueTree,
        child: ValueTree,
        index: usize,
    },
    MoveChild {
        parent: ValueTree,
        from: usize,
        to: usize,
    },
}

impl Action {
    fn undo(&self) {
        match self {
            Action::SetProperty {
                tree, name, old, ..
            } => tree.raw_set_property(name, old.clone()),
            Action::AddChild { parent, index, .. } => {
                parent.raw_remove_child(*index);
            }
            Action::RemoveChild {
                parent,
                child,
                index,
            } => parent.raw_insert_child(child.clone(), *index),
            Action::MoveChild { parent, from, to } => parent.raw_move_child(*to, *from),
        }
    }

    fn redo(&self) {
        match self {
            Action::SetProperty {
                tree, name, new, ..
            } => tree.raw_set_property(name, new.clone()),
            Action::AddChild {
                parent,
                child,
                index,
            } => parent.raw_insert_child(child.clone(), *index),
            Action::RemoveChild { parent, index, .. } => {
                parent.raw_remove_child(*index);
            }
            Action::MoveChild { parent, from, to } => parent.raw_move_child(*from, *to),
        }
    }
}

#[derive(Default)]
struct UndoState {
    undo_stack: Vec<Vec<Action>>,
    redo_stack: Vec<Vec<Action>>,
    current: Vec<Action>,
}

/// The undo log. Mutation methods on [`ValueTree`] record into it through a
/// shared reference, so it uses interior mutability throughout.
#[derive(Default)]
pub struct UndoManager {
    state: RefCell<UndoState>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, action: Action) {
        let mut state = self.state.borrow_mut();
        state.redo_stack.clear();
        state.current.push(action);
    }

    /// Close the open transaction. Recorded actions after this call form a new
    /// undo step.
    pub fn begin_new_transaction(&self) {
        let mut state = self.state.borrow_mut();
        if !state.current.is_empty() {
            let transaction = std::mem::take(&mut state.current);
            state.undo_stack.push(transaction);
        }
    }

    pub fn can_undo(&self) -> bool {
        let state = self.state.borrow();
        !state.current.is_empty() || !state.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.state.borrow().redo_stack.is_empty()
    }

    /// Revert the most recent transaction. Returns false if there was nothing
    /// to undo.
    pub fn undo(&self) -> bool {
        self.begin_new_transaction();
        let Some(transaction) = self.state.borrow_mut().undo_stack.pop() else {
            return false;
        };
        debug!("undoing transaction of {} action(s)", transaction.len());
        for action in transaction.iter().rev() {
            action.undo();
        }
        self.state.borrow_mut().redo_stack.push(transaction);
        true
    }

    /// Reapply the most recently undone transaction.
    pub fn redo(&self) -> bool {
        let Some(transaction) = self.state.borrow_mut().redo_stack.pop() else {
            return false;
        };
        debug!("redoing transaction of {} action(s)", transaction.len());
        for action in &transaction {
            action.redo();
        }
        self.state.borrow_mut().undo_stack.push(transaction);
        true
    }
}
