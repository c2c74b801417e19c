//! Editing one property value through the model.
//!
//! Every committed edit writes through [`ValueTree::set_property`] and then
//! closes the undo transaction, so one user edit is one undo step. Text is
//! always interpreted against the property's current runtime type; kinds that
//! cannot absorb a text edit discard it and the prior value is redisplayed.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use vtree::{Identifier, Subscription, TreeEvent, UndoManager, ValueTree, Var};

/// View-model for the value control of a single `(node, property)` pair,
/// alive while that control is on screen or being edited.
pub struct DynamicValueView {
    node: ValueTree,
    name: Identifier,
    refresh: Rc<Cell<bool>>,
    _watch: Subscription,
}

impl DynamicValueView {
    pub fn new(node: ValueTree, name: Identifier) -> Self {
        let refresh = Rc::new(Cell::new(false));
        let watch = {
            let refresh = Rc::clone(&refresh);
            let name = name.clone();
            node.subscribe(move |event| {
                if let TreeEvent::PropertyChanged { name: changed, .. } = event {
                    if *changed == name {
                        refresh.set(true);
                    }
                }
            })
        };
        Self {
            node,
            name,
            refresh,
            _watch: watch,
        }
    }

    pub fn node(&self) -> &ValueTree {
        &self.node
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn value(&self) -> Option<Var> {
        self.node.property(&self.name)
    }

    /// Current value as editor text.
    pub fn display_text(&self) -> String {
        self.value().map(|v| v.to_string()).unwrap_or_default()
    }

    /// True once after any change to this exact property, whoever caused it.
    /// The caller reseeds its control from [`display_text`](Self::display_text).
    pub fn take_refresh(&self) -> bool {
        self.refresh.replace(false)
    }

    /// Commit edited text. Returns false when the current kind discards text
    /// edits; nothing is written and no undo step is created.
    pub fn commit(&self, text: &str, undo: Option<&UndoManager>) -> bool {
        let Some(current) = self.value() else {
            return false;
        };
        let Some(parsed) = current.parse_as_self(text) else {
            debug!(
                "edit of {} discarded, {} does not take text",
                self.name,
                current.type_name()
            );
            return false;
        };
        self.write(parsed, undo);
        true
    }

    /// `+` stepper for Int/Int64.
    pub fn increment(&self, undo: Option<&UndoManager>) {
        self.step(1, undo);
    }

    /// `-` stepper for Int/Int64.
    pub fn decrement(&self, undo: Option<&UndoManager>) {
        self.step(-1, undo);
    }

    fn step(&self, delta: i64, undo: Option<&UndoManager>) {
        match self.value() {
            Some(Var::Int(i)) => self.write(Var::Int(i.saturating_add(delta as i32)), undo),
            Some(Var::Int64(i)) => self.write(Var::Int64(i.saturating_add(delta)), undo),
            _ => {}
        }
    }

    /// Toggle control for Bool.
    pub fn toggle(&self, undo: Option<&UndoManager>) {
        if let Some(value) = self.value() {
            if value.is_bool() {
                self.write(Var::Bool(!value.as_bool()), undo);
            }
        }
    }

    fn write(&self, value: Var, undo: Option<&UndoManager>) {
        self.node.set_property(&self.name, value, undo);
        if let Some(undo) = undo {
            undo.begin_new_transaction();
        }
    }
}
