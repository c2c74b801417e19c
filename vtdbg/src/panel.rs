//! The debugger surface: toolbar on the left, hierarchical list on the right.
//! All input routing happens here, against the element tree of the last
//! rendered frame.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use vtdom::{
    hit_test, Color, Element, Event, FocusState, Key, LayoutResult, Modifiers, MouseButton, Size,
    Style, TextEditResult, TextInputState,
};
use vtree::{Identifier, UndoManager, ValueTree};

use crate::node_view::{self, NodeRowParams};
use crate::property_view::VALUE_EDIT_INPUT;
use crate::selection::{PropertySelection, SelectionGuard};
use crate::toolbar::{self, Toolbar, ToolbarAction};
use crate::tree_view::{DropPosition, TreeList};
use crate::value_view::DynamicValueView;

pub struct MainPanel {
    undo: Option<Rc<UndoManager>>,
    pub list: TreeList,
    pub selection: PropertySelection,
    pub toolbar: Toolbar,
    inputs: TextInputState,
    focus: FocusState,
    editor: Option<DynamicValueView>,
    selection_changed: Rc<Cell<bool>>,
    _sel_guard: SelectionGuard,
    hover: Option<String>,
    last_frame: Option<Element>,
}

impl MainPanel {
    pub fn new(undo: Option<Rc<UndoManager>>) -> Self {
        let selection = PropertySelection::new();
        let selection_changed = Rc::new(Cell::new(false));
        let guard = {
            let flag = Rc::clone(&selection_changed);
            selection.on_change(move || flag.set(true))
        };
        Self {
            undo,
            list: TreeList::new(),
            selection,
            toolbar: Toolbar::new(),
            inputs: TextInputState::new(),
            focus: FocusState::new(),
            editor: None,
            selection_changed,
            _sel_guard: guard,
            hover: None,
            last_frame: None,
        }
    }

    pub fn undo_manager(&self) -> Option<&UndoManager> {
        self.undo.as_deref()
    }

    pub fn inputs(&self) -> &TextInputState {
        &self.inputs
    }

    /// Direct access to the toolbar's text fields, e.g. to prefill them.
    pub fn inputs_mut(&mut self) -> &mut TextInputState {
        &mut self.inputs
    }

    /// Rebind the displayed tree. `None` clears the list; rebinding the same
    /// node is a no-op; a different node tears the old items down and builds
    /// fresh ones.
    pub fn set_tree(&mut self, tree: Option<ValueTree>) {
        if self.list.root_node() == tree {
            return;
        }
        self.selection.deselect();
        self.editor = None;
        self.list.set_root(tree);
    }

    // ------------------------------------------------------------------
    // Frame construction

    pub fn build(&mut self) -> Element {
        self.sync();

        let rows = self.list.rows();
        let editing = self
            .editor
            .as_ref()
            .map(|e| (e.node().clone(), e.name().clone()));
        let drop_marker = self.list.drag().and_then(|d| d.target);

        let mut list_el = Element::col()
            .id("list")
            .width(Size::Fill)
            .style(Style::new().background(Color::var("widget.background")));
        for (row_index, entry) in rows.iter().enumerate().skip(self.list.scroll()) {
            list_el = list_el.child(node_view::element(&NodeRowParams {
                row_index,
                entry,
                list_selected: self.list.is_selected(&entry.node),
                hover_id: self.hover.as_deref(),
                selection: &self.selection,
                inputs: &self.inputs,
                editing: editing.as_ref(),
                drop_marker: drop_marker
                    .and_then(|(row, pos)| (row == row_index).then_some(pos)),
            }));
        }

        let (can_undo, can_redo) = match &self.undo {
            Some(undo) => (undo.can_undo(), undo.can_redo()),
            None => (false, false),
        };
        let frame = Element::row()
            .id("panel")
            .style(Style::new().background(Color::var("window.background")))
            .child(self.toolbar.element(&self.inputs, &self.focus, can_undo, can_redo))
            .child(list_el);

        self.last_frame = Some(frame.clone());
        frame
    }

    /// Settle retained state before building: rebuild dirty items, drop a
    /// stale editor, reseed the editor text after external changes.
    fn sync(&mut self) {
        self.list.refresh();

        if self.selection_changed.replace(false) {
            if let Some(editor) = &self.editor {
                if !self.selection.is_selected(editor.node(), editor.name()) {
                    self.cancel_edit();
                }
            }
        }

        let reseed = match &self.editor {
            Some(editor) if editor.take_refresh() => Some(editor.display_text()),
            Some(editor) if editor.value().is_none() => {
                // Property vanished underneath the edit
                None
            }
            _ => return,
        };
        match reseed {
            Some(text) => self.inputs.set(VALUE_EDIT_INPUT, text),
            None => self.cancel_edit(),
        }
    }

    pub fn has_focus(&self) -> bool {
        self.focus.focused().is_some()
    }

    // ------------------------------------------------------------------
    // Event routing

    /// Returns true if the event was consumed.
    pub fn handle_event(&mut self, event: &Event, layout: &LayoutResult) -> bool {
        match *event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
                modifiers,
            } => self.handle_mouse_down(x, y, modifiers, layout),
            Event::MouseDrag { x: _, y, .. } => {
                if self.list.drag().is_some() {
                    let target = self.row_at(y, layout);
                    self.list.update_drag(y, target);
                    true
                } else {
                    false
                }
            }
            Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
                modifiers,
            } => self.handle_mouse_up(x, y, modifiers, layout),
            Event::Scroll { x, y, delta } => {
                if self.over_list(x, y, layout) {
                    self.list.scroll_by(delta);
                    true
                } else {
                    false
                }
            }
            Event::MouseMove { x, y } => {
                self.hover = self.hit(x, y, layout);
                false
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let Some(focused) = self.focus.focused().map(String::from) else {
            return false;
        };

        if key == Key::Escape {
            if focused == VALUE_EDIT_INPUT {
                self.cancel_edit();
            }
            self.focus.blur();
            return true;
        }
        if key == Key::Tab {
            if let Some(frame) = &self.last_frame {
                self.focus.focus_next(frame);
            }
            return true;
        }

        match self.inputs.handle_key(&focused, key, modifiers) {
            TextEditResult::Submitted => {
                self.submit_input(&focused);
                true
            }
            TextEditResult::Changed | TextEditResult::Handled => true,
            TextEditResult::Ignored => false,
        }
    }

    fn submit_input(&mut self, id: &str) {
        match id {
            VALUE_EDIT_INPUT => {
                let text = self.inputs.get(VALUE_EDIT_INPUT).to_string();
                if let Some(editor) = self.editor.take() {
                    editor.commit(&text, self.undo.as_deref());
                }
                self.inputs.remove(VALUE_EDIT_INPUT);
                self.focus.blur();
            }
            toolbar::NODE_TYPE_INPUT => self.apply_action(ToolbarAction::AddNode),
            toolbar::PROP_NAME_INPUT | toolbar::PROP_VALUE_INPUT => {
                self.apply_action(ToolbarAction::AddProperty)
            }
            _ => {}
        }
    }

    fn handle_mouse_down(
        &mut self,
        x: u16,
        y: u16,
        modifiers: Modifiers,
        layout: &LayoutResult,
    ) -> bool {
        let Some(id) = self.hit(x, y, layout) else {
            self.focus.blur();
            return false;
        };

        if is_input_id(&id) {
            self.focus.focus(&id);
            return true;
        }
        self.focus.blur();

        if let Some(row) = parse_row_id(&id, "item-") {
            // A drag moves the selection, so pressing an unselected row takes
            // the selection first (ctrl defers to the toggle on release)
            if !modifiers.ctrl {
                if let Some(entry) = self.list.rows().get(row) {
                    if !self.list.is_selected(&entry.node) {
                        self.list.select(entry.node.clone(), false);
                        self.selection.deselect();
                    }
                }
            }
            self.list.begin_drag(x, y, row);
            return true;
        }
        false
    }

    fn handle_mouse_up(
        &mut self,
        x: u16,
        y: u16,
        modifiers: Modifiers,
        layout: &LayoutResult,
    ) -> bool {
        if self.list.end_drag(self.undo.as_deref()) {
            return true;
        }

        let Some(id) = self.hit(x, y, layout) else {
            return false;
        };
        let rows = self.list.rows();

        if let Some(action) = Toolbar::action_for(&id) {
            self.apply_action(action);
            return true;
        }

        if let Some(row) = parse_row_id(&id, "tgl-") {
            self.list.toggle_at(row);
            return true;
        }
        if let Some((row, name)) = parse_prop_id(&id, "inc-") {
            if let Some(entry) = rows.get(row) {
                DynamicValueView::new(entry.node.clone(), name).increment(self.undo.as_deref());
            }
            return true;
        }
        if let Some((row, name)) = parse_prop_id(&id, "dec-") {
            if let Some(entry) = rows.get(row) {
                DynamicValueView::new(entry.node.clone(), name).decrement(self.undo.as_deref());
            }
            return true;
        }
        if let Some((row, name)) = parse_prop_id(&id, "chk-") {
            if let Some(entry) = rows.get(row) {
                DynamicValueView::new(entry.node.clone(), name).toggle(self.undo.as_deref());
            }
            return true;
        }
        if let Some((row, name)) = parse_prop_id(&id, "edit-") {
            if let Some(entry) = rows.get(row) {
                self.begin_edit(entry.node.clone(), name);
            }
            return true;
        }
        if let Some((row, name)) = parse_prop_id(&id, "prop-") {
            if let Some(entry) = rows.get(row) {
                self.selection.select(entry.node.clone(), name);
            }
            return true;
        }
        if let Some(row) = parse_row_id(&id, "item-") {
            if let Some(entry) = rows.get(row) {
                self.list.select(entry.node.clone(), modifiers.ctrl);
                self.selection.deselect();
            }
            return true;
        }
        false
    }

    fn begin_edit(&mut self, node: ValueTree, name: Identifier) {
        let editor = DynamicValueView::new(node, name);
        self.inputs.set(VALUE_EDIT_INPUT, editor.display_text());
        self.focus.focus(VALUE_EDIT_INPUT);
        self.editor = Some(editor);
    }

    fn cancel_edit(&mut self) {
        self.editor = None;
        self.inputs.remove(VALUE_EDIT_INPUT);
        if self.focus.focused() == Some(VALUE_EDIT_INPUT) {
            self.focus.blur();
        }
    }

    // ------------------------------------------------------------------
    // Toolbar actions

    pub fn apply_action(&mut self, action: ToolbarAction) {
        let undo = self.undo.clone();
        let undo = undo.as_deref();
        match action {
            ToolbarAction::AddNode => {
                let text = self.inputs.get(toolbar::NODE_TYPE_INPUT).to_string();
                let Ok(type_name) = text.parse::<Identifier>() else {
                    self.toolbar.node_type_error = true;
                    return;
                };
                self.toolbar.node_type_error = false;
                let Some(target) = self.list.first_selected().or(self.list.root_node()) else {
                    return;
                };
                target.add_child(ValueTree::new(type_name), None, undo);
                if let Some(undo) = undo {
                    undo.begin_new_transaction();
                }
                self.inputs.set(toolbar::NODE_TYPE_INPUT, "");
            }
            ToolbarAction::AddProperty => {
                let text = self.inputs.get(toolbar::PROP_NAME_INPUT).to_string();
                let Ok(name) = text.parse::<Identifier>() else {
                    self.toolbar.prop_name_error = true;
                    return;
                };
                self.toolbar.prop_name_error = false;
                let Some(target) = self.list.first_selected().or(self.list.root_node()) else {
                    return;
                };
                let value = self.toolbar.make_value(self.inputs.get(toolbar::PROP_VALUE_INPUT));
                target.set_property(&name, value, undo);
                if let Some(undo) = undo {
                    undo.begin_new_transaction();
                }
                self.inputs.set(toolbar::PROP_NAME_INPUT, "");
                self.inputs.set(toolbar::PROP_VALUE_INPUT, "");
            }
            ToolbarAction::CycleType => self.toolbar.cycle_type(),
            ToolbarAction::DeleteNodes => {
                // Each removal is its own undo step; the root has no parent
                // and is skipped
                for node in self.list.selected().to_vec() {
                    if let Some(parent) = node.parent() {
                        parent.remove_child_tree(&node, undo);
                        if let Some(undo) = undo {
                            undo.begin_new_transaction();
                        }
                    } else {
                        debug!("delete skipped the root node");
                    }
                }
                self.list.clear_selection();
            }
            ToolbarAction::DeleteProperty => {
                if let Some((node, name)) = self.selection.current() {
                    node.remove_property(&name, undo);
                    if let Some(undo) = undo {
                        undo.begin_new_transaction();
                    }
                    self.selection.deselect();
                }
            }
            ToolbarAction::Undo => {
                if undo.is_some_and(|u| u.undo()) {
                    self.list.rebuild_root();
                }
            }
            ToolbarAction::Redo => {
                if undo.is_some_and(|u| u.redo()) {
                    self.list.rebuild_root();
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Hit helpers

    fn hit(&self, x: u16, y: u16, layout: &LayoutResult) -> Option<String> {
        let frame = self.last_frame.as_ref()?;
        hit_test(layout, frame, x, y)
    }

    fn over_list(&self, x: u16, y: u16, layout: &LayoutResult) -> bool {
        layout.get("list").is_some_and(|rect| rect.contains(x, y))
    }

    /// Which row the pointer is over, with the half it is in.
    fn row_at(&self, y: u16, layout: &LayoutResult) -> Option<(usize, DropPosition)> {
        let count = self.list.rows().len();
        for row in self.list.scroll()..count {
            if let Some(rect) = layout.get(&node_view::item_id(row)) {
                if y >= rect.y && y < rect.bottom() {
                    let position = if y < rect.y + rect.height / 2 {
                        DropPosition::Before
                    } else {
                        DropPosition::After
                    };
                    return Some((row, position));
                }
            }
        }
        None
    }
}

fn is_input_id(id: &str) -> bool {
    id == VALUE_EDIT_INPUT
        || id == toolbar::NODE_TYPE_INPUT
        || id == toolbar::PROP_NAME_INPUT
        || id == toolbar::PROP_VALUE_INPUT
}

/// Parse `prefix{row}` ids like `item-3`.
fn parse_row_id(id: &str, prefix: &str) -> Option<usize> {
    id.strip_prefix(prefix)?.parse().ok()
}

/// Parse `prefix{row}-{name}` ids like `edit-3-count`.
fn parse_prop_id(id: &str, prefix: &str) -> Option<(usize, Identifier)> {
    let rest = id.strip_prefix(prefix)?;
    let (row, name) = rest.split_once('-')?;
    Some((row.parse().ok()?, name.parse().ok()?))
}
