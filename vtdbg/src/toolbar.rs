//! The left-hand toolbar: add/delete nodes and properties, undo/redo.

use vtdom::{Border, Color, Edges, Element, FocusState, Size, Style, TextInputState};
use vtree::Var;
use vtree::value::{parse_bool, parse_leading_f64, parse_leading_i32, parse_leading_i64};

pub const TOOLBAR_WIDTH: u16 = 26;

pub const NODE_TYPE_INPUT: &str = "tb-node-type";
pub const PROP_NAME_INPUT: &str = "tb-prop-name";
pub const PROP_VALUE_INPUT: &str = "tb-prop-value";

pub const ADD_NODE_BUTTON: &str = "tb-add-node";
pub const ADD_PROP_BUTTON: &str = "tb-add-prop";
pub const TYPE_SELECTOR: &str = "tb-prop-type";
pub const DEL_NODE_BUTTON: &str = "tb-del-node";
pub const DEL_PROP_BUTTON: &str = "tb-del-prop";
pub const UNDO_BUTTON: &str = "tb-undo";
pub const REDO_BUTTON: &str = "tb-redo";

/// The property types offered by the add-property selector. Read-only kinds
/// are deliberately absent.
pub const EDITABLE_TYPES: [&str; 7] = [
    "Void",
    "Undefined",
    "Int",
    "Int64",
    "Bool",
    "Double",
    "String",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    AddNode,
    AddProperty,
    CycleType,
    DeleteNodes,
    DeleteProperty,
    Undo,
    Redo,
}

#[derive(Default)]
pub struct Toolbar {
    pub type_index: usize,
    pub node_type_error: bool,
    pub prop_name_error: bool,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_for(id: &str) -> Option<ToolbarAction> {
        match id {
            ADD_NODE_BUTTON => Some(ToolbarAction::AddNode),
            ADD_PROP_BUTTON => Some(ToolbarAction::AddProperty),
            TYPE_SELECTOR => Some(ToolbarAction::CycleType),
            DEL_NODE_BUTTON => Some(ToolbarAction::DeleteNodes),
            DEL_PROP_BUTTON => Some(ToolbarAction::DeleteProperty),
            UNDO_BUTTON => Some(ToolbarAction::Undo),
            REDO_BUTTON => Some(ToolbarAction::Redo),
            _ => None,
        }
    }

    pub fn selected_type(&self) -> &'static str {
        EDITABLE_TYPES[self.type_index % EDITABLE_TYPES.len()]
    }

    pub fn cycle_type(&mut self) {
        self.type_index = (self.type_index + 1) % EDITABLE_TYPES.len();
    }

    /// Build a value of the selected type from raw text, per the editor's
    /// parse rules.
    pub fn make_value(&self, text: &str) -> Var {
        match self.selected_type() {
            "Void" => Var::Void,
            "Undefined" => Var::Undefined,
            "Int" => Var::Int(parse_leading_i32(text)),
            "Int64" => Var::Int64(parse_leading_i64(text)),
            "Bool" => Var::Bool(parse_bool(text)),
            "Double" => Var::Double(parse_leading_f64(text)),
            _ => Var::String(text.to_string()),
        }
    }

    pub fn element(
        &self,
        inputs: &TextInputState,
        focus: &FocusState,
        can_undo: bool,
        can_redo: bool,
    ) -> Element {
        Element::col()
            .id("toolbar")
            .width(Size::Fixed(TOOLBAR_WIDTH))
            .padding(Edges::all(1))
            .gap(1)
            .style(Style::new().background(Color::var("toolbar.background")))
            .child(section_label("node"))
            .child(input_field(
                NODE_TYPE_INPUT,
                "type to add",
                self.node_type_error,
                inputs,
                focus,
            ))
            .child(button(ADD_NODE_BUTTON, "Add node", true))
            .child(button(DEL_NODE_BUTTON, "Delete selected", true))
            .child(section_label("property"))
            .child(input_field(
                PROP_NAME_INPUT,
                "name to add",
                self.prop_name_error,
                inputs,
                focus,
            ))
            .child(button(
                TYPE_SELECTOR,
                format!("< {} >", self.selected_type()),
                true,
            ))
            .child(input_field(
                PROP_VALUE_INPUT,
                "new value",
                false,
                inputs,
                focus,
            ))
            .child(button(ADD_PROP_BUTTON, "Add property", true))
            .child(button(DEL_PROP_BUTTON, "Delete property", true))
            .child(section_label("history"))
            .child(button(UNDO_BUTTON, "Undo", can_undo))
            .child(button(REDO_BUTTON, "Redo", can_redo))
    }
}

fn section_label(text: &str) -> Element {
    Element::text(text)
        .id(format!("tb-section-{text}"))
        .height(Size::Fixed(1))
        .style(Style::new().foreground(Color::var("hint.text")).dim())
}

fn input_field(
    id: &str,
    placeholder: &str,
    error: bool,
    inputs: &TextInputState,
    focus: &FocusState,
) -> Element {
    let focused = focus.focused() == Some(id);
    let outline = if error {
        Color::var("error")
    } else if focused {
        Color::var("outline.focused")
    } else {
        Color::var("outline")
    };
    let data = inputs.get_data(id).cloned().unwrap_or_default();

    Element::col()
        .id(format!("{id}-frame"))
        .height(Size::Fixed(3))
        .style(
            Style::new()
                .border(Border::Single)
                .border_color(outline)
                .background(Color::var("widget.background")),
        )
        .child(
            Element::text_input("")
                .id(id)
                .width(Size::Fill)
                .clickable(true)
                .placeholder(placeholder)
                .style(Style::new().foreground(Color::var("text")))
                .input_state(&data, focused),
        )
}

fn button(id: &str, label: impl Into<String>, enabled: bool) -> Element {
    let fg = if enabled {
        Color::var("menu.text")
    } else {
        Color::var("hint.text")
    };
    Element::text(label)
        .id(id)
        .height(Size::Fixed(1))
        .width(Size::Fill)
        .clickable(enabled)
        .style(Style::new().foreground(fg).background(Color::var("selected.bg")))
}
