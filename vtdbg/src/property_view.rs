//! One property row: name label, type label, value control.

use vtdom::{Color, Element, Size, Style, TextInputState};
use vtree::{Identifier, Var};

pub const NAME_WIDTH: u16 = 14;
pub const TYPE_WIDTH: u16 = 11;

/// Element id of the one live value editor. A fixed id keeps the edit bound
/// to its input state even when rows shift underneath it.
pub const VALUE_EDIT_INPUT: &str = "value-edit";

pub fn row_id(row_index: usize, name: &Identifier) -> String {
    format!("prop-{row_index}-{name}")
}

pub fn edit_id(row_index: usize, name: &Identifier) -> String {
    format!("edit-{row_index}-{name}")
}

pub fn inc_id(row_index: usize, name: &Identifier) -> String {
    format!("inc-{row_index}-{name}")
}

pub fn dec_id(row_index: usize, name: &Identifier) -> String {
    format!("dec-{row_index}-{name}")
}

pub fn toggle_id(row_index: usize, name: &Identifier) -> String {
    format!("chk-{row_index}-{name}")
}

pub struct PropertyRowParams<'a> {
    pub row_index: usize,
    pub name: &'a Identifier,
    pub value: &'a Var,
    pub selected: bool,
    pub hovered: bool,
    /// Whether this row's value is the one being edited right now.
    pub editing: bool,
    pub inputs: &'a TextInputState,
}

/// Build the one-line element for a property row. The row itself is clickable
/// (mouse-up publishes it as the global selection); the value control inside
/// claims its own clicks.
pub fn element(params: &PropertyRowParams) -> Element {
    let PropertyRowParams {
        row_index,
        name,
        value,
        selected,
        hovered,
        editing,
        inputs,
    } = params;

    let mut style = Style::new();
    if *selected {
        style = style.background(Color::var("selected.bg.prop"));
    } else if *hovered {
        style = style.background(Color::var("hover.bg.prop"));
    }

    Element::row()
        .id(row_id(*row_index, name))
        .height(Size::Fixed(1))
        .clickable(true)
        .style(style)
        .child(
            Element::text(name.as_str())
                .id(format!("prop-name-{row_index}-{name}"))
                .width(Size::Fixed(NAME_WIDTH))
                .style(Style::new().foreground(Color::var("prop.text"))),
        )
        .child(
            Element::text(value.type_name())
                .id(format!("prop-type-{row_index}-{name}"))
                .width(Size::Fixed(TYPE_WIDTH))
                .style(Style::new().foreground(Color::var("hint.text"))),
        )
        .child(value_control(*row_index, name, value, *editing, inputs))
}

fn value_control(
    row_index: usize,
    name: &Identifier,
    value: &Var,
    editing: bool,
    inputs: &TextInputState,
) -> Element {
    let edit = edit_id(row_index, name);

    // An edit in progress replaces the display with the live text input
    if editing {
        let data = inputs.get_data(VALUE_EDIT_INPUT).cloned().unwrap_or_default();
        return Element::text_input("")
            .id(VALUE_EDIT_INPUT)
            .clickable(true)
            .width(Size::Fill)
            .style(
                Style::new()
                    .foreground(Color::var("highlight.text"))
                    .background(Color::var("widget.background")),
            )
            .input_state(&data, true);
    }

    match value {
        Var::Int(_) | Var::Int64(_) => Element::row()
            .id(format!("val-{row_index}-{name}"))
            .width(Size::Fill)
            .child(
                Element::text(value.to_string())
                    .id(edit)
                    .width(Size::Fill)
                    .clickable(true)
                    .style(Style::new().foreground(Color::var("text"))),
            )
            .child(stepper(dec_id(row_index, name), " - "))
            .child(stepper(inc_id(row_index, name), " + ")),
        Var::Bool(b) => Element::row()
            .id(format!("val-{row_index}-{name}"))
            .width(Size::Fill)
            .child(
                Element::text(if *b { "[x] " } else { "[ ] " })
                    .id(toggle_id(row_index, name))
                    .width(Size::Fixed(4))
                    .clickable(true)
                    .style(Style::new().foreground(Color::var("text"))),
            )
            .child(
                Element::text(value.to_string())
                    .id(format!("boolval-{row_index}-{name}"))
                    .width(Size::Fill)
                    .style(Style::new().foreground(Color::var("hint.text"))),
            ),
        _ if value.is_editable() => Element::text(value.to_string())
            .id(edit)
            .width(Size::Fill)
            .clickable(true)
            .style(Style::new().foreground(Color::var("text"))),
        _ => Element::text(value.to_string())
            .id(format!("val-{row_index}-{name}"))
            .width(Size::Fill)
            .style(Style::new().foreground(Color::var("hint.text")).dim()),
    }
}

fn stepper(id: String, label: &str) -> Element {
    Element::text(label)
        .id(id)
        .width(Size::Fixed(3))
        .clickable(true)
        .style(Style::new().foreground(Color::var("menu.text")).bold())
}
