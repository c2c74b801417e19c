//! One node's block in the list: expand triangle, type label, stacked
//! property rows. Mouse-up inside a property row selects that property;
//! anywhere else in the block it selects the list item and clears the
//! property selection (the panel routes this by hit id).

use vtdom::{Color, Element, Size, Style, TextInputState};
use vtree::{Identifier, ValueTree, Var};

use crate::property_view::{self, PropertyRowParams};
use crate::selection::PropertySelection;
use crate::tree_view::{DropPosition, RowEntry};

pub const TYPE_LABEL_WIDTH: u16 = 16;

pub fn item_id(row_index: usize) -> String {
    format!("item-{row_index}")
}

pub fn triangle_id(row_index: usize) -> String {
    format!("tgl-{row_index}")
}

pub struct NodeRowParams<'a> {
    pub row_index: usize,
    pub entry: &'a RowEntry,
    pub list_selected: bool,
    pub hover_id: Option<&'a str>,
    pub selection: &'a PropertySelection,
    pub inputs: &'a TextInputState,
    pub editing: Option<&'a (ValueTree, Identifier)>,
    pub drop_marker: Option<DropPosition>,
}

pub fn element(params: &NodeRowParams) -> Element {
    let entry = params.entry;
    let row_index = params.row_index;
    let node = &entry.node;

    let mut style = Style::new();
    if params.list_selected {
        style = style.background(Color::var("selected.bg"));
    } else if params.hover_id == Some(item_id(row_index).as_str()) {
        style = style.background(Color::var("hover.bg"));
    }
    if params.drop_marker.is_some() {
        // The half of the row decides before/after; the row itself lights up
        style = style.background(Color::var("highlight.fill"));
    }

    let triangle = if !entry.has_children {
        "  "
    } else if entry.open {
        "▾ "
    } else {
        "▸ "
    };

    let names = node.property_names();
    let mut props = Element::col()
        .id(format!("props-{row_index}"))
        .width(Size::Fill);
    for name in &names {
        let value = node.property(name).unwrap_or(Var::Void);
        let selected = params.selection.is_selected(node, name);
        let row_id = property_view::row_id(row_index, name);
        props = props.child(property_view::element(&PropertyRowParams {
            row_index,
            name,
            value: &value,
            selected,
            hovered: !selected && params.hover_id == Some(row_id.as_str()),
            editing: params
                .editing
                .is_some_and(|(n, edited)| n == node && edited == name),
            inputs: params.inputs,
        }));
    }
    if names.is_empty() {
        props = props.child(
            Element::text("")
                .id(format!("props-empty-{row_index}"))
                .height(Size::Fixed(1)),
        );
    }

    Element::row()
        .id(item_id(row_index))
        .height(Size::Fixed(entry.height))
        .clickable(true)
        .style(style)
        .child(
            Element::box_()
                .id(format!("indent-{row_index}"))
                .width(Size::Fixed(entry.depth * 2)),
        )
        .child(
            Element::text(triangle)
                .id(triangle_id(row_index))
                .width(Size::Fixed(2))
                .height(Size::Fixed(1))
                .clickable(entry.has_children)
                .style(Style::new().foreground(Color::var("menu.text"))),
        )
        .child(
            Element::text(node.type_name().as_str())
                .id(format!("type-{row_index}"))
                .width(Size::Fixed(TYPE_LABEL_WIDTH))
                .height(Size::Fixed(1))
                .style(Style::new().foreground(Color::var("type.text"))),
        )
        .child(props)
}
