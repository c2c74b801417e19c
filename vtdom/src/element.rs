//! The retained element tree widgets describe themselves with each frame.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Direction, Edges, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub enum Content {
    None,
    Text(String),
    Children(Vec<Element>),
    TextInput {
        value: String,
        cursor: usize,
        placeholder: Option<String>,
        focused: bool,
    },
}

impl Default for Content {
    fn default() -> Self {
        Content::None
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,

    pub content: Content,

    pub width: Size,
    pub height: Size,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub padding: Edges,

    pub direction: Direction,
    pub gap: u16,

    pub style: Style,
    /// Applied on top of `style` while this element holds keyboard focus.
    pub style_focused: Option<Style>,

    pub focusable: bool,
    pub clickable: bool,
    pub captures_input: bool,
    pub focused: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Fill,
            height: Size::Fill,
            min_width: None,
            max_width: None,
            padding: Edges::default(),
            direction: Direction::Column,
            gap: 0,
            style: Style::default(),
            style_focused: None,
            focusable: false,
            clickable: false,
            captures_input: false,
            focused: false,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            width: Size::Auto,
            height: Size::Auto,
            ..Default::default()
        }
    }

    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            content: Content::TextInput {
                value: value.into(),
                cursor: 0,
                placeholder: None,
                focused: false,
            },
            height: Size::Fixed(1),
            focusable: true,
            captures_input: true,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        if let Content::TextInput { focused: f, .. } = &mut self.content {
            *f = focused;
        }
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Load value and cursor from a [`TextInputData`](crate::TextInputData).
    pub fn input_state(mut self, data: &crate::text_input::TextInputData, is_focused: bool) -> Self {
        if let Content::TextInput {
            value,
            cursor,
            focused,
            ..
        } = &mut self.content
        {
            *value = data.text.clone();
            *cursor = data.cursor;
            *focused = is_focused;
        }
        self.focused = is_focused;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}

/// Find an element by id, depth first.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }
    None
}
