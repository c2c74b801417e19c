use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Border, Direction, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn top(&self) -> u16 {
        self.y
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        let x = self.x.saturating_add(left);
        let y = self.y.saturating_add(top);
        let width = self.width.saturating_sub(left + right);
        let height = self.height.saturating_sub(top + bottom);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

pub type LayoutResult = HashMap<String, Rect>;

/// Compute a rect for every element in the tree, keyed by element id.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();

    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let border_size = element.style.border.size();
    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed and auto sizes, count the fill items
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    for child in children {
        let child_main = if is_row { child.width } else { child.height };
        match child_main {
            Size::Fixed(n) => fixed_total += clamp_main(child, n, is_row),
            Size::Auto => fixed_total += clamp_main(child, estimate_size(child, is_row), is_row),
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // Second pass: assign rects
    let mut offset = 0u16;

    for child in children {
        let child_main = if is_row { child.width } else { child.height };
        let main = match child_main {
            Size::Fixed(n) => clamp_main(child, n, is_row),
            Size::Auto => clamp_main(child, estimate_size(child, is_row), is_row),
            Size::Fill => clamp_main(child, fill_size, is_row),
        };

        let child_cross = if is_row { child.height } else { child.width };
        let cross = match child_cross {
            Size::Fixed(n) => n.min(cross_size),
            Size::Fill => cross_size,
            Size::Auto => estimate_size(child, !is_row).min(cross_size),
        };
        let cross = if is_row {
            cross
        } else {
            clamp_main(child, cross, true).min(cross_size)
        };

        let main = main.min(main_size.saturating_sub(offset));

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y + offset, cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += main + element.gap;
    }
}

// Width constraints only apply on the horizontal axis.
fn clamp_main(child: &Element, size: u16, is_row: bool) -> u16 {
    if !is_row {
        return size;
    }
    let size = child.min_width.map_or(size, |m| size.max(m));
    child.max_width.map_or(size, |m| size.min(m))
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    };

    if !is_width {
        return base.min(available);
    }

    let with_min = element.min_width.map_or(base, |m| base.max(m));
    let with_max = element.max_width.map_or(with_min, |m| with_min.min(m));
    with_max.min(available)
}

fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let border_size = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                display_width(text) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::TextInput {
            value, placeholder, ..
        } => {
            if is_width {
                let shown = if value.is_empty() {
                    placeholder.as_deref().unwrap_or("")
                } else {
                    value.as_str()
                };
                // One extra column keeps the cursor visible at end of text.
                display_width(shown) as u16 + 1
            } else {
                1
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if element.direction == Direction::Row && is_width
                || element.direction == Direction::Column && !is_width
            {
                let gap_total = element.gap * (children.len().saturating_sub(1)) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size + padding + border_size
}
