use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::char_width;
use crate::types::{Border, ColorContext, Rgb, Style, TextStyle};

/// Paint the element tree into the buffer. Colors are resolved against the
/// theme on every call, so swapping the theme takes effect next frame.
pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    colors: &ColorContext,
    buf: &mut Buffer,
) {
    render_element(element, layout, colors, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, colors: &ColorContext, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let style = effective_style(element);

    if let Some(bg) = &style.background {
        fill_rect(buf, *rect, colors.resolve(bg));
    }

    render_border(&style, *rect, colors, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element, &style, *rect, colors, buf);
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => {
            render_input(
                value,
                *cursor,
                placeholder.as_deref(),
                *focused,
                element,
                &style,
                *rect,
                colors,
                buf,
            );
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, colors, buf);
            }
        }
    }
}

fn effective_style(element: &Element) -> Style {
    let mut style = element.style.clone();
    if element.focused {
        if let Some(focus) = &element.style_focused {
            if focus.background.is_some() {
                style.background = focus.background.clone();
            }
            if focus.foreground.is_some() {
                style.foreground = focus.foreground.clone();
            }
            if focus.border != Border::None {
                style.border = focus.border;
            }
            if focus.border_color.is_some() {
                style.border_color = focus.border_color.clone();
            }
        }
    }
    style
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn inner_rect(element: &Element, style: &Style, rect: Rect) -> Rect {
    let border_size = style.border.size();
    rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    )
}

fn render_text(
    text: &str,
    element: &Element,
    style: &Style,
    rect: Rect,
    colors: &ColorContext,
    buf: &mut Buffer,
) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| colors.resolve(c))
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = style.background.as_ref().map(|c| colors.resolve(c));

    let inner = inner_rect(element, style, rect);
    draw_line(text, inner, fg, explicit_bg, style.text_style, buf);
}

#[allow(clippy::too_many_arguments)]
fn render_input(
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
    element: &Element,
    style: &Style,
    rect: Rect,
    colors: &ColorContext,
    buf: &mut Buffer,
) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| colors.resolve(c))
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = style.background.as_ref().map(|c| colors.resolve(c));

    let inner = inner_rect(element, style, rect);
    if inner.is_empty() {
        return;
    }

    if value.is_empty() && !focused {
        if let Some(placeholder) = placeholder {
            let mut dim = style.text_style;
            dim.dim = true;
            draw_line(placeholder, inner, fg, explicit_bg, dim, buf);
        }
        return;
    }

    // Keep the cursor inside the visible window by scrolling whole chars.
    let width = inner.width as usize;
    let char_count = value.chars().count();
    let cursor = cursor.min(char_count);
    let scroll = (cursor + 1).saturating_sub(width);
    let visible: String = value.chars().skip(scroll).collect();

    draw_line(&visible, inner, fg, explicit_bg, style.text_style, buf);

    if focused {
        let cursor_x = inner.x + (cursor - scroll) as u16;
        if cursor_x < inner.right() {
            if let Some(cell) = buf.get_mut(cursor_x, inner.y) {
                // Reverse video cursor
                std::mem::swap(&mut cell.fg, &mut cell.bg);
            }
        }
    }
}

fn draw_line(
    text: &str,
    inner: Rect,
    fg: Rgb,
    explicit_bg: Option<Rgb>,
    text_style: TextStyle,
    buf: &mut Buffer,
) {
    let mut x = inner.x;
    let y = inner.y;
    if y >= inner.bottom() {
        return;
    }

    for ch in text.chars() {
        let w = char_width(ch) as u16;
        if w == 0 {
            continue;
        }
        if x + w > inner.right() {
            break;
        }

        // Preserve painted background when the element has none of its own
        let bg = explicit_bg
            .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0)));

        buf.set(
            x,
            y,
            Cell::new(ch).with_fg(fg).with_bg(bg).with_style(text_style),
        );
        if w == 2 {
            if let Some(cell) = buf.get_mut(x + 1, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = true;
            }
        }
        x += w;
    }
}

fn render_border(style: &Style, rect: Rect, colors: &ColorContext, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    let fg = style
        .border_color
        .as_ref()
        .or(style.foreground.as_ref())
        .map(|c| colors.resolve(c))
        .unwrap_or(Rgb::new(255, 255, 255));

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        // Preserve existing background
    }
}
