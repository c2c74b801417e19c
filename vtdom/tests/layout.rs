use vtdom::{Edges, Element, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> vtdom::LayoutResult {
    vtdom::layout(root, Rect::from_size(width, height))
}

#[test]
fn test_fixed_sizes() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(10));

    let layout = layout_root(&root, 100, 40);
    let rect = layout.get("root").unwrap();

    assert_eq!(*rect, Rect::new(0, 0, 50, 10));
}

#[test]
fn test_fill_takes_available_space() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill);

    let layout = layout_root(&root, 100, 40);
    let rect = layout.get("root").unwrap();

    assert_eq!(rect.width, 100);
    assert_eq!(rect.height, 40);
}

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(80))
        .height(Size::Fixed(40))
        .child(Element::box_().id("a").height(Size::Fixed(5)))
        .child(Element::box_().id("b").height(Size::Fixed(7)));

    let layout = layout_root(&root, 80, 40);

    let a = layout.get("a").unwrap();
    let b = layout.get("b").unwrap();
    assert_eq!(a.y, 0);
    assert_eq!(a.height, 5);
    assert_eq!(b.y, 5);
    assert_eq!(b.height, 7);
}

#[test]
fn test_row_with_fixed_and_fill() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(10))
        .child(Element::box_().id("side").width(Size::Fixed(30)))
        .child(Element::box_().id("main").width(Size::Fill));

    let layout = layout_root(&root, 100, 10);

    let side = layout.get("side").unwrap();
    let main = layout.get("main").unwrap();
    assert_eq!(side.x, 0);
    assert_eq!(side.width, 30);
    assert_eq!(main.x, 30);
    assert_eq!(main.width, 70);
}

#[test]
fn test_gap_between_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(40))
        .gap(2)
        .child(Element::box_().id("a").height(Size::Fixed(3)))
        .child(Element::box_().id("b").height(Size::Fixed(3)));

    let layout = layout_root(&root, 20, 40);

    assert_eq!(layout.get("a").unwrap().y, 0);
    assert_eq!(layout.get("b").unwrap().y, 5);
}

#[test]
fn test_padding_shrinks_content_area() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(20))
        .padding(Edges::all(2))
        .child(Element::box_().id("inner").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 20, 20);
    let inner = layout.get("inner").unwrap();

    assert_eq!(inner.x, 2);
    assert_eq!(inner.y, 2);
    assert_eq!(inner.width, 16);
    assert_eq!(inner.height, 16);
}

#[test]
fn test_auto_width_from_text() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(1))
        .child(Element::text("hello").id("label").width(Size::Auto))
        .child(Element::box_().id("rest").width(Size::Fill));

    let layout = layout_root(&root, 40, 1);

    assert_eq!(layout.get("label").unwrap().width, 5);
    assert_eq!(layout.get("rest").unwrap().x, 5);
    assert_eq!(layout.get("rest").unwrap().width, 35);
}

#[test]
fn test_min_width_applies_to_fill() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(1))
        .child(Element::box_().id("a").width(Size::Fixed(36)))
        .child(Element::box_().id("b").width(Size::Fill).min_width(10));

    let layout = layout_root(&root, 40, 1);
    let b = layout.get("b").unwrap();

    assert_eq!(b.width, 10);
}

#[test]
fn test_children_clamped_to_parent() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .child(Element::box_().id("tall").height(Size::Fixed(3)))
        .child(Element::box_().id("overflow").height(Size::Fixed(10)));

    let layout = layout_root(&root, 10, 5);
    let overflow = layout.get("overflow").unwrap();

    assert_eq!(overflow.y, 3);
    assert_eq!(overflow.height, 2);
}

#[test]
fn test_border_shrinks_content_area() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .style(vtdom::Style::new().border(vtdom::Border::Single))
        .child(Element::box_().id("inner").width(Size::Fill).height(Size::Fill));

    let layout = layout_root(&root, 20, 10);
    let inner = layout.get("inner").unwrap();

    assert_eq!(inner.x, 1);
    assert_eq!(inner.y, 1);
    assert_eq!(inner.width, 18);
    assert_eq!(inner.height, 8);
}
