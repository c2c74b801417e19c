use vtdom::{hit_test, hit_test_any, layout, Element, Rect, Size};

fn two_rows() -> Element {
    Element::col()
        .id("root")
        .width(Size::Fixed(40))
        .height(Size::Fixed(10))
        .child(
            Element::box_()
                .id("row-a")
                .height(Size::Fixed(1))
                .clickable(true),
        )
        .child(
            Element::box_()
                .id("row-b")
                .height(Size::Fixed(1))
                .clickable(true),
        )
}

#[test]
fn test_hit_finds_clickable_row() {
    let root = two_rows();
    let rects = layout(&root, Rect::from_size(40, 10));

    assert_eq!(hit_test(&rects, &root, 5, 0).as_deref(), Some("row-a"));
    assert_eq!(hit_test(&rects, &root, 5, 1).as_deref(), Some("row-b"));
}

#[test]
fn test_hit_misses_outside() {
    let root = two_rows();
    let rects = layout(&root, Rect::from_size(40, 10));

    assert_eq!(hit_test(&rects, &root, 50, 0), None);
}

#[test]
fn test_non_clickable_container_is_transparent() {
    let root = two_rows();
    let rects = layout(&root, Rect::from_size(40, 10));

    // Point below both rows lands on the root, which is not clickable
    assert_eq!(hit_test(&rects, &root, 5, 5), None);
    assert_eq!(hit_test_any(&rects, &root, 5, 5).as_deref(), Some("root"));
}

#[test]
fn test_deepest_child_wins() {
    let root = Element::col()
        .id("outer")
        .width(Size::Fixed(20))
        .height(Size::Fixed(5))
        .clickable(true)
        .child(
            Element::box_()
                .id("inner")
                .height(Size::Fixed(2))
                .clickable(true),
        );
    let rects = layout(&root, Rect::from_size(20, 5));

    assert_eq!(hit_test(&rects, &root, 3, 1).as_deref(), Some("inner"));
    assert_eq!(hit_test(&rects, &root, 3, 4).as_deref(), Some("outer"));
}
