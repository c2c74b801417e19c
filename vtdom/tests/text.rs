use vtdom::text::{display_width, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide_chars() {
    assert_eq!(display_width("日本"), 4);
}

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate_to_width("abc", 10), "abc");
    assert_eq!(truncate_to_width("abc", 3), "abc");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("abcdef", 4), "abc…");
}

#[test]
fn test_truncate_to_zero() {
    assert_eq!(truncate_to_width("abcdef", 0), "");
}

#[test]
fn test_truncate_wide_chars_never_split() {
    // "日" is two columns wide, so only one fits before the ellipsis
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}
