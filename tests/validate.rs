use popup_client::validate::{normalize_query, parse_count};

#[test]
fn accepts_counts_inside_the_range() {
    assert_eq!(parse_count("1"), Some(1));
    assert_eq!(parse_count("25"), Some(25));
    assert_eq!(parse_count("50"), Some(50));
    assert_eq!(parse_count(" 7 "), Some(7));
}

#[test]
fn rejects_counts_outside_the_range() {
    assert_eq!(parse_count("0"), None);
    assert_eq!(parse_count("51"), None);
    assert_eq!(parse_count("-3"), None);
}

#[test]
fn rejects_non_numeric_input() {
    assert_eq!(parse_count(""), None);
    assert_eq!(parse_count("  "), None);
    assert_eq!(parse_count("abc"), None);
    assert_eq!(parse_count("25abc"), None);
    assert_eq!(parse_count("1.5"), None);
}

#[test]
fn trims_queries() {
    assert_eq!(normalize_query("  hi there  "), Some("hi there".to_string()));
    assert_eq!(normalize_query("hello"), Some("hello".to_string()));
}

#[test]
fn rejects_blank_queries() {
    assert_eq!(normalize_query(""), None);
    assert_eq!(normalize_query("   "), None);
    assert_eq!(normalize_query("\t\n"), None);
}
