use crate::cli::utils::*;
use crate::models::CategoryField;
use crate::view::pagination::paginate;

#[test]
fn test_truncate_with_ellipsis_short_string() {
    let result = truncate_with_ellipsis("hello", 10);
    assert_eq!(result, "hello");
}

#[test]
fn test_truncate_with_ellipsis_exact_length() {
    let result = truncate_with_ellipsis("hello", 5);
    assert_eq!(result, "hello");
}

#[test]
fn test_truncate_with_ellipsis_long_string() {
    let result = truncate_with_ellipsis("hello world this is a long string", 10);
    assert_eq!(result, "hello w...");
}

#[test]
fn test_truncate_with_ellipsis_unicode() {
    let result = truncate_with_ellipsis("hello 世界", 8);
    assert_eq!(result, "hello 世界");

    let result2 = truncate_with_ellipsis("hello 世界", 7);
    assert_eq!(result2, "hell...");
}

#[test]
fn test_format_optional() {
    assert_eq!(format_optional(None), "-");
    assert_eq!(format_optional(Some("")), "-");
    assert_eq!(format_optional(Some("Backend")), "Backend");
}

#[test]
fn test_field_names() {
    assert_eq!(
        field_names::<CategoryField>(),
        "id, name, description, exam_count, color"
    );
}

#[test]
fn test_page_footer() {
    let items: Vec<u32> = (0..23).collect();
    let page = paginate(&items, 2, 10).unwrap();
    assert_eq!(page_footer(&page), "Page 2 of 3 | Showing 11 - 20 of 23");
}

#[test]
fn test_page_footer_empty() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 1, 10).unwrap();
    assert_eq!(page_footer(&page), "Page 1 of 1 | Showing 0 - 0 of 0");
}
