use crate::cli::utils::*;

#[test]
fn test_truncate_with_ellipsis_short_string() {
    let result = truncate_with_ellipsis("Hundru", 10);
    assert_eq!(result, "Hundru");
}

#[test]
fn test_truncate_with_ellipsis_long_string() {
    let result = truncate_with_ellipsis("Dassam Falls near Taimara village", 10);
    assert_eq!(result, "Dassam ...");
}

#[test]
fn test_truncate_with_ellipsis_unicode() {
    let result = truncate_with_ellipsis("झारखंड पर्यटन", 13);
    assert_eq!(result, "झारखंड पर्यटन");

    let result2 = truncate_with_ellipsis("₹₹₹₹₹₹₹₹", 7);
    assert_eq!(result2, "₹₹₹₹...");
}

#[test]
fn test_format_highlights_none() {
    assert_eq!(format_highlights(None), "-");
}

#[test]
fn test_format_highlights_empty() {
    let highlights = vec![];
    assert_eq!(format_highlights(Some(&highlights)), "-");
}

#[test]
fn test_format_highlights_multiple() {
    let highlights = vec!["Waterfall".to_string(), "Trekking".to_string()];
    assert_eq!(format_highlights(Some(&highlights)), "Waterfall, Trekking");
}

#[test]
fn test_format_optional() {
    assert_eq!(format_optional(Some(4.5)), "4.5");
    assert_eq!(format_optional::<i64>(None), "-");
}

#[test]
fn test_format_event_date() {
    assert_eq!(format_event_date("2025-04-01"), "01 Apr 2025");
    assert_eq!(format_event_date("2025-11-15T18:30:00+05:30"), "15 Nov 2025");
    assert_eq!(format_event_date("next spring"), "next spring");
}
