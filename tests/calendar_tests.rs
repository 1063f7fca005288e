use dailygrace::core::calendar::{CalendarCell, MonthCursor, build_month, build_month_with, render_month};
use dailygrace::export::parse_range;
use dailygrace::utils::date::DateKey;

mod common;
use common::memory_store;

fn key(s: &str) -> DateKey {
    DateKey::parse(s).expect("valid date")
}

fn days(cells: &[CalendarCell]) -> usize {
    cells.iter().filter(|c| !c.is_blank()).count()
}

fn blanks(cells: &[CalendarCell]) -> usize {
    cells.iter().take_while(|c| c.is_blank()).count()
}

#[test]
fn test_leading_blanks_follow_first_weekday() {
    // 2024-02-01 is a Thursday
    let feb = build_month_with(MonthCursor::new(2024, 2).expect("month"), key("2000-01-01"), |_| false);
    assert_eq!(blanks(&feb), 4);
    assert_eq!(days(&feb), 29);

    // 2023-10-01 is a Sunday
    let oct = build_month_with(MonthCursor::new(2023, 10).expect("month"), key("2000-01-01"), |_| false);
    assert_eq!(blanks(&oct), 0);
    assert_eq!(days(&oct), 31);
}

#[test]
fn test_february_lengths() {
    let today = key("2000-01-01");
    for (year, expected) in [(2023, 28), (2024, 29), (1900, 28), (2000, 29)] {
        let cells = build_month_with(MonthCursor::new(year, 2).expect("month"), today, |_| false);
        assert_eq!(days(&cells), expected, "February {}", year);
    }
}

#[test]
fn test_today_and_content_flags() {
    let store = memory_store(true);
    let cursor = MonthCursor::new(2023, 12).expect("month");
    let cells = build_month(cursor, &store, key("2023-12-24"));

    let day = |n: u32| {
        cells
            .iter()
            .find_map(|c| match c {
                CalendarCell::Day(d) if d.key == key(&format!("2023-12-{:02}", n)) => Some(d.clone()),
                _ => None,
            })
            .expect("day present")
    };

    assert!(day(25).has_record);
    assert!(!day(25).is_today);
    assert!(day(24).is_today);
    assert!(!day(24).has_record);
    assert_eq!(
        cells
            .iter()
            .filter(|c| matches!(c, CalendarCell::Day(d) if d.has_record))
            .count(),
        1
    );
}

#[test]
fn test_cursor_wraps_across_years() {
    let jan = MonthCursor::new(2024, 1).expect("month");
    assert_eq!(jan.previous(), MonthCursor::new(2023, 12).expect("month"));

    let mut cursor = jan;
    for _ in 0..12 {
        cursor = cursor.next();
    }
    assert_eq!(cursor, MonthCursor::new(2025, 1).expect("month"));
    assert_eq!(MonthCursor::new(2024, 12).expect("month").next().to_string(), "2025-01");

    let mut cursor = jan;
    for _ in 0..12 {
        cursor = cursor.previous();
    }
    assert_eq!(cursor, MonthCursor::new(2023, 1).expect("month"));
}

#[test]
fn test_cursor_previous_walks_back_through_december() {
    let mut cursor = MonthCursor::new(2024, 3).expect("month");
    let mut seen = Vec::new();
    for _ in 0..12 {
        cursor = cursor.previous();
        seen.push(cursor.to_string());
    }
    assert_eq!(seen[1], "2024-01");
    assert_eq!(seen[2], "2023-12");
    assert_eq!(seen[11], "2023-03");

    for _ in 0..12 {
        cursor = cursor.next();
    }
    assert_eq!(cursor, MonthCursor::new(2024, 3).expect("month"));
}

#[test]
fn test_cursor_parse_and_validation() {
    let c = MonthCursor::parse("2024-03").expect("parse");
    assert_eq!((c.year, c.month), (2024, 3));
    assert_eq!(c.month_name(), "March");
    assert!(MonthCursor::parse("2024-00").is_err());
    assert!(MonthCursor::parse("2024-13").is_err());
    assert!(MonthCursor::parse("March").is_err());
}

#[test]
fn test_render_month_plain() {
    let cursor = MonthCursor::new(2023, 12).expect("month");
    let cells = build_month_with(cursor, key("2000-01-01"), |k| *k == key("2023-12-25"));
    let text = render_month(cursor, &cells, false);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "December 2023");
    // 2023-12-01 is a Friday: five blank cells, then the 1st
    assert!(lines[2].starts_with(&" ".repeat(20)));
    assert!(lines[2].contains("  1 "));
    assert!(text.contains(" 25♥"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_export_range_bounds() {
    let (from, to) = parse_range("2024-02").expect("month range");
    assert_eq!(from.to_string(), "2024-02-01");
    assert_eq!(to.to_string(), "2024-02-29");

    let (from, to) = parse_range("2023:2024-03").expect("mixed range");
    assert_eq!(from.to_string(), "2023-01-01");
    assert_eq!(to.to_string(), "2024-03-31");

    assert!(parse_range("2024-05:2024-01").is_err());
}
