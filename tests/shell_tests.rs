use dailygrace::core::shell::run_shell;
use std::io::Cursor;

mod common;
use common::memory_app;

fn run(script: &str, seed: bool) -> (String, dailygrace::core::app::AppState) {
    let mut app = memory_app(seed);
    let mut out: Vec<u8> = Vec::new();
    run_shell(&mut app, Cursor::new(script.to_string()), &mut out).expect("shell runs");
    (String::from_utf8(out).expect("utf8 output"), app)
}

#[test]
fn test_shell_starts_on_home_and_says_goodbye() {
    let (out, _) = run("", true);
    assert!(out.contains("Grace & Daily Bread"));
    assert!(out.contains("[home]"));
    assert!(out.contains("Type `help` for commands."));
    assert!(out.trim_end().ends_with("Goodbye."));
}

#[test]
fn test_shell_reader_sees_notice_for_empty_day() {
    let (out, app) = run("login friend@example.com\nselect 2019-07-07\n", true);
    assert!(out.contains("Hello, friend (logout)"));
    assert!(out.contains("No devotional prepared for this date yet."));
    assert_eq!(app.store.len(), 3);
}

#[test]
fn test_shell_errors_do_not_stop_the_loop() {
    let (out, _) = run("select tomorrow\nset title Nope\nfrobnicate\nhelp\n", true);
    assert!(out.contains("Error: Invalid date format: tomorrow"));
    assert!(out.contains("Error: Access denied"));
    assert!(out.contains("Unknown command 'frobnicate'"));
    assert!(out.contains("set <title|category|content|image> <text>"));
    assert!(out.contains("Goodbye."));
}

#[test]
fn test_shell_read_marks_open_devotional() {
    let (out, app) = run("open 3\nread\n", true);
    assert!(out.contains("A Season of Joy"));
    assert!(out.contains("Marked \"A Season of Joy\" as read."));
    assert!(app.store.find_by_id("3").is_some_and(|d| d.is_read()));
}

#[test]
fn test_shell_admin_create_flow() {
    let script = "\
login admin@grace.com
select 2019-07-07
no
yes
select 2019-07-07
y
set content   The long summer.
submit
set title Midsummer
set category Rest
submit
quit
select 2019-07-08
";
    let (out, app) = run(script, false);

    assert!(out.contains("No devotional found for this date. Create one? (2019-07-07) [yes/no]"));
    assert!(out.contains("Nothing to confirm."));
    assert!(out.contains("Error: Missing required fields: title"));
    assert!(out.contains("Devotional saved successfully! (2019-07-07 · Midsummer)"));
    assert!(!out.contains("2019-07-08"));

    let saved = app
        .store
        .find_by_date(&"2019-07-07".parse().expect("date"))
        .expect("saved record");
    assert_eq!(saved.category, "Rest");
    assert_eq!(saved.content, "The long summer.");
}

#[test]
fn test_shell_admin_date_command_loads_existing() {
    let (out, _) = run("login admin@grace.com\nadmin\ndate 2023-12-25\n", true);
    assert!(out.contains("Editing existing devotional."));
    assert!(out.contains("A Season of Joy"));
}

#[test]
fn test_shell_calendar_month_navigation() {
    let (_, app) = run("next\nnext\nprev\n", true);
    let start = dailygrace::core::calendar::MonthCursor::current();
    assert_eq!(app.cursor, start.next());
}
