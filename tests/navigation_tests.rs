use dailygrace::core::navigator::{Action, NOTICE_NO_CONTENT, Navigator, Outcome};
use dailygrace::core::render::{ACCESS_DENIED, NOT_FOUND};
use dailygrace::core::session::Session;
use dailygrace::errors::AppError;
use dailygrace::models::devotional::EditableField;
use dailygrace::models::identity::Identity;
use dailygrace::models::view::View;
use dailygrace::utils::date::DateKey;

mod common;
use common::memory_app;

fn key(s: &str) -> DateKey {
    DateKey::parse(s).expect("valid date")
}

fn login(email: &str) -> Action {
    Action::Login {
        email: email.to_string(),
        password: String::new(),
    }
}

#[test]
fn test_admin_match_is_case_insensitive() {
    let mut session = Session::default();
    let id = session.login("  Admin@Grace.COM ", "whatever").expect("login");
    assert!(id.is_admin);
    assert_eq!(id.name, "Admin");
    assert!(session.is_admin());

    session.logout();
    assert!(session.identity().is_none());
    assert!(!session.is_admin());
}

#[test]
fn test_reader_login_and_blank_email() {
    let mut session = Session::new("pastor@church.org");
    let id = session.login("admin@grace.com", "").expect("login");
    assert!(!id.is_admin);

    assert!(matches!(session.login("   ", "pw"), Err(AppError::InvalidLogin(_))));
}

#[test]
fn test_identity_id_is_stable_per_email() {
    let a = Identity::from_email("friend@example.com", "admin@grace.com");
    let b = Identity::from_email("FRIEND@example.com", "admin@grace.com");
    let c = Identity::from_email("other@example.com", "admin@grace.com");
    assert_eq!(a.id, b.id);
    assert_ne!(a.id, c.id);
    assert_eq!(Identity::from_email("noatsign", "x").name, "noatsign");
}

#[test]
fn test_navigator_select_date_transitions() {
    let mut nav = Navigator::new();
    let d = key("2024-01-01");

    assert_eq!(
        nav.select_date(d, None, false),
        Outcome::Notice(NOTICE_NO_CONTENT.to_string())
    );
    assert_eq!(nav.view(), View::Home);

    assert_eq!(nav.select_date(d, None, true), Outcome::ConfirmCreate(d));
    assert_eq!(nav.pending_create(), Some(d));
    assert_eq!(nav.view(), View::Home);

    assert_eq!(nav.confirm_create(d, true), Outcome::Moved(View::Admin));
    assert_eq!(nav.admin_target(), Some(d));
    assert_eq!(nav.pending_create(), None);

    assert_eq!(nav.select_date(d, Some("42"), false), Outcome::Moved(View::DevotionalDetail));
    assert_eq!(nav.selected_id(), Some("42"));
    assert_eq!(nav.admin_target(), None);
}

#[test]
fn test_navigator_decline_and_reset() {
    let mut nav = Navigator::new();
    let d = key("2024-01-01");
    nav.select_date(d, None, true);
    assert_eq!(nav.decline_create(), Outcome::Stayed);
    assert_eq!(nav.pending_create(), None);
    assert_eq!(nav.view(), View::Home);

    nav.open_record("1");
    assert_eq!(nav.reset(), Outcome::Moved(View::Home));
    assert_eq!(nav.selected_id(), None);
}

#[test]
fn test_login_flow_returns_home() {
    let mut app = memory_app(true);
    app.dispatch(Action::Navigate(View::Login)).expect("navigate");
    assert_eq!(app.view(), View::Login);
    assert!(app.render().contains("For Demo: Use admin@grace.com"));

    app.dispatch(Action::CancelLogin).expect("cancel");
    assert_eq!(app.view(), View::Home);

    app.dispatch(Action::Navigate(View::Login)).expect("navigate");
    assert_eq!(
        app.dispatch(login("reader@example.com")).expect("login"),
        Outcome::Moved(View::Home)
    );
    assert!(app.render().contains("Hello, reader (logout)"));
    assert!(!app.is_admin());
}

#[test]
fn test_admin_view_denied_for_readers() {
    let mut app = memory_app(true);
    app.dispatch(Action::Navigate(View::Admin)).expect("navigate");
    assert_eq!(app.view(), View::Admin);
    assert!(app.render().contains(ACCESS_DENIED));

    app.dispatch(login("reader@example.com")).expect("login");
    app.dispatch(Action::Navigate(View::Admin)).expect("navigate");
    assert!(app.render().contains(ACCESS_DENIED));
    assert!(matches!(
        app.edit_draft(EditableField::Title, "x"),
        Err(AppError::AccessDenied)
    ));
    assert!(matches!(app.submit_draft(), Err(AppError::AccessDenied)));
}

#[test]
fn test_detail_view_for_missing_record() {
    let mut app = memory_app(true);
    app.dispatch(Action::OpenRecord("ghost".into())).expect("open");
    assert_eq!(app.view(), View::DevotionalDetail);
    assert!(app.render().contains(NOT_FOUND));
}

#[test]
fn test_admin_creates_devotional_for_clicked_date() {
    let mut app = memory_app(true);
    app.dispatch(login("admin@grace.com")).expect("login");

    let d = key("2020-02-02");
    assert_eq!(
        app.dispatch(Action::SelectDate(d)).expect("select"),
        Outcome::ConfirmCreate(d)
    );
    app.dispatch(Action::ConfirmCreate(d)).expect("confirm");
    assert_eq!(app.view(), View::Admin);
    assert_eq!(app.draft().and_then(|dr| dr.date), Some(d));

    let rendered = app.render();
    assert!(rendered.contains("Admin Dashboard"));
    assert!(rendered.contains("Required before saving: title, content"));

    app.edit_draft(EditableField::Title, "Candlemas").expect("edit");
    app.edit_draft(EditableField::Content, "Light to the nations.").expect("edit");
    let saved = app.submit_draft().expect("submit");
    assert_eq!(saved.date, d);
    assert_eq!(saved.category, "General");

    assert_eq!(app.store.len(), 4);
    let outcome = app.dispatch(Action::SelectDate(d)).expect("select again");
    assert_eq!(outcome, Outcome::Moved(View::DevotionalDetail));
    assert_eq!(app.selected_record().map(|r| r.title.as_str()), Some("Candlemas"));
}

#[test]
fn test_editing_keeps_id_and_read_flag() {
    let mut app = memory_app(true);
    app.mark_read("3").expect("mark read");

    app.dispatch(login("admin@grace.com")).expect("login");
    app.dispatch(Action::Navigate(View::Admin)).expect("navigate");
    let draft = app.select_admin_date(key("2023-12-25")).expect("load date");
    assert_eq!(draft.id.as_deref(), Some("3"));
    assert_eq!(draft.title, "A Season of Joy");

    app.edit_draft(EditableField::Title, "Joy Renewed").expect("edit");
    let saved = app.submit_draft().expect("submit");
    assert_eq!(saved.id, "3");
    assert!(saved.is_read());
    assert_eq!(app.store.len(), 3);
}

#[test]
fn test_submit_incomplete_form_keeps_store() {
    let mut app = memory_app(false);
    app.dispatch(login("admin@grace.com")).expect("login");
    app.dispatch(Action::Navigate(View::Admin)).expect("navigate");
    app.edit_draft(EditableField::Content, "No title here").expect("edit");

    assert!(matches!(app.submit_draft(), Err(AppError::Validation(_))));
    assert!(app.store.is_empty());
}

#[test]
fn test_logout_clears_session_and_view() {
    let mut app = memory_app(true);
    app.dispatch(login("admin@grace.com")).expect("login");
    app.dispatch(Action::Navigate(View::Admin)).expect("navigate");
    assert!(app.draft().is_some());

    app.dispatch(Action::Logout).expect("logout");
    assert_eq!(app.view(), View::Home);
    assert!(app.identity().is_none());
    assert!(app.draft().is_none());
    assert!(app.render().contains("Sign In"));
}

#[test]
fn test_month_navigation_moves_cursor() {
    let mut app = memory_app(true);
    let start = app.cursor;
    app.dispatch(Action::PreviousMonth).expect("prev");
    assert_eq!(app.cursor, start.previous());
    app.dispatch(Action::NextMonth).expect("next");
    app.dispatch(Action::NextMonth).expect("next");
    assert_eq!(app.cursor, start.next());
}

#[test]
fn test_list_view_renders_cards() {
    let mut app = memory_app(true);
    app.dispatch(Action::Navigate(View::DevotionalList)).expect("navigate");
    let text = app.render();
    assert!(text.contains("[CELEBRATION]"));
    assert!(text.contains("Read Devotional → open 1"));
}

#[test]
fn test_view_names_round_trip() {
    for view in [
        View::Home,
        View::Login,
        View::DevotionalList,
        View::DevotionalDetail,
        View::Admin,
    ] {
        assert_eq!(View::from_name(view.as_str()), Some(view));
    }
    assert_eq!(View::from_name("settings"), None);
}

#[test]
fn test_confirm_create_needs_matching_prompt() {
    let mut nav = Navigator::new();
    let d = key("2024-01-01");

    assert_eq!(nav.confirm_create(d, true), Outcome::Stayed);
    assert_eq!(nav.view(), View::Home);
    assert_eq!(nav.admin_target(), None);

    nav.select_date(d, None, true);
    assert_eq!(nav.confirm_create(key("2024-01-02"), true), Outcome::Stayed);
    assert_eq!(nav.view(), View::Home);

    assert_eq!(nav.confirm_create(d, true), Outcome::Moved(View::Admin));
}

#[test]
fn test_unprompted_confirm_does_not_open_admin() {
    let mut app = memory_app(true);
    app.dispatch(login("admin@grace.com")).expect("login");

    let d = key("2020-02-02");
    assert_eq!(
        app.dispatch(Action::ConfirmCreate(d)).expect("confirm"),
        Outcome::Stayed
    );
    assert_eq!(app.view(), View::Home);
    assert!(app.draft().is_none());
}
