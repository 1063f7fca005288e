use dailygrace::core::store::{DevotionalStore, LoadSource, STORAGE_KEY, decode, encode, seed_records};
use dailygrace::db::pool::DbPool;
use dailygrace::db::storage;
use dailygrace::errors::AppError;
use dailygrace::models::devotional::{DevotionalDraft, DraftField, EditableField};
use dailygrace::utils::date::DateKey;

mod common;
use common::{memory_store, setup_test_db};

fn key(s: &str) -> DateKey {
    DateKey::parse(s).expect("valid date")
}

fn record(id: &str, date: &str, title: &str) -> dailygrace::models::devotional::Devotional {
    let mut draft = DevotionalDraft::blank(key(date));
    draft.id = Some(id.to_string());
    draft.set(EditableField::Title, title);
    draft.set(EditableField::Content, "Body text.");
    draft.validate().expect("complete draft")
}

#[test]
fn test_date_key_normalizes_timestamps() {
    assert_eq!(key("2024-01-05T08:30:00Z"), key("2024-01-05"));
    assert_eq!(key("2024-01-05 23:59"), key("2024-01-05"));
    assert_eq!(key(" 2024-01-05 ").to_string(), "2024-01-05");
    assert!(DateKey::parse("2024-02-30").is_err());
    assert!(DateKey::parse("not a date").is_err());
}

#[test]
fn test_empty_storage_is_seeded_and_persisted() {
    let store = memory_store(true);
    assert_eq!(store.len(), 3);
    assert_eq!(store.source(), &LoadSource::Seeded);

    let today = DateKey::today();
    assert_eq!(store.find_by_date(&today).map(|d| d.id.as_str()), Some("1"));
    assert_eq!(
        store.find_by_date(&today.pred()).map(|d| d.title.as_str()),
        Some("Strength in Weakness")
    );

    let raw = storage::get_item(store.conn(), STORAGE_KEY)
        .expect("read storage")
        .expect("seed persisted");
    let (list, version) = decode(&raw).expect("decode seed");
    assert_eq!(list.len(), 3);
    assert_eq!(version, 1);
}

#[test]
fn test_no_seed_starts_empty() {
    let store = memory_store(false);
    assert!(store.is_empty());
}

#[test]
fn test_upsert_replaces_same_date_in_place() {
    let mut store = memory_store(true);

    let after = store
        .upsert(record("x1", "2023-12-25", "Replaced"))
        .expect("upsert");
    assert_eq!(after.len(), 3);
    assert_eq!(after[2].title, "Replaced");
    assert_eq!(after[2].id, "x1");

    let after = store.upsert(record("x2", "2022-06-01", "New")).expect("upsert");
    assert_eq!(after.len(), 4);
    assert_eq!(after[3].title, "New");
}

#[test]
fn test_find_misses_return_none() {
    let store = memory_store(true);
    assert!(store.find_by_date(&key("1999-01-01")).is_none());
    assert!(store.find_by_id("missing").is_none());
    assert!(store.contains_date(&key("2023-12-25")));
}

#[test]
fn test_sorted_newest_first() {
    let store = memory_store(true);
    let sorted = store.sorted_newest_first();
    let dates: Vec<_> = sorted.iter().map(|d| d.date).collect();
    let mut expected = dates.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, expected);
    assert_eq!(sorted.last().map(|d| d.id.as_str()), Some("3"));
}

#[test]
fn test_persisted_data_survives_reopen() {
    let db_path = setup_test_db("store_reopen");

    {
        let mut store = DevotionalStore::open_path(&db_path, true).expect("open");
        store
            .upsert(record("keep", "2021-04-04", "Kept"))
            .expect("upsert");
        store.mark_read("keep").expect("mark read");
    }

    let store = DevotionalStore::open_path(&db_path, true).expect("reopen");
    assert_eq!(store.source(), &LoadSource::Persisted { version: 1 });
    assert_eq!(store.len(), 4);
    let kept = store.find_by_id("keep").expect("kept record");
    assert_eq!(kept.title, "Kept");
    assert!(kept.is_read());
}

#[test]
fn test_malformed_payload_falls_back_without_overwrite() {
    let pool = DbPool::in_memory().expect("db");
    dailygrace::db::initialize::init_db(&pool.conn).expect("migrate");
    storage::set_item(&pool.conn, STORAGE_KEY, "{not json").expect("write junk");

    let store = DevotionalStore::open(pool, true).expect("open");
    assert!(matches!(store.source(), LoadSource::Fallback(_)));
    assert_eq!(store.len(), 3);

    let raw = storage::get_item(store.conn(), STORAGE_KEY)
        .expect("read")
        .expect("still stored");
    assert_eq!(raw, "{not json");

    let fallbacks: i64 = store
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'load_fallback'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(fallbacks, 1);
}

#[test]
fn test_legacy_array_payload_is_accepted() {
    let pool = DbPool::in_memory().expect("db");
    dailygrace::db::initialize::init_db(&pool.conn).expect("migrate");
    let legacy = r#"[
        {"id":"a","date":"2024-01-01","title":"One","content":"C"},
        {"id":"b","date":"2024-01-02T07:00:00.000Z","title":"Two","category":"Hope","content":"C","isRead":true}
    ]"#;
    storage::set_item(&pool.conn, STORAGE_KEY, legacy).expect("write legacy");

    let store = DevotionalStore::open(pool, true).expect("open");
    assert_eq!(store.source(), &LoadSource::Persisted { version: 0 });
    assert_eq!(store.len(), 2);

    let one = store.find_by_id("a").expect("a");
    assert_eq!(one.category, "General");
    assert_eq!(one.image_url, None);
    assert!(!one.is_read());

    let two = store.find_by_date(&key("2024-01-02")).expect("b by date");
    assert!(two.is_read());
}

#[test]
fn test_newer_version_is_a_fallback() {
    let pool = DbPool::in_memory().expect("db");
    dailygrace::db::initialize::init_db(&pool.conn).expect("migrate");
    storage::set_item(&pool.conn, STORAGE_KEY, r#"{"version":9,"devotionals":[]}"#)
        .expect("write");

    let store = DevotionalStore::open(pool, false).expect("open");
    assert!(matches!(store.source(), LoadSource::Fallback(reason) if reason.contains("version 9")));
}

#[test]
fn test_duplicate_dates_in_storage_collapse() {
    let records = vec![
        record("a", "2024-01-01", "First"),
        record("b", "2024-01-01", "Second"),
    ];
    let payload = encode(&records).expect("encode");

    let pool = DbPool::in_memory().expect("db");
    dailygrace::db::initialize::init_db(&pool.conn).expect("migrate");
    storage::set_item(&pool.conn, STORAGE_KEY, &payload).expect("write");

    let store = DevotionalStore::open(pool, true).expect("open");
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].title, "Second");
}

#[test]
fn test_encoded_shape_uses_camel_case() {
    let mut seed = seed_records(key("2024-06-01"));
    seed[0].is_read = Some(true);
    let json = encode(&seed).expect("encode");
    assert!(json.starts_with(r#"{"version":1,"devotionals":["#));
    assert!(json.contains(r#""imageUrl":"https://picsum.photos/800/400?random=1""#));
    assert!(json.contains(r#""isRead":true"#));
    assert!(json.contains(r#""date":"2024-05-31""#));
}

#[test]
fn test_mark_read_unknown_id() {
    let mut store = memory_store(true);
    assert!(matches!(store.mark_read("nope"), Err(AppError::NotFound(_))));
}

#[test]
fn test_draft_validation() {
    let mut draft = DevotionalDraft::blank(key("2024-01-01"));
    draft.set(EditableField::Title, "   ");
    match draft.validate() {
        Err(AppError::Validation(fields)) => {
            assert_eq!(fields, vec![DraftField::Title, DraftField::Content])
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    draft.set(EditableField::Title, " Hope ");
    draft.set(EditableField::Content, "Text");
    draft.set(EditableField::ImageUrl, "  ");
    let d = draft.validate().expect("valid");
    assert_eq!(d.title, "Hope");
    assert_eq!(d.category, "General");
    assert_eq!(d.image_url, None);
    assert_eq!(d.id.len(), 32);
    assert_eq!(d.date, key("2024-01-01"));
}

#[test]
fn test_draft_without_date_uses_today() {
    let draft = DevotionalDraft {
        title: "T".into(),
        content: "C".into(),
        ..DevotionalDraft::default()
    };
    assert_eq!(draft.validate().expect("valid").date, DateKey::today());
}

#[test]
fn test_seed_keeps_one_record_per_date() {
    let seed = seed_records(key("2023-12-26"));
    let dates: Vec<String> = seed.iter().map(|d| d.date_str()).collect();
    assert_eq!(dates.len(), 2);
    assert_eq!(dates, vec!["2023-12-26", "2023-12-25"]);
    assert_eq!(seed[1].title, "A Season of Joy");
}

#[test]
fn test_whole_collection_round_trips_through_storage() {
    let db_path = setup_test_db("store_round_trip");

    let before = {
        let mut store = DevotionalStore::open_path(&db_path, true).expect("open");

        let mut plain = record("plain", "2021-01-01", "No Image");
        plain.image_url = None;
        plain.category = "Hope".into();
        store.upsert(plain).expect("upsert plain");

        let mut unread = record("unread", "2021-01-02", "Explicitly Unread");
        unread.image_url = Some("https://example.com/a.png".into());
        unread.is_read = Some(false);
        store.upsert(unread).expect("upsert unread");

        store.mark_read("1").expect("mark seed read");
        store.records().to_vec()
    };

    let store = DevotionalStore::open_path(&db_path, true).expect("reopen");
    assert_eq!(store.records().to_vec(), before);
    assert_eq!(
        store.find_by_id("unread").and_then(|d| d.is_read),
        Some(false)
    );
    assert_eq!(store.find_by_id("plain").and_then(|d| d.image_url.clone()), None);
}
