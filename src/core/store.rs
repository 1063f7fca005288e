//! The devotional store: the single owner of the record collection.
//!
//! Records live in memory as an ordered `Vec` and are written back, as one
//! JSON document, to the `storage` table after every mutation.

use crate::db::log::ttlog_or_warn;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::storage;
use crate::errors::{AppError, AppResult};
use crate::models::devotional::Devotional;
use crate::ui::messages::warning;
use crate::utils::date::DateKey;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// Storage key holding the whole collection.
pub const STORAGE_KEY: &str = "devotionals";

/// Version written into every persisted envelope.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    devotionals: &'a [Devotional],
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    devotionals: Vec<Devotional>,
}

/// Accepted on-disk shapes: the versioned envelope, or the bare array
/// written before versioning existed.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Versioned(Envelope),
    Legacy(Vec<Devotional>),
}

/// Where the in-memory collection came from on open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Persisted { version: u32 },
    Seeded,
    /// Stored payload could not be used; holds the reason.
    Fallback(String),
}

/// Serialize a collection into the persisted envelope.
pub fn encode(records: &[Devotional]) -> AppResult<String> {
    Ok(serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        devotionals: records,
    })?)
}

/// Parse a persisted payload, returning the records and the payload version.
pub fn decode(raw: &str) -> AppResult<(Vec<Devotional>, u32)> {
    match serde_json::from_str::<Payload>(raw)? {
        Payload::Versioned(env) if env.version > SCHEMA_VERSION => Err(AppError::Other(format!(
            "unsupported storage version {} (newest known is {})",
            env.version, SCHEMA_VERSION
        ))),
        Payload::Versioned(env) => Ok((env.devotionals, env.version)),
        Payload::Legacy(list) => Ok((list, 0)),
    }
}

/// Built-in sample devotionals used when nothing has been stored yet.
///
/// Around Christmas 2023 "today" or "yesterday" lands on the fixed sample's
/// date; the later sample then replaces the earlier one.
pub fn seed_records(today: DateKey) -> Vec<Devotional> {
    collapse_by_date(vec![
        Devotional {
            id: "1".into(),
            date: today,
            title: "Morning Stillness".into(),
            category: "Peace".into(),
            content: "In the quiet of the morning, before the world wakes up, there is a peace that surpasses all understanding. Take a moment to breathe and center yourself today. The rush of the day will come, but this moment is yours.".into(),
            image_url: Some("https://picsum.photos/800/400?random=1".into()),
            is_read: None,
        },
        Devotional {
            id: "2".into(),
            date: today.pred(),
            title: "Strength in Weakness".into(),
            category: "Courage".into(),
            content: "Sometimes we feel like we need to carry the weight of the world on our shoulders. True strength comes from acknowledging our limits and asking for help when we need it.".into(),
            image_url: Some("https://picsum.photos/800/400?random=2".into()),
            is_read: None,
        },
        Devotional {
            id: "3".into(),
            date: DateKey::parse("2023-12-25").unwrap_or(today),
            title: "A Season of Joy".into(),
            category: "Celebration".into(),
            content: "Joy is not the absence of suffering, but the presence of hope. Let us celebrate the small wins today.".into(),
            image_url: Some("https://picsum.photos/800/400?random=3".into()),
            is_read: None,
        },
    ])
}

/// Fold a list through the upsert rule: one record per date, the last one
/// wins in the first one's position.
fn collapse_by_date(list: Vec<Devotional>) -> Vec<Devotional> {
    let mut records = Vec::with_capacity(list.len());
    for d in list {
        upsert_into(&mut records, d);
    }
    records
}

/// Insert-or-replace by date on a plain collection.
/// Returns true when an existing entry was replaced.
fn upsert_into(records: &mut Vec<Devotional>, record: Devotional) -> bool {
    match records.iter().position(|d| d.date == record.date) {
        Some(idx) => {
            records[idx] = record;
            true
        }
        None => {
            records.push(record);
            false
        }
    }
}

pub struct DevotionalStore {
    pool: DbPool,
    records: Vec<Devotional>,
    source: LoadSource,
    seed_defaults: bool,
}

impl DevotionalStore {
    /// Open the store on `pool`: migrate the schema, then load.
    pub fn open(pool: DbPool, seed_defaults: bool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn)?;

        let mut store = Self {
            pool,
            records: Vec::new(),
            source: LoadSource::Seeded,
            seed_defaults,
        };
        store.load()?;
        Ok(store)
    }

    pub fn open_path(path: &str, seed_defaults: bool) -> AppResult<Self> {
        Self::open(DbPool::new(path)?, seed_defaults)
    }

    fn defaults(&self) -> Vec<Devotional> {
        if self.seed_defaults {
            seed_records(DateKey::today())
        } else {
            Vec::new()
        }
    }

    /// (Re)read the collection from durable storage.
    ///
    /// - nothing stored: seed and persist the seed
    /// - malformed or too new: seed in memory only, log `load_fallback`;
    ///   the stored payload is left untouched until the next mutation
    pub fn load(&mut self) -> AppResult<&[Devotional]> {
        let raw = storage::get_item(&self.pool.conn, STORAGE_KEY)?;

        match raw {
            None => {
                self.records = self.defaults();
                self.source = LoadSource::Seeded;
                self.persist()?;
            }
            Some(raw) => match decode(&raw) {
                Ok((list, version)) => {
                    self.records = collapse_by_date(list);
                    self.source = LoadSource::Persisted { version };
                }
                Err(e) => {
                    let reason = e.to_string();
                    let msg = format!("Stored devotionals unreadable, using defaults: {}", reason);
                    warning(&msg);
                    ttlog_or_warn(&self.pool.conn, "load_fallback", STORAGE_KEY, &msg);
                    self.records = self.defaults();
                    self.source = LoadSource::Fallback(reason);
                }
            },
        }

        Ok(self.records.as_slice())
    }

    /// Write the full collection to durable storage.
    pub fn persist(&mut self) -> AppResult<()> {
        let payload = encode(&self.records)?;
        self.pool
            .with_conn(|conn| storage::set_item(conn, STORAGE_KEY, &payload))?;
        Ok(())
    }

    /// Replace the record with the same date in place, or append.
    /// Persists before returning the updated collection.
    pub fn upsert(&mut self, record: Devotional) -> AppResult<&[Devotional]> {
        upsert_into(&mut self.records, record);
        self.persist()?;
        Ok(self.records.as_slice())
    }

    pub fn find_by_date(&self, date: &DateKey) -> Option<&Devotional> {
        self.records.iter().find(|d| &d.date == date)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Devotional> {
        self.records.iter().find(|d| d.id == id)
    }

    pub fn contains_date(&self, date: &DateKey) -> bool {
        self.find_by_date(date).is_some()
    }

    /// Flag a record as read and persist.
    pub fn mark_read(&mut self, id: &str) -> AppResult<&Devotional> {
        let idx = self
            .records
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(format!("id {}", id)))?;

        self.records[idx].is_read = Some(true);
        self.persist()?;
        Ok(&self.records[idx])
    }

    /// Collection in insertion order.
    pub fn records(&self) -> &[Devotional] {
        &self.records
    }

    /// List-view order: newest date first.
    pub fn sorted_newest_first(&self) -> Vec<&Devotional> {
        let mut out: Vec<&Devotional> = self.records.iter().collect();
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &LoadSource {
        &self.source
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}
